//! Local installation inspection and cleanup

pub mod clean;
pub mod state;
