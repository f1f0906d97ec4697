//! DepotDownloader invocation
//!
//! - [`args`]: Argument list construction
//! - [`invoker`]: Full and filtered transfers for a configured tool
//! - [`runner`]: Subprocess execution behind the [`runner::ProcessRunner`] trait
//! - [`probe`]: Version discovery by fetching only `Build.version`
//! - [`error`]: Subprocess failure kinds

pub mod args;
pub mod error;
pub mod invoker;
pub mod probe;
pub mod runner;
