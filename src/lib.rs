pub mod cli;
pub mod command;
pub mod config;
pub mod depot;
pub mod error;
pub mod install;
pub mod logging;
pub mod version;
