//! Subprocess execution for the external depot tool

use std::process::Stdio;

#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::depot::args::render_command_line;
use crate::depot::error::DepotError;

/// Trait for running an external program to completion
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs `program` with `args` (no shell) and waits for it to exit.
    ///
    /// # Returns
    /// * `Ok(())` - The process exited with code 0
    /// * `Err(DepotError::Unstartable)` - The process could not be spawned
    /// * `Err(DepotError::NonzeroExit)` - Any other exit, including death by signal
    async fn run(&self, program: &str, args: &[String]) -> Result<(), DepotError>;
}

/// Runs processes with tokio, inheriting stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

#[async_trait::async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), DepotError> {
        debug!("Running {}", render_command_line(program, args));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| {
                error!("Failed to start {}: {}", program, source);
                DepotError::Unstartable {
                    program: program.to_string(),
                    source,
                }
            })?;

        info!(pid = ?child.id(), "{} started", program);

        let status = child.wait().await.map_err(|source| DepotError::Unstartable {
            program: program.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DepotError::NonzeroExit {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}
