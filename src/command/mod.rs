//! Command implementations behind the CLI
//!
//! - [`download`]: Bring an installation up to the requested build
//! - [`resolve_version`]: Report the version a request resolves to
//! - [`output`]: GitHub Actions step outputs

pub mod download;
pub mod output;
pub mod resolve_version;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{DownloaderConfig, github_output_path};
use crate::depot::invoker::DepotInvoker;
use crate::depot::runner::{ProcessRunner, TokioProcessRunner};
use crate::version::fetcher::LedgerFetcher;
use crate::version::monitor::VersionMonitor;
use crate::version::resolver::VersionResolver;

/// External collaborators shared by both commands
pub struct CommandContext {
    pub config: DownloaderConfig,
    pub ledger: Arc<dyn LedgerFetcher>,
    pub runner: Arc<dyn ProcessRunner>,
    /// Where step outputs are appended, if anywhere
    pub output_path: Option<PathBuf>,
}

impl CommandContext {
    /// Context backed by the real version monitor, DepotDownloader and
    /// `GITHUB_OUTPUT`.
    pub fn new(config: DownloaderConfig) -> Self {
        Self {
            ledger: Arc::new(VersionMonitor::from(&config)),
            runner: Arc::new(TokioProcessRunner),
            output_path: github_output_path(),
            config,
        }
    }

    pub fn resolver(&self) -> VersionResolver {
        VersionResolver::new(self.ledger.clone())
    }

    pub fn invoker(&self) -> DepotInvoker {
        DepotInvoker::new(self.runner.clone(), self.config.clone())
    }
}
