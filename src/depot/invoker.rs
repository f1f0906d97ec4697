use std::sync::Arc;

use tracing::info;

use crate::config::DownloaderConfig;
use crate::depot::args::{DepotRequest, SteamCredentials, build_depot_args};
use crate::depot::error::DepotError;
use crate::depot::runner::ProcessRunner;

/// Runs the configured depot tool for a request
pub struct DepotInvoker {
    runner: Arc<dyn ProcessRunner>,
    config: DownloaderConfig,
}

impl DepotInvoker {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: DownloaderConfig) -> Self {
        Self { runner, config }
    }

    pub async fn invoke(
        &self,
        credentials: &SteamCredentials,
        request: &DepotRequest,
    ) -> Result<(), DepotError> {
        let args = build_depot_args(&self.config, credentials, request);
        info!(
            "Running {} for branch '{}' into {:?}",
            self.config.depot_downloader, request.branch, request.target_dir
        );
        self.runner.run(&self.config.depot_downloader, &args).await
    }
}
