//! resonite-version-monitor ledger fetcher

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::DownloaderConfig;
use crate::version::error::LedgerError;
use crate::version::fetcher::LedgerFetcher;

/// Fetches the version ledger over HTTP
pub struct VersionMonitor {
    client: reqwest::Client,
    url: String,
}

impl VersionMonitor {
    /// Creates a new VersionMonitor for a custom ledger URL
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("resonite-downloader")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl From<&DownloaderConfig> for VersionMonitor {
    fn from(config: &DownloaderConfig) -> Self {
        Self::new(
            &config.ledger_url,
            Duration::from_millis(config.fetch_timeout_ms),
        )
    }
}

#[async_trait::async_trait]
impl LedgerFetcher for VersionMonitor {
    async fn fetch(&self) -> Result<String, LedgerError> {
        debug!("Fetching version ledger from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version monitor returned status {}: {}", status, self.url);
            return Err(LedgerError::InvalidResponse(status.to_string()));
        }

        Ok(response.text().await?)
    }
}
