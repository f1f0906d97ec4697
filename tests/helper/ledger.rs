//! Ledger test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use resonite_downloader::version::error::LedgerError;
use resonite_downloader::version::fetcher::LedgerFetcher;

/// Ledger fetcher serving a fixed document and counting requests
pub struct MockLedger {
    document: Option<String>,
    fetches: Arc<AtomicUsize>,
}

impl MockLedger {
    pub fn with_document(document: &str) -> Self {
        Self {
            document: Some(document.to_string()),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A ledger whose every fetch times out
    pub fn unreachable() -> Self {
        Self {
            document: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        self.fetches.clone()
    }
}

#[async_trait]
impl LedgerFetcher for MockLedger {
    async fn fetch(&self) -> Result<String, LedgerError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.document.clone().ok_or(LedgerError::Timeout)
    }
}

pub const MONITOR_JSON: &str = r#"{
    "public": [
        { "gameVersion": "2026.2.1.1", "manifestId": "1111111111111111111" },
        { "gameVersion": "2026.2.1.4", "manifestId": "4444444444444444444" },
        { "gameVersion": "not-a-version", "manifestId": "9999999999999999999" },
        { "gameVersion": "2026.2.1.3", "manifestId": "3333333333333333333" }
    ],
    "headless": [
        { "gameVersion": "2026.2.1.2", "manifestId": "2222222222222222222" }
    ]
}"#;
