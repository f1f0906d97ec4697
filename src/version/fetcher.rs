//! Fetcher trait for retrieving the raw version ledger

#[cfg(test)]
use mockall::automock;

use crate::version::error::LedgerError;

/// Trait for fetching the version ledger document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LedgerFetcher: Send + Sync {
    /// Fetches the ledger JSON text
    ///
    /// # Returns
    /// * `Ok(String)` - The raw document, not yet parsed
    /// * `Err(LedgerError)` - Network failure, timeout or unexpected status
    async fn fetch(&self) -> Result<String, LedgerError>;
}
