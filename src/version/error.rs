use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Timed out fetching version info")]
    Timeout,

    #[error("Unexpected status: {0}")]
    InvalidResponse(String),

    #[error("Invalid JSON from version monitor: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Version monitor response missing '{branch}' field (available: {})", .available.join(", "))]
    BranchNotFound {
        branch: String,
        available: Vec<String>,
    },
}

impl From<reqwest::Error> for LedgerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LedgerError::Timeout
        } else {
            LedgerError::Network(e)
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Could not find version '{version}' on branch '{branch}'")]
    VersionNotFound { version: String, branch: String },

    #[error("Could not find manifest ID for version '{version}' on branch '{branch}'")]
    ManifestMissing { version: String, branch: String },

    #[error("No valid version listed on branch '{branch}'")]
    NoValidVersion { branch: String },
}
