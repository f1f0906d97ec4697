use std::path::Path;

use serde::Deserialize;

// =============================================================================
// Steam depot constants
// =============================================================================

/// Steam application id of Resonite
pub const APP_ID: u32 = 2519830;

/// Depot that carries the game files
pub const DEPOT_ID: u32 = 2519832;

/// Executable name of the external depot fetch tool
pub const DEPOT_DOWNLOADER: &str = "DepotDownloader";

// =============================================================================
// Version ledger
// =============================================================================

/// Version ledger published by resonite-version-monitor
pub const VERSION_MONITOR_URL: &str = "https://raw.githubusercontent.com/resonite-love/resonite-version-monitor/refs/heads/master/data/versions.json";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Installation layout
// =============================================================================

/// Version marker written into the installation root
pub const BUILD_VERSION_FILE: &str = "Build.version";

/// File whose presence means the game is installed
pub const PRIMARY_BINARY: &str = "Resonite.dll";

/// Branch installed into its own subdirectory
pub const HEADLESS_BRANCH: &str = "headless";

/// Subdirectory used by [`HEADLESS_BRANCH`]
pub const HEADLESS_SUBDIR: &str = "Headless";

pub const DEFAULT_BRANCH: &str = "public";

/// Placeholder version prefix used until a manifest's real version is known
pub const MANIFEST_VERSION_PREFIX: &str = "manifest-";

// =============================================================================
// Environment
// =============================================================================

/// GitHub Actions step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Log filter directive, e.g. `debug` or `resonite_downloader=trace`
pub const LOG_ENV: &str = "RESONITE_DOWNLOADER_LOG";

/// Downloader configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloaderConfig {
    /// URL of the version ledger JSON document
    pub ledger_url: String,
    /// Program used to fetch depot content
    pub depot_downloader: String,
    pub app_id: u32,
    pub depot_id: u32,
    /// Ledger fetch timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            ledger_url: VERSION_MONITOR_URL.to_string(),
            depot_downloader: DEPOT_DOWNLOADER.to_string(),
            app_id: APP_ID,
            depot_id: DEPOT_ID,
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl DownloaderConfig {
    /// Loads configuration from a JSON file, using defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Returns the automation output file named by `GITHUB_OUTPUT`, if any.
pub fn github_output_path() -> Option<std::path::PathBuf> {
    output_path_from_env(std::env::var(GITHUB_OUTPUT_ENV).ok())
}

fn output_path_from_env(value: Option<String>) -> Option<std::path::PathBuf> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(std::path::PathBuf::from)
}
