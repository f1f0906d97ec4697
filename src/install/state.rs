//! Local installation state and the fetch decision

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{BUILD_VERSION_FILE, HEADLESS_BRANCH, HEADLESS_SUBDIR, PRIMARY_BINARY};
use crate::version::game_version::parse_version;

/// Directory that holds the game binary for `branch`.
///
/// The headless branch installs into its own subdirectory; every other branch
/// uses the installation root.
pub fn binary_dir(install_root: &Path, branch: &str) -> PathBuf {
    if branch == HEADLESS_BRANCH {
        install_root.join(HEADLESS_SUBDIR)
    } else {
        install_root.to_path_buf()
    }
}

/// Path of the primary binary checked to decide whether the game is installed.
pub fn binary_path(install_root: &Path, branch: &str) -> PathBuf {
    binary_dir(install_root, branch).join(PRIMARY_BINARY)
}

/// Trimmed contents of `Build.version` in `dir`, if the file can be read and
/// is not blank.
pub fn read_version_marker(dir: &Path) -> Option<String> {
    std::fs::read_to_string(dir.join(BUILD_VERSION_FILE))
        .ok()
        .map(|content| content.trim().to_string())
        .filter(|version| !version.is_empty())
}

/// Snapshot of what is installed, read fresh on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledState {
    pub binary_path: PathBuf,
    pub binary_present: bool,
    pub version: Option<String>,
}

impl InstalledState {
    pub fn inspect(install_root: &Path, branch: &str) -> Self {
        let binary_path = binary_path(install_root, branch);
        Self {
            binary_present: binary_path.exists(),
            version: read_version_marker(install_root),
            binary_path,
        }
    }
}

/// Decide whether a fetch is required to bring `state` to `target_version`.
///
/// Installed versions newer than the target are accepted; downgrades are
/// never forced.
pub fn needs_fetch(state: &InstalledState, target_version: &str) -> bool {
    if !state.binary_present {
        info!("Resonite not found, download required");
        return true;
    }

    let Some(installed_version) = state.version.as_deref() else {
        info!("No version info found, download required");
        return true;
    };

    let (Some(installed), Some(target)) =
        (parse_version(installed_version), parse_version(target_version))
    else {
        info!("Unable to parse version, download required");
        return true;
    };

    if installed >= target {
        info!(
            "Resonite {} already installed [target: {}]",
            installed_version, target_version
        );
        return false;
    }

    info!("Upgrade needed: {} -> {}", installed_version, target_version);
    true
}
