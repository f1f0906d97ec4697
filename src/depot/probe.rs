//! Learn a build's version by downloading only its `Build.version`

use tracing::{debug, info};

use crate::config::BUILD_VERSION_FILE;
use crate::depot::args::{DepotRequest, SteamCredentials};
use crate::depot::invoker::DepotInvoker;
use crate::error::Error;
use crate::install::state::read_version_marker;

/// DepotDownloader file list matching only the version marker
const BUILD_VERSION_FILELIST: &str = "regex:Build\\.version\n";

/// Fetch `Build.version` for `manifest_id` (or the branch head) into a
/// throwaway directory and return its trimmed contents.
///
/// The temporary directory is removed afterwards; removal failures are ignored.
pub async fn probe_build_version(
    invoker: &DepotInvoker,
    credentials: &SteamCredentials,
    branch: &str,
    manifest_id: Option<&str>,
) -> Result<String, Error> {
    let temp_dir = tempfile::Builder::new()
        .prefix("resonite-version-check-")
        .tempdir()?;
    debug!("Probing Build.version in {:?}", temp_dir.path());

    let filelist = temp_dir.path().join("files.txt");
    tokio::fs::write(&filelist, BUILD_VERSION_FILELIST).await?;

    let label = manifest_id.map_or_else(|| "latest build".to_string(), |m| format!("manifest {m}"));
    info!("Downloading {} for {}...", BUILD_VERSION_FILE, label);

    let request = DepotRequest::filtered(temp_dir.path(), branch, manifest_id, &filelist);
    let version = invoker
        .invoke(credentials, &request)
        .await
        .map(|()| read_version_marker(temp_dir.path()));

    if let Err(e) = temp_dir.close() {
        debug!("Ignoring temp dir cleanup failure: {}", e);
    }

    version?.ok_or(Error::VersionProbe)
}
