//! Download command: bring an installation up to the requested build
//!
//! ```text
//! Resolving ─┬─▶ ResolutionFailed
//!            └─▶ CheckingLocalState ─┬─▶ Satisfied
//!                                    └─▶ Cleaning ─▶ Fetching ─┬─▶ FetchFailed
//!                                                              └─▶ VerifyingArtifact ─┬─▶ VerifyFailed
//!                                                                                     └─▶ Done
//! ```
//!
//! Every step runs once; nothing is retried.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::command::CommandContext;
use crate::command::output::append_outputs;
use crate::depot::args::{DepotRequest, SteamCredentials};
use crate::error::Error;
use crate::install::clean::clean_directory;
use crate::install::state::{InstalledState, needs_fetch, read_version_marker};
use crate::version::resolver::ResolvedTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPhase {
    Resolving,
    CheckingLocalState,
    Cleaning,
    Fetching,
    VerifyingArtifact,
}

#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub install_root: PathBuf,
    pub branch: String,
    pub credentials: SteamCredentials,
    pub version: Option<String>,
    pub manifest_id: Option<String>,
}

/// How a successful download run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The installed build already satisfied the target
    Satisfied,
    /// A fresh copy was fetched and verified
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub outcome: FetchOutcome,
    pub target: ResolvedTarget,
    /// Version recorded in `Build.version`, or the target when it is absent
    pub version: String,
    pub manifest_id: Option<String>,
}

pub async fn run(ctx: &CommandContext, request: &DownloadRequest) -> Result<DownloadReport, Error> {
    info!("=== Resonite Downloader ===");

    debug!(phase = ?FetchPhase::Resolving);
    let target = ctx
        .resolver()
        .resolve(
            request.version.as_deref(),
            request.manifest_id.as_deref(),
            &request.branch,
        )
        .await?;

    info!("Target version: {}", target.version);
    if let Some(manifest_id) = &target.manifest_id {
        info!("Manifest ID: {}", manifest_id);
    }
    info!("Branch: {}", request.branch);

    let outcome = fetch_if_needed(ctx, request, &target).await?;

    let target_version = target.version.to_string();
    let version = match read_version_marker(&request.install_root) {
        Some(actual) => {
            if actual != target_version {
                info!("Actual version from Build.version: {}", actual);
            }
            actual
        }
        None => target_version,
    };

    append_outputs(
        ctx.output_path.as_deref(),
        &version,
        target.manifest_id.as_deref(),
    )?;

    Ok(DownloadReport {
        outcome,
        manifest_id: target.manifest_id.clone(),
        target,
        version,
    })
}

async fn fetch_if_needed(
    ctx: &CommandContext,
    request: &DownloadRequest,
    target: &ResolvedTarget,
) -> Result<FetchOutcome, Error> {
    debug!(phase = ?FetchPhase::CheckingLocalState);
    let target_version = target.version.to_string();
    let state = InstalledState::inspect(&request.install_root, &request.branch);

    if !needs_fetch(&state, &target_version) {
        return Ok(FetchOutcome::Satisfied);
    }

    info!(
        "Downloading Resonite {} (branch: {})...",
        target_version, request.branch
    );

    debug!(phase = ?FetchPhase::Cleaning);
    clean_directory(&request.install_root);

    debug!(phase = ?FetchPhase::Fetching);
    let depot_request = DepotRequest::full(
        &request.install_root,
        &request.branch,
        target.manifest_id.as_deref(),
    );
    ctx.invoker()
        .invoke(&request.credentials, &depot_request)
        .await?;

    debug!(phase = ?FetchPhase::VerifyingArtifact);
    if !state.binary_path.exists() {
        return Err(Error::ArtifactMissing(state.binary_path));
    }

    let installed = read_version_marker(&request.install_root).unwrap_or(target_version);
    info!("Resonite {} installed successfully", installed);

    Ok(FetchOutcome::Done)
}
