//! Resolve-version command: report what a request resolves to
//!
//! Never touches an installation directory. When no version is requested the
//! real version is discovered in this order:
//!
//! - credentials given: download only `Build.version` (branch head or manifest)
//! - manifest given without credentials: error, nothing can be downloaded
//! - nothing given: highest version listed in the version monitor ledger

use tracing::info;

use crate::command::CommandContext;
use crate::command::output::append_outputs;
use crate::depot::args::SteamCredentials;
use crate::depot::probe::probe_build_version;
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub branch: String,
    pub version: Option<String>,
    pub manifest_id: Option<String>,
    /// Present only when both username and password were supplied
    pub credentials: Option<SteamCredentials>,
}

/// The version and manifest a request resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub version: String,
    pub manifest_id: Option<String>,
}

pub async fn run(ctx: &CommandContext, request: &ResolveRequest) -> Result<ResolvedRelease, Error> {
    info!("=== Resonite Version Resolver ===");
    info!("Branch: {}", request.branch);

    let requested_version = request.version.as_deref().filter(|v| !v.is_empty());
    let requested_manifest_id = request.manifest_id.as_deref().filter(|m| !m.is_empty());

    let resolver = ctx.resolver();
    let target = resolver
        .resolve(requested_version, requested_manifest_id, &request.branch)
        .await?;

    let release = match (requested_version, &request.credentials) {
        (Some(_), _) => ResolvedRelease {
            version: target.version.to_string(),
            manifest_id: target.manifest_id,
        },
        (None, Some(credentials)) => {
            let version = probe_build_version(
                &ctx.invoker(),
                credentials,
                &request.branch,
                requested_manifest_id,
            )
            .await?;
            ResolvedRelease {
                version,
                manifest_id: target.manifest_id,
            }
        }
        (None, None) if requested_manifest_id.is_some() => {
            return Err(Error::CredentialsMissing);
        }
        (None, None) => {
            info!(
                "Steam credentials were not provided. Falling back to version monitor for latest version."
            );
            let latest = resolver.resolve_latest(&request.branch).await?;
            ResolvedRelease {
                version: latest.version,
                manifest_id: latest.manifest_id,
            }
        }
    };

    info!("Resolved version: {}", release.version);
    if let Some(manifest_id) = &release.manifest_id {
        info!("Manifest ID: {}", manifest_id);
    }

    append_outputs(
        ctx.output_path.as_deref(),
        &release.version,
        release.manifest_id.as_deref(),
    )?;

    Ok(release)
}
