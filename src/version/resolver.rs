//! Turns a partial user request into the (version, manifest) pair to install
//!
//! | version | manifest | result                                   | ledger |
//! |---------|----------|------------------------------------------|--------|
//! | yes     | yes      | both, verbatim                           | no     |
//! | no      | yes      | `manifest-<id>` placeholder + manifest   | no     |
//! | yes     | no       | exact ledger match, error if none        | yes    |
//! | no      | no       | `latest`, left to DepotDownloader        | no     |

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::config::MANIFEST_VERSION_PREFIX;
use crate::version::error::ResolveError;
use crate::version::fetcher::LedgerFetcher;
use crate::version::ledger::{Ledger, LedgerMatch};

/// Version the installation should end up at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetVersion {
    /// A concrete game version
    Exact(String),
    /// Whatever the depot currently serves
    Latest,
    /// Pinned by manifest; the version is only known after download
    PendingManifest(String),
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetVersion::Exact(version) => f.write_str(version),
            TargetVersion::Latest => f.write_str("latest"),
            TargetVersion::PendingManifest(id) => write!(f, "{MANIFEST_VERSION_PREFIX}{id}"),
        }
    }
}

/// Outcome of version resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub version: TargetVersion,
    pub manifest_id: Option<String>,
}

pub struct VersionResolver {
    fetcher: Arc<dyn LedgerFetcher>,
}

impl VersionResolver {
    pub fn new(fetcher: Arc<dyn LedgerFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve the target for a download. Empty strings count as absent.
    pub async fn resolve(
        &self,
        requested_version: Option<&str>,
        requested_manifest_id: Option<&str>,
        branch: &str,
    ) -> Result<ResolvedTarget, ResolveError> {
        let requested_version = requested_version.filter(|v| !v.is_empty());
        let requested_manifest_id = requested_manifest_id.filter(|m| !m.is_empty());

        match (requested_version, requested_manifest_id) {
            (Some(version), Some(manifest_id)) => {
                info!("Using requested version: {}", version);
                info!("Using requested manifest ID: {}", manifest_id);
                Ok(ResolvedTarget {
                    version: TargetVersion::Exact(version.to_string()),
                    manifest_id: Some(manifest_id.to_string()),
                })
            }
            (None, Some(manifest_id)) => {
                info!("Using requested manifest ID: {}", manifest_id);
                info!("Version will be determined from Build.version after download");
                Ok(ResolvedTarget {
                    version: TargetVersion::PendingManifest(manifest_id.to_string()),
                    manifest_id: Some(manifest_id.to_string()),
                })
            }
            (Some(version), None) => self.resolve_manifest_for(version, branch).await,
            (None, None) => {
                info!(
                    "No version or manifest provided for branch '{}', using latest",
                    branch
                );
                Ok(ResolvedTarget {
                    version: TargetVersion::Latest,
                    manifest_id: None,
                })
            }
        }
    }

    /// Highest valid version the ledger lists for `branch`.
    pub async fn resolve_latest(&self, branch: &str) -> Result<LedgerMatch, ResolveError> {
        info!(
            "Fetching latest Resonite version for branch '{}' from version monitor...",
            branch
        );

        let ledger = self.fetch_ledger().await?;
        ledger
            .find_latest(branch)?
            .ok_or_else(|| ResolveError::NoValidVersion {
                branch: branch.to_string(),
            })
    }

    async fn resolve_manifest_for(
        &self,
        version: &str,
        branch: &str,
    ) -> Result<ResolvedTarget, ResolveError> {
        info!(
            "Resolving manifest ID for requested version '{}' on branch '{}'...",
            version, branch
        );

        let ledger = self.fetch_ledger().await?;
        let found = ledger
            .find_exact(branch, version)?
            .ok_or_else(|| ResolveError::VersionNotFound {
                version: version.to_string(),
                branch: branch.to_string(),
            })?;

        let Some(manifest_id) = found.manifest_id else {
            return Err(ResolveError::ManifestMissing {
                version: version.to_string(),
                branch: branch.to_string(),
            });
        };

        info!("Resolved manifest ID: {}", manifest_id);
        Ok(ResolvedTarget {
            version: TargetVersion::Exact(found.version),
            manifest_id: Some(manifest_id),
        })
    }

    async fn fetch_ledger(&self) -> Result<Ledger, ResolveError> {
        let json = self.fetcher.fetch().await?;
        Ok(Ledger::from_json(&json)?)
    }
}
