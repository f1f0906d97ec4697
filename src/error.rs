use std::path::PathBuf;

use thiserror::Error;

use crate::depot::error::DepotError;
use crate::version::error::ResolveError;

/// Failures that end a command with exit code 1
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolveError),

    #[error("--steam-user and --steam-pass are required when using --manifest-id")]
    CredentialsMissing,

    #[error(transparent)]
    Depot(#[from] DepotError),

    #[error("Download failed - {} not found", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("Failed to resolve version from Build.version")]
    VersionProbe,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
