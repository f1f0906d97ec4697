use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::command::download::DownloadRequest;
use crate::command::resolve_version::ResolveRequest;
use crate::config::DEFAULT_BRANCH;
use crate::depot::args::SteamCredentials;

#[derive(Debug, Parser)]
#[command(name = "resonite-downloader")]
#[command(version, about = "Resonite Downloader - Download and manage Resonite game files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RESONITE_DOWNLOADER_LOG is set
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download Resonite game files
    Download(DownloadArgs),
    /// Resolve and display the version for a given branch
    ResolveVersion(ResolveVersionArgs),
}

#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Game installation directory
    #[arg(short = 'd', long)]
    pub game_dir: PathBuf,

    /// Steam username
    #[arg(short = 'u', long)]
    pub steam_user: String,

    /// Steam password
    #[arg(short = 'p', long)]
    pub steam_pass: String,

    /// Beta password
    #[arg(short = 'b', long)]
    pub beta_pass: Option<String>,

    /// Specific version to download (defaults to latest)
    #[arg(short = 'v', long = "version")]
    pub game_version: Option<String>,

    /// Specific manifest ID to use (bypasses version resolution)
    #[arg(short = 'm', long)]
    pub manifest_id: Option<String>,

    /// Branch to download from
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
}

#[derive(Debug, Args)]
pub struct ResolveVersionArgs {
    /// Specific version to check (if not provided, fetches latest)
    #[arg(short = 'v', long = "version")]
    pub game_version: Option<String>,

    /// Specific manifest ID to use (downloads Build.version to resolve)
    #[arg(short = 'm', long)]
    pub manifest_id: Option<String>,

    /// Steam username (required when using --manifest-id)
    #[arg(short = 'u', long)]
    pub steam_user: Option<String>,

    /// Steam password (required when using --manifest-id)
    #[arg(short = 'p', long)]
    pub steam_pass: Option<String>,

    /// Beta password (for protected branches)
    #[arg(long)]
    pub beta_pass: Option<String>,

    /// Branch to query
    #[arg(short = 'b', long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
}

impl From<DownloadArgs> for DownloadRequest {
    fn from(args: DownloadArgs) -> Self {
        Self {
            install_root: args.game_dir,
            branch: args.branch,
            credentials: SteamCredentials {
                username: args.steam_user,
                password: args.steam_pass,
                beta_password: args.beta_pass,
            },
            version: args.game_version,
            manifest_id: args.manifest_id,
        }
    }
}

impl From<ResolveVersionArgs> for ResolveRequest {
    fn from(args: ResolveVersionArgs) -> Self {
        Self {
            branch: args.branch,
            version: args.game_version,
            manifest_id: args.manifest_id,
            credentials: SteamCredentials::from_parts(
                args.steam_user,
                args.steam_pass,
                args.beta_pass,
            ),
        }
    }
}
