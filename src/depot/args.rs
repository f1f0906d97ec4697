//! DepotDownloader argument construction
//!
//! Argument order is fixed:
//!
//! ```text
//! -app <id> -depot <id> -beta <branch> -username <u> -password <p> -dir <dir>
//!     [-manifest <id>] [-betapassword <bp>] [-filelist <path>]
//! ```
//!
//! `-beta` is always passed with the requested branch, including `public`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::DownloaderConfig;

/// Steam login used by DepotDownloader
#[derive(Clone, PartialEq, Eq)]
pub struct SteamCredentials {
    pub username: String,
    pub password: String,
    /// Password for protected branches
    pub beta_password: Option<String>,
}

impl SteamCredentials {
    /// Returns credentials only when both username and password are non-empty.
    pub fn from_parts(
        username: Option<String>,
        password: Option<String>,
        beta_password: Option<String>,
    ) -> Option<Self> {
        let username = username.filter(|u| !u.is_empty())?;
        let password = password.filter(|p| !p.is_empty())?;
        Some(Self {
            username,
            password,
            beta_password,
        })
    }
}

impl fmt::Debug for SteamCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("beta_password", &self.beta_password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// What a single DepotDownloader run should fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotRequest {
    pub target_dir: PathBuf,
    pub branch: String,
    pub manifest_id: Option<String>,
    /// Restricts the transfer to files matching the list
    pub filelist: Option<PathBuf>,
}

impl DepotRequest {
    pub fn full(target_dir: &Path, branch: &str, manifest_id: Option<&str>) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            branch: branch.to_string(),
            manifest_id: manifest_id.map(str::to_string),
            filelist: None,
        }
    }

    pub fn filtered(
        target_dir: &Path,
        branch: &str,
        manifest_id: Option<&str>,
        filelist: &Path,
    ) -> Self {
        Self {
            filelist: Some(filelist.to_path_buf()),
            ..Self::full(target_dir, branch, manifest_id)
        }
    }
}

/// Build the argv passed to DepotDownloader (program name excluded).
pub fn build_depot_args(
    config: &DownloaderConfig,
    credentials: &SteamCredentials,
    request: &DepotRequest,
) -> Vec<String> {
    let mut args = vec![
        "-app".to_string(),
        config.app_id.to_string(),
        "-depot".to_string(),
        config.depot_id.to_string(),
        "-beta".to_string(),
        request.branch.clone(),
        "-username".to_string(),
        credentials.username.clone(),
        "-password".to_string(),
        credentials.password.clone(),
        "-dir".to_string(),
        request.target_dir.display().to_string(),
    ];

    if let Some(manifest_id) = request.manifest_id.as_deref().filter(|m| !m.is_empty()) {
        args.extend(["-manifest".to_string(), manifest_id.to_string()]);
    }

    if let Some(beta_password) = credentials.beta_password.as_deref().filter(|p| !p.is_empty()) {
        args.extend(["-betapassword".to_string(), beta_password.to_string()]);
    }

    if let Some(filelist) = &request.filelist {
        args.extend(["-filelist".to_string(), filelist.display().to_string()]);
    }

    args
}

/// Single-line rendering of a command for logs, with passwords masked and the
/// file list path quoted.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    let mut rendered = vec![program.to_string()];
    let mut previous: Option<&str> = None;

    for arg in args {
        let shown = match previous {
            Some("-password") | Some("-betapassword") => "***".to_string(),
            Some("-filelist") => format!("\"{}\"", arg),
            _ => arg.clone(),
        };
        rendered.push(shown);
        previous = Some(arg.as_str());
    }

    rendered.join(" ")
}
