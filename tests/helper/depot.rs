//! DepotDownloader test utilities

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use resonite_downloader::command::CommandContext;
use resonite_downloader::config::{BUILD_VERSION_FILE, DownloaderConfig, PRIMARY_BINARY};
use resonite_downloader::depot::error::DepotError;
use resonite_downloader::depot::runner::ProcessRunner;
use resonite_downloader::version::fetcher::LedgerFetcher;

/// What the fake tool does when run
#[derive(Debug, Clone)]
pub enum DepotBehavior {
    /// Exit 0 after writing the given files (relative to `-dir`)
    Writes(Vec<(String, String)>),
    /// Exit with the given code without writing anything
    Fails(i32),
    /// Behave as if the executable could not be started
    Unstartable,
}

/// Fake DepotDownloader that records its invocations
pub struct FakeDepotDownloader {
    behavior: DepotBehavior,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeDepotDownloader {
    pub fn new(behavior: DepotBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Installs the game binary and a version marker for `version`.
    pub fn installing(version: &str, binary_subdir: Option<&str>) -> Self {
        let binary = match binary_subdir {
            Some(subdir) => format!("{}/{}", subdir, PRIMARY_BINARY),
            None => PRIMARY_BINARY.to_string(),
        };
        Self::new(DepotBehavior::Writes(vec![
            (binary, "binary".to_string()),
            (BUILD_VERSION_FILE.to_string(), format!("{}\n", version)),
        ]))
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeDepotDownloader {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), DepotError> {
        self.calls.lock().unwrap().push(args.to_vec());

        match &self.behavior {
            DepotBehavior::Writes(files) => {
                let dir = PathBuf::from(arg_after(args, "-dir").expect("-dir argument"));
                for (name, content) in files {
                    let path = dir.join(name);
                    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                    std::fs::write(path, content).unwrap();
                }
                Ok(())
            }
            DepotBehavior::Fails(code) => Err(DepotError::NonzeroExit {
                program: program.to_string(),
                code: Some(*code),
            }),
            DepotBehavior::Unstartable => Err(DepotError::Unstartable {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}

/// Value following `flag` in an argument list
pub fn arg_after(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

/// Context wired to fakes, writing step outputs into `output_dir`
pub fn create_test_context(
    ledger: impl LedgerFetcher + 'static,
    depot: impl ProcessRunner + 'static,
    output_dir: &Path,
) -> CommandContext {
    CommandContext {
        config: DownloaderConfig::default(),
        ledger: Arc::new(ledger),
        runner: Arc::new(depot),
        output_path: Some(output_dir.join("github_output")),
    }
}

pub fn read_outputs(output_dir: &Path) -> String {
    std::fs::read_to_string(output_dir.join("github_output")).unwrap_or_default()
}

/// Installation root with an optional binary and version marker
pub fn create_install_root(binary_subdir: Option<&str>, version: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(subdir) = binary_subdir {
        let binary_dir = if subdir.is_empty() {
            dir.path().to_path_buf()
        } else {
            dir.path().join(subdir)
        };
        std::fs::create_dir_all(&binary_dir).unwrap();
        std::fs::write(binary_dir.join(PRIMARY_BINARY), "x").unwrap();
    }
    if let Some(version) = version {
        std::fs::write(dir.path().join(BUILD_VERSION_FILE), version).unwrap();
    }
    dir
}
