//! Best-effort clearing of an installation directory

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Remove every entry inside `directory`, keeping the directory itself.
///
/// Failures on individual entries are logged and skipped. A missing directory
/// is left alone.
pub fn clean_directory(directory: &Path) {
    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
        Err(e) => {
            warn!("Failed to list {:?}: {}", directory, e);
            return;
        }
    };

    let failures = remove_entries(entries.map(|entry| {
        entry.map(|entry| {
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            (entry.path(), is_dir)
        })
    }));

    if failures > 0 {
        warn!("{} entries in {:?} could not be removed", failures, directory);
    }
}

/// Remove each `(path, is_dir)` entry, returning how many could not be
/// listed or deleted.
fn remove_entries(entries: impl Iterator<Item = std::io::Result<(PathBuf, bool)>>) -> usize {
    let mut failures = 0;

    for entry in entries {
        let (path, is_dir) = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read directory entry: {}", e);
                failures += 1;
                continue;
            }
        };

        let result = if is_dir {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };

        match result {
            Ok(()) => debug!("Deleted {:?}", path),
            Err(e) => {
                warn!("Failed to delete {:?}: {}", path, e);
                failures += 1;
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clean_directory_removes_contents() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("file.txt"), "x").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("inner.txt"), "x").unwrap();

        clean_directory(dir.path());

        assert!(dir.path().exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clean_directory_ignores_missing_directory() {
        let dir = TempDir::new().unwrap();

        clean_directory(&dir.path().join("missing"));
    }

    #[cfg(unix)]
    #[test]
    fn clean_directory_removes_symlink_without_following_it() {
        let outside = TempDir::new().unwrap();
        std::fs::write(outside.path().join("keep.txt"), "x").unwrap();
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        clean_directory(dir.path());

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(outside.path().join("keep.txt").exists());
    }

    // Failures are built from unreadable and vanished entries rather than
    // permissions, which root ignores.
    #[test]
    fn remove_entries_continues_after_failures() {
        let dir = TempDir::new().unwrap();
        let kept_going = dir.path().join("after.txt");
        std::fs::write(&kept_going, "x").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let failures = remove_entries(
            vec![
                Err(std::io::Error::other("unreadable entry")),
                Ok((dir.path().join("vanished.txt"), false)),
                Ok((kept_going.clone(), false)),
                Ok((nested.clone(), true)),
            ]
            .into_iter(),
        );

        assert_eq!(failures, 2);
        assert!(!kept_going.exists());
        assert!(!nested.exists());
    }
}
