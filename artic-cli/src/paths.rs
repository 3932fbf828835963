//! Where the binary keeps its settings file and logs.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "edu";
const ORGANIZATION: &str = "artic";
const APPLICATION: &str = "artic";

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding `latest.log` and its rotated predecessors.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default location of `config.json` when `--config` is not given.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Log file written by the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archived logs kept after rotation.
const MAX_OLD_LOGS: usize = 25;

/// Archives the previous run's log under a timestamp and prunes old archives.
///
/// Runs before [`log_file`] is truncated for the new run.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        if let Err(e) = fs::rename(&latest, cache.join(format!("{stamp}.log"))) {
            eprintln!("could not archive {}: {e}", latest.display());
        }
    }

    prune_archives(cache, MAX_OLD_LOGS);
}

/// Deletes all but the `keep` most recently modified archived logs.
fn prune_archives(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut archives: Vec<(Option<SystemTime>, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
        .collect();

    archives.sort();
    let excess = archives.len().saturating_sub(keep);
    for (_, path) in archives.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("latest.log"), "previous run").unwrap();

        rotate_logs_in(dir.path());

        assert!(!dir.path().join("latest.log").exists());
        let archived: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(archived.len(), 1);
    }

    #[test]
    fn test_prune_keeps_newest_archives() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("2026010{i}_000000.log")), "").unwrap();
        }
        fs::write(dir.path().join("latest.log"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        prune_archives(dir.path(), 2);

        let remaining = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, 4);
        assert!(dir.path().join("latest.log").exists());
        assert!(dir.path().join("notes.txt").exists());
    }
}
