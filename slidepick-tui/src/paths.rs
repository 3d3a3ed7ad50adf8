//! Where the demo keeps its settings and logs.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const KEEP_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "slidepick", "slidepick")
}

/// Directory holding the saved picker settings.
///
/// - Linux: `$XDG_DATA_HOME/slidepick/settings`
/// - macOS: `~/Library/Application Support/dev.slidepick.slidepick/settings`
pub fn settings_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("settings"))
}

/// Directory holding the log files.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Archive the previous run's log and return the path for this run's log.
pub fn rotate_logs() -> Option<PathBuf> {
    let dir = log_dir()?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    Some(rotate_in(&dir, &stamp))
}

fn rotate_in(dir: &Path, stamp: &str) -> PathBuf {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{stamp}.log")));
    }
    prune_archives(dir, KEEP_LOGS);
    latest
}

/// Archive names are timestamps, so name order is age order.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in archives.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
