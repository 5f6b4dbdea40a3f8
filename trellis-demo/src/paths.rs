//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "norpie";
const APPLICATION: &str = "trellis";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, home of the demo's logs.
///
/// - Linux: `$XDG_CACHE_HOME/trellis` or `~/.cache/trellis`
/// - macOS: `~/Library/Caches/dev.norpie.trellis`
/// - Windows: `C:\Users\<User>\AppData\Local\norpie\trellis\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Config directory, searched for `theme.json` when no theme is given.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn default_theme_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("theme.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` under a timestamped name and prune old archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{timestamp}.log")));
    }

    prune_archived_logs(&cache);
}

fn prune_archived_logs(cache: &Path) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first.
    archived.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());

    let excess = archived.len().saturating_sub(MAX_OLD_LOGS);
    for entry in archived.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
