//! Snapshot file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::warn;

use crate::error::{RedactError, Result};

/// Default snapshot root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "ops/snapshots";

/// Build the glob matching `describes/*.json` files under `root`.
///
/// `snapshot` selects a single dated folder; `None` or a blank value scans
/// every snapshot. The root is matched literally, while `snapshot` may
/// itself contain glob syntax (`2026-01-*`).
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use snapredact::scan::snapshot_pattern;
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(
///     snapshot_pattern(Path::new("ops/snapshots"), None),
///     "ops/snapshots/*/run/*/describes/*.json"
/// );
/// assert_eq!(
///     snapshot_pattern(Path::new("ops/snapshots"), Some(" 2026-01-18 ")),
///     "ops/snapshots/2026-01-18/run/*/describes/*.json"
/// );
/// # }
/// ```
pub fn snapshot_pattern(root: &Path, snapshot: Option<&str>) -> String {
    let folder = snapshot
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("*");
    let root = glob::Pattern::escape(&root.to_string_lossy());

    Path::new(&root)
        .join(folder)
        .join("run")
        .join("*")
        .join("describes")
        .join("*.json")
        .to_string_lossy()
        .into_owned()
}

/// Fail if `root` is a directory that cannot be listed.
///
/// A missing root is fine: it simply matches no files.
pub fn ensure_root_readable(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Ok(());
    }
    fs::read_dir(root)
        .map(|_| ())
        .map_err(|source| RedactError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })
}

/// Expand `pattern` into a list of files sorted by their full path text.
///
/// Wildcards never match names starting with a dot, so hidden folders and
/// files are left alone. Entries that cannot be read while walking are
/// logged and skipped.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(pattern, options).map_err(|e| RedactError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => tracing::debug!("Skipping non-file match {}", path.display()),
            Err(e) => warn!("Skipping unreadable path {}: {}", e.path().display(), e.error()),
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}
