//! Best-effort recursive removal.
//!
//! A plain `remove_dir_all` is tried first. When it fails, the tree is walked
//! bottom-up and every entry removed individually; an entry refused with
//! `PermissionDenied` gets itself and its parent made writable and is retried
//! exactly once. Entries that still fail are reported, never raised.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ports::RemovalReport;

/// Remove `path` and everything below it, tolerating read-only and in-use entries.
pub fn force_remove_dir_all(path: &Path) -> RemovalReport {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return RemovalReport::Absent,
        Err(err) => return RemovalReport::Incomplete { failures: vec![(path.to_path_buf(), err)] },
    };

    if !metadata.is_dir() {
        return match remove_with_retry(path, false) {
            Ok(()) => RemovalReport::Removed,
            Err(err) => RemovalReport::Incomplete { failures: vec![(path.to_path_buf(), err)] },
        };
    }

    match fs::remove_dir_all(path) {
        Ok(()) => return RemovalReport::Removed,
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                error = %err,
                "Plain removal failed, removing entry by entry"
            );
        }
    }

    let mut failures: Vec<(PathBuf, io::Error)> = Vec::new();
    for entry in WalkDir::new(path).follow_links(false).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let failed =
                    err.path().map(Path::to_path_buf).unwrap_or_else(|| path.to_path_buf());
                failures.push((failed, err.into()));
                continue;
            }
        };

        if !entry.path().exists() && !entry.path_is_symlink() {
            continue;
        }

        if let Err(err) = remove_with_retry(entry.path(), entry.file_type().is_dir()) {
            tracing::debug!(
                path = %entry.path().display(),
                error = %err,
                "Entry could not be removed"
            );
            failures.push((entry.path().to_path_buf(), err));
        }
    }

    if failures.is_empty() && fs::symlink_metadata(path).is_err() {
        RemovalReport::Removed
    } else {
        if failures.is_empty() {
            failures.push((
                path.to_path_buf(),
                io::Error::other("directory still present after removal"),
            ));
        }
        RemovalReport::Incomplete { failures }
    }
}

fn remove_with_retry(path: &Path, is_dir: bool) -> io::Result<()> {
    match remove_entry(path, is_dir) {
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(
                path = %path.display(),
                "Permission denied, making writable and retrying"
            );
            // A failure here surfaces through the retry below.
            if let Some(parent) = path.parent()
                && let Err(err) = make_writable(parent)
            {
                tracing::debug!(
                    path = %parent.display(),
                    error = %err,
                    "Could not make parent writable"
                );
            }
            make_writable(path)?;
            remove_entry(path, is_dir)
        }
        other => other,
    }
}

fn remove_entry(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir { fs::remove_dir(path) } else { fs::remove_file(path) }
}

/// Grant the owner write access (and traversal for directories).
#[cfg_attr(not(unix), allow(clippy::permissions_set_readonly_false))]
pub(crate) fn make_writable(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    let mut permissions = metadata.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let extra = if metadata.is_dir() { 0o700 } else { 0o600 };
        permissions.set_mode(permissions.mode() | extra);
    }
    #[cfg(not(unix))]
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
