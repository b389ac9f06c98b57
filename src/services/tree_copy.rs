use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;
use walkdir::WalkDir;

use crate::domain::AppError;

/// Copy a file and carry over its access and modification times.
pub fn copy_file_preserving_times(from: &Path, to: &Path) -> Result<(), AppError> {
    let copy = || -> io::Result<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        let metadata = fs::metadata(from)?;
        filetime::set_file_times(
            to,
            FileTime::from_last_access_time(&metadata),
            FileTime::from_last_modification_time(&metadata),
        )
    };

    copy().map_err(|error| AppError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error,
    })
}

/// Recursively copy a directory tree, following symlinks.
///
/// Existing files at the destination are overwritten; nothing is removed.
/// Returns the number of files copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<usize, AppError> {
    let wrap = |error: io::Error| AppError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error,
    };

    fs::create_dir_all(to).map_err(wrap)?;

    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(|e| wrap(e.into()))?;

        let rel_path = entry.path().strip_prefix(from).map_err(|_| {
            AppError::Io(io::Error::other(format!(
                "Failed to strip source prefix {} from {}",
                from.display(),
                entry.path().display()
            )))
        })?;
        let target = to.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|error| AppError::CopyFailed {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                error,
            })?;
        } else {
            copy_file_preserving_times(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
