use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Outcome of a best-effort recursive removal.
#[derive(Debug)]
pub enum RemovalReport {
    /// Nothing existed at the path.
    Absent,
    /// The whole tree is gone.
    Removed,
    /// Some entries survived; each with the error of its final attempt.
    Incomplete { failures: Vec<(PathBuf, io::Error)> },
}

impl RemovalReport {
    /// True when nothing is left at the path.
    pub fn is_clear(&self) -> bool {
        matches!(self, RemovalReport::Absent | RemovalReport::Removed)
    }

    /// Paths that could not be removed.
    pub fn residue(&self) -> Vec<PathBuf> {
        match self {
            RemovalReport::Incomplete { failures } => {
                failures.iter().map(|(path, _)| path.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// One-line summary of the failures, for diagnostics.
    pub fn describe_failures(&self) -> String {
        match self {
            RemovalReport::Incomplete { failures } => failures
                .iter()
                .map(|(path, err)| format!("{}: {}", path.display(), err))
                .collect::<Vec<_>>()
                .join("; "),
            _ => String::new(),
        }
    }
}

/// Filesystem operations the deployer performs.
pub trait PackageFilesystem {
    /// Check whether a path exists (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// List the entries directly inside a directory, sorted by name.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Overwrite a file with new content.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy a single file, preserving its timestamps.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Recursively copy a directory tree into `to`, creating it if needed.
    ///
    /// Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> Result<usize, AppError>;

    /// Remove a directory tree, repairing permissions and retrying where needed.
    ///
    /// Never fails; leftovers are described in the report.
    fn force_remove_dir_all(&self, path: &Path) -> RemovalReport;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
