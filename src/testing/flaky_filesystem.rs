use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PackageFilesystem, RemovalReport};
use crate::services::LocalFilesystem;

/// Local filesystem that can simulate entries held open by another process.
///
/// Removing a tree that contains a locked path leaves the tree untouched and
/// reports the locked paths. Copies into a path registered with
/// `fail_copies_into` fail with `PermissionDenied`.
#[derive(Default)]
pub struct FlakyFilesystem {
    inner: LocalFilesystem,
    locked: Mutex<Vec<PathBuf>>,
    copy_failures: Mutex<Vec<PathBuf>>,
    pub removals: Mutex<Vec<PathBuf>>,
}

impl FlakyFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self, path: &Path) {
        self.locked.lock().unwrap().push(path.to_path_buf());
    }

    pub fn fail_copies_into(&self, path: &Path) {
        self.copy_failures.lock().unwrap().push(path.to_path_buf());
    }

    fn copy_blocked(&self, to: &Path) -> bool {
        self.copy_failures.lock().unwrap().iter().any(|blocked| to.starts_with(blocked))
    }
}

impl PackageFilesystem for FlakyFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.inner.create_dir_all(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        self.inner.list_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.inner.write(path, content)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if self.copy_blocked(to) {
            return Err(AppError::CopyFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                error: io::Error::new(io::ErrorKind::PermissionDenied, "destination is locked"),
            });
        }
        self.inner.copy_file(from, to)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<usize, AppError> {
        if self.copy_blocked(to) {
            return Err(AppError::CopyFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                error: io::Error::new(io::ErrorKind::PermissionDenied, "destination is locked"),
            });
        }
        self.inner.copy_tree(from, to)
    }

    fn force_remove_dir_all(&self, path: &Path) -> RemovalReport {
        self.removals.lock().unwrap().push(path.to_path_buf());

        let held: Vec<PathBuf> = self
            .locked
            .lock()
            .unwrap()
            .iter()
            .filter(|locked| locked.starts_with(path) && locked.exists())
            .cloned()
            .collect();

        if held.is_empty() {
            return self.inner.force_remove_dir_all(path);
        }

        RemovalReport::Incomplete {
            failures: held
                .into_iter()
                .map(|locked| {
                    (locked, io::Error::new(io::ErrorKind::PermissionDenied, "file is in use"))
                })
                .collect(),
        }
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.inner.remove_file(path)
    }
}
