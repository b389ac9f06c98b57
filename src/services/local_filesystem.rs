use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{PackageFilesystem, RemovalReport};

use super::force_remove;
use super::tree_copy;

/// `PackageFilesystem` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl PackageFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        entries.sort();
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        tree_copy::copy_file_preserving_times(from, to)
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<usize, AppError> {
        tree_copy::copy_tree(from, to)
    }

    fn force_remove_dir_all(&self, path: &Path) -> RemovalReport {
        force_remove::force_remove_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path)?;
        Ok(())
    }
}
