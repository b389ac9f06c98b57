use std::path::{Path, PathBuf};

use crate::domain::DeployConfig;
use crate::ports::PackageFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: PackageFilesystem> {
    tool_dir: PathBuf,
    config: DeployConfig,
    filesystem: F,
}

impl<F: PackageFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(tool_dir: impl Into<PathBuf>, config: DeployConfig, filesystem: F) -> Self {
        Self { tool_dir: tool_dir.into(), config, filesystem }
    }

    /// Directory holding the package template.
    pub fn tool_dir(&self) -> &Path {
        &self.tool_dir
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
