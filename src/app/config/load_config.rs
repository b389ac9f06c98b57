//! Deployer configuration loading from the tool directory.

use std::path::Path;

use crate::domain::AppError;
use crate::domain::config::{self, DeployConfig};
use crate::ports::PackageFilesystem;

/// Load the deployer configuration.
///
/// An explicit path must exist. Without one, `<tool-dir>/deploy.toml` is used
/// when present and built-in defaults otherwise.
pub fn load_config<F: PackageFilesystem>(
    tool_dir: &Path,
    explicit: Option<&Path>,
    filesystem: &F,
) -> Result<DeployConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !filesystem.exists(path) {
                return Err(AppError::ConfigMissing(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let default_path = config::paths::config(tool_dir);
            if !filesystem.exists(&default_path) {
                tracing::debug!(path = %default_path.display(), "No config file, using defaults");
                return Ok(DeployConfig::default());
            }
            default_path
        }
    };

    tracing::debug!(path = %path.display(), "Loading config");
    let content = filesystem.read_to_string(&path)?;
    config::parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(e) => {
            AppError::Configuration(format!("Invalid config {}: {}", path.display(), e))
        }
        other => other,
    })
}
