//! API Facade for the application.
//!
//! Glues together configuration loading, context creation and command execution.

use std::path::PathBuf;

use crate::app::{AppContext, commands::deploy as deploy_command, config::load_config};
use crate::domain::{AppError, DeployReport, DeployRequest};
use crate::services::LocalFilesystem;
use crate::services::app_data::resolve_app_data_root;

/// Where to find the template and configuration.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory holding `package-template/`.
    pub tool_dir: PathBuf,
    /// Explicit config file; `<tool-dir>/deploy.toml` is used when absent.
    pub config_path: Option<PathBuf>,
}

impl DeployOptions {
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self { tool_dir: tool_dir.into(), config_path: None }
    }
}

/// Stage the package and install it into every configured destination.
pub fn deploy(request: &DeployRequest, options: &DeployOptions) -> Result<DeployReport, AppError> {
    let filesystem = LocalFilesystem::new();
    let config = load_config(&options.tool_dir, options.config_path.as_deref(), &filesystem)?;
    let app_data = resolve_app_data_root(&config.app_data_env)?;

    let ctx = AppContext::new(options.tool_dir.clone(), config, filesystem);
    deploy_command::execute(&ctx, request, &app_data)
}
