//! Pure parse/validate for deployer configuration (`deploy.toml`).

use crate::domain::AppError;

use super::DeployConfig;

/// Parse and validate deployer configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<DeployConfig, AppError> {
    let config: DeployConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
