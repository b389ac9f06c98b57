pub mod parse;
pub mod paths;

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::domain::AppError;

pub use parse::parse_config_content;

/// Package version written into the manifest unless configured otherwise.
pub const DEFAULT_PACKAGE_VERSION: &str = "0.1.0";

/// Package folder name under the build output and under each install root.
pub const DEFAULT_PACKAGE_NAME: &str = "DataExchangeNodes";

/// Runtime subfolder of the build output.
pub const DEFAULT_RUNTIME_IDENTIFIER: &str = "win-x64";

/// Environment variable holding the per-user application data root.
pub const DEFAULT_APP_DATA_ENV: &str = "APPDATA";

/// Install root template shared by the built-in targets.
pub const DEFAULT_ROOT_TEMPLATE: &str =
    "{{ app_data }}/Dynamo/{{ variant }}/{{ install_version }}/packages/{{ package_name }}";

/// Deployer configuration, loaded from `deploy.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default = "default_package_version")]
    pub package_version: String,
    /// Empty string disables the runtime subfolder.
    #[serde(default = "default_runtime_identifier")]
    pub runtime_identifier: String,
    #[serde(default = "default_app_data_env")]
    pub app_data_env: String,
    #[serde(default = "InstallTarget::builtin")]
    pub destinations: Vec<InstallTarget>,
}

/// A host-application variant the package is installed into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallTarget {
    /// Product variant name, e.g. `Dynamo Core`.
    pub variant: String,
    /// Root path template rendered per run.
    #[serde(default = "default_root_template")]
    pub root: String,
}

impl InstallTarget {
    pub fn new(variant: impl Into<String>, root: impl Into<String>) -> Self {
        Self { variant: variant.into(), root: root.into() }
    }

    /// The Core and Revit targets.
    pub fn builtin() -> Vec<Self> {
        ["Dynamo Core", "Dynamo Revit"]
            .into_iter()
            .map(|variant| Self::new(variant, DEFAULT_ROOT_TEMPLATE))
            .collect()
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            package_version: default_package_version(),
            runtime_identifier: default_runtime_identifier(),
            app_data_env: default_app_data_env(),
            destinations: InstallTarget::builtin(),
        }
    }
}

impl DeployConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.package_name.trim().is_empty() {
            return Err(AppError::config_error("package_name must not be empty"));
        }
        if self.package_name.contains(['/', '\\']) || self.package_name.starts_with('.') {
            return Err(AppError::config_error(format!(
                "package_name '{}' must be a plain folder name",
                self.package_name
            )));
        }
        if self.package_version.trim().is_empty() {
            return Err(AppError::config_error("package_version must not be empty"));
        }
        if self.runtime_identifier.contains(['/', '\\']) {
            return Err(AppError::config_error(format!(
                "runtime_identifier '{}' must be a plain folder name",
                self.runtime_identifier
            )));
        }
        if self.app_data_env.trim().is_empty() {
            return Err(AppError::config_error("app_data_env must not be empty"));
        }
        if self.destinations.is_empty() {
            return Err(AppError::config_error("At least one destination must be configured"));
        }

        let mut seen = BTreeSet::new();
        for target in &self.destinations {
            if target.variant.trim().is_empty() {
                return Err(AppError::config_error("Destination variant must not be empty"));
            }
            if target.root.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "Destination '{}' has an empty root template",
                    target.variant
                )));
            }
            if !seen.insert(target.variant.as_str()) {
                return Err(AppError::config_error(format!(
                    "Duplicate destination variant '{}'",
                    target.variant
                )));
            }
        }

        Ok(())
    }

    /// Runtime subfolder name, if enabled.
    pub fn runtime_identifier(&self) -> Option<&str> {
        let trimmed = self.runtime_identifier.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

fn default_package_version() -> String {
    DEFAULT_PACKAGE_VERSION.to_string()
}

fn default_runtime_identifier() -> String {
    DEFAULT_RUNTIME_IDENTIFIER.to_string()
}

fn default_app_data_env() -> String {
    DEFAULT_APP_DATA_ENV.to_string()
}

fn default_root_template() -> String {
    DEFAULT_ROOT_TEMPLATE.to_string()
}
