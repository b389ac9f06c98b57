//! Invocation parameters for a deploy run.

use crate::domain::AppError;

/// Number of positional parameters a deploy run takes.
pub const PARAMETER_COUNT: usize = 4;

/// Positional parameters of a deploy run, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Target platform. Informational only.
    pub platform: String,
    /// Build configuration name (e.g. `Release`).
    pub configuration: String,
    /// Full product version locating the build output (e.g. `4.1.0-beta3200`).
    pub full_version: String,
    /// Short version selecting install directories (e.g. `4.1`).
    pub install_version: String,
}

impl DeployRequest {
    pub fn new(
        platform: impl Into<String>,
        configuration: impl Into<String>,
        full_version: impl Into<String>,
        install_version: impl Into<String>,
    ) -> Result<Self, AppError> {
        let request = Self {
            platform: platform.into(),
            configuration: configuration.into(),
            full_version: full_version.into(),
            install_version: install_version.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Build a request from a positional parameter list.
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Result<Self, AppError> {
        match params {
            [platform, configuration, full_version, install_version] => Self::new(
                platform.as_ref(),
                configuration.as_ref(),
                full_version.as_ref(),
                install_version.as_ref(),
            ),
            _ => Err(AppError::Usage(format!(
                "Missing package config params: expected {} \
                 (platform, configuration, full version, install version), got {}",
                PARAMETER_COUNT,
                params.len()
            ))),
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("platform", &self.platform),
            ("configuration", &self.configuration),
            ("full version", &self.full_version),
            ("install version", &self.install_version),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Usage(format!("Parameter '{}' must not be empty", name)));
            }
        }

        // Each of these becomes a single path component.
        for (name, value) in [
            ("configuration", &self.configuration),
            ("full version", &self.full_version),
            ("install version", &self.install_version),
        ] {
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(AppError::Usage(format!(
                    "Parameter '{}' must be a single path component, got '{}'",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
