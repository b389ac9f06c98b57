use std::path::PathBuf;

use crate::domain::AppError;

/// Resolve the per-user application data root.
///
/// The named environment variable wins; the platform data directory is the fallback.
pub fn resolve_app_data_root(env_var: &str) -> Result<PathBuf, AppError> {
    match std::env::var_os(env_var) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => {
            let fallback = dirs::data_dir()
                .ok_or_else(|| AppError::AppDataUnavailable(env_var.to_string()))?;
            tracing::debug!(
                env_var,
                fallback = %fallback.display(),
                "Application data variable not set, using platform data directory"
            );
            Ok(fallback)
        }
    }
}
