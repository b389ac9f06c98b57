use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for pkgdeploy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invocation parameters are missing or malformed.
    #[error("{0}")]
    Usage(String),

    /// A build input the package is assembled from does not exist.
    #[error("Incomplete build. Missing {what}: {}", path.display())]
    MissingBuildInput { what: String, path: PathBuf },

    /// The staged package has no manifest.
    #[error("Incomplete build. Missing pkg.json in template (expected at {})", .0.display())]
    ManifestMissing(PathBuf),

    /// Manifest still carries placeholder tokens after substitution.
    #[error("Manifest {} still contains placeholder tokens: {}", path.display(), tokens.join(", "))]
    UnresolvedPlaceholders { path: PathBuf, tokens: Vec<String> },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Application data root could not be determined.
    #[error("Application data directory unavailable: set the {0} environment variable")]
    AppDataUnavailable(String),

    /// Destination root template failed to render.
    #[error("Failed to render install root for '{variant}': {details}")]
    PathTemplate { variant: String, details: String },

    /// Copying an entry failed.
    #[error("Failed to copy {} to {}: {error}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn missing_build_input<S: Into<String>>(what: S, path: impl Into<PathBuf>) -> Self {
        AppError::MissingBuildInput { what: what.into(), path: path.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on I/O semantics.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::CopyFailed { error, .. } => error.kind(),
            AppError::Usage(_)
            | AppError::Configuration(_)
            | AppError::PathTemplate { .. }
            | AppError::UnresolvedPlaceholders { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::MissingBuildInput { .. }
            | AppError::ManifestMissing(_)
            | AppError::ConfigMissing(_)
            | AppError::AppDataUnavailable(_) => io::ErrorKind::NotFound,
        }
    }
}
