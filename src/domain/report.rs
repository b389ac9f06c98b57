use std::path::PathBuf;

/// A destination the package was installed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledDestination {
    pub variant: String,
    pub path: PathBuf,
}

/// A destination that was left untouched or partially written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDestination {
    pub variant: String,
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The previous installation could not be removed.
    Locked { residue: Vec<PathBuf> },
    /// Copying the staged package failed.
    CopyFailed { details: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Locked { residue } => {
                write!(
                    f,
                    "previous installation could not be removed ({} entries in use)",
                    residue.len()
                )
            }
            SkipReason::CopyFailed { details } => write!(f, "copy failed: {details}"),
        }
    }
}

/// Result of a deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub staging_dir: PathBuf,
    pub package_version: String,
    pub installed: Vec<InstalledDestination>,
    pub skipped: Vec<SkippedDestination>,
}

impl DeployReport {
    /// True when every configured destination received the package.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
