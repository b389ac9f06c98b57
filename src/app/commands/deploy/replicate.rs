//! Installation of the staged package into each destination.

use std::path::Path;

use crate::domain::{InstalledDestination, SkipReason, SkippedDestination};
use crate::ports::PackageFilesystem;

use super::preflight::Destination;

/// Replace every destination with a copy of the staged package.
///
/// A destination that cannot be cleared or written is skipped; the remaining
/// destinations are still processed.
pub fn replicate<F: PackageFilesystem>(
    fs: &F,
    staging_dir: &Path,
    destinations: &[Destination],
) -> (Vec<InstalledDestination>, Vec<SkippedDestination>) {
    let mut installed = Vec::new();
    let mut skipped = Vec::new();

    for destination in destinations {
        match install_one(fs, staging_dir, destination) {
            Ok(()) => {
                tracing::info!(
                    variant = %destination.variant,
                    path = %destination.path.display(),
                    "Package installed"
                );
                installed.push(InstalledDestination {
                    variant: destination.variant.clone(),
                    path: destination.path.clone(),
                });
            }
            Err(reason) => {
                tracing::warn!(
                    variant = %destination.variant,
                    path = %destination.path.display(),
                    %reason,
                    "Skipping destination"
                );
                skipped.push(SkippedDestination {
                    variant: destination.variant.clone(),
                    path: destination.path.clone(),
                    reason,
                });
            }
        }
    }

    (installed, skipped)
}

fn install_one<F: PackageFilesystem>(
    fs: &F,
    staging_dir: &Path,
    destination: &Destination,
) -> Result<(), SkipReason> {
    let removal = fs.force_remove_dir_all(&destination.path);
    if !removal.is_clear() {
        tracing::warn!(
            path = %destination.path.display(),
            failures = %removal.describe_failures(),
            "Previous installation is in use"
        );
        return Err(SkipReason::Locked { residue: removal.residue() });
    }

    fs.copy_tree(staging_dir, &destination.path)
        .map(|_| ())
        .map_err(|err| SkipReason::CopyFailed { details: err.to_string() })
}
