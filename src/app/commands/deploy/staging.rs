//! Assembly of the staging package directory.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::paths::{BIN_DIR, PACKAGE_SUBDIRS};
use crate::domain::manifest::{self, MANIFEST_FILE};
use crate::ports::PackageFilesystem;

/// Remove a previous staging directory. Leftovers are logged, not fatal.
pub fn reset<F: PackageFilesystem>(fs: &F, staging_dir: &Path) {
    let report = fs.force_remove_dir_all(staging_dir);
    if !report.is_clear() {
        tracing::warn!(
            path = %staging_dir.display(),
            failures = %report.describe_failures(),
            "Could not fully remove previous staging directory, continuing"
        );
    }
}

/// Copy the template into the staging directory and create the package subfolders.
pub fn materialize<F: PackageFilesystem>(
    fs: &F,
    template_dir: &Path,
    staging_dir: &Path,
) -> Result<(), AppError> {
    let copied = fs.copy_tree(template_dir, staging_dir)?;
    tracing::debug!(files = copied, "Copied package template");

    for subdir in PACKAGE_SUBDIRS {
        fs.create_dir_all(&staging_dir.join(subdir))?;
    }
    Ok(())
}

/// Rewrite the staged manifest with concrete versions.
///
/// Returns the manifest path.
pub fn apply_versions<F: PackageFilesystem>(
    fs: &F,
    staging_dir: &Path,
    package_version: &str,
    install_version: &str,
) -> Result<PathBuf, AppError> {
    let manifest_path = staging_dir.join(MANIFEST_FILE);
    if !fs.exists(&manifest_path) {
        return Err(AppError::ManifestMissing(manifest_path));
    }

    let content = fs.read_to_string(&manifest_path)?;
    let processed = manifest::substitute_placeholders(&content, package_version, install_version);

    let remaining = manifest::remaining_placeholders(&processed);
    if !remaining.is_empty() {
        return Err(AppError::UnresolvedPlaceholders { path: manifest_path, tokens: remaining });
    }

    fs.write(&manifest_path, &processed)?;
    Ok(manifest_path)
}

/// Copy every entry of the build output into the staged `bin/` folder.
///
/// Each entry replaces whatever same-named file or directory is already
/// staged; directories are never merged. Entries that cannot be cleared are
/// logged and copied over.
/// Returns the number of entries copied.
pub fn populate_binaries<F: PackageFilesystem>(
    fs: &F,
    source_dir: &Path,
    staging_dir: &Path,
) -> Result<usize, AppError> {
    let bin_dir = staging_dir.join(BIN_DIR);
    let entries = fs.list_dir(source_dir)?;

    for entry in &entries {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let target = bin_dir.join(name);

        if fs.is_dir(entry) {
            clear_target(fs, &target, true);
            let files = fs.copy_tree(entry, &target)?;
            tracing::debug!(dir = %entry.display(), files, "Copied build output directory");
        } else {
            clear_target(fs, &target, false);
            fs.copy_file(entry, &target)?;
            tracing::debug!(file = %entry.display(), "Copied build output file");
        }
    }

    Ok(entries.len())
}

/// Remove a staged entry that the incoming one cannot simply overwrite.
///
/// A file is only overwritten in place by a file, so only a directory is
/// cleared for it.
fn clear_target<F: PackageFilesystem>(fs: &F, target: &Path, incoming_is_dir: bool) {
    if !fs.exists(target) {
        return;
    }

    if !fs.is_dir(target) {
        if incoming_is_dir && let Err(err) = fs.remove_file(target) {
            tracing::warn!(
                path = %target.display(),
                error = %err,
                "Could not remove staged file shadowing a build directory"
            );
        }
        return;
    }

    let report = fs.force_remove_dir_all(target);
    if !report.is_clear() {
        tracing::warn!(
            path = %target.display(),
            failures = %report.describe_failures(),
            "Could not fully clear staged entry, copying over leftovers"
        );
    }
}
