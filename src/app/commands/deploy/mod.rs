//! Package deployment: stage the package, then install it into every destination.

mod preflight;
mod replicate;
mod staging;

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, DeployReport, DeployRequest};
use crate::ports::PackageFilesystem;

pub use preflight::{DeployPlan, Destination};

/// Run a full deployment.
///
/// Precondition failures return an error before anything is modified.
/// Destination failures are reported in the returned `DeployReport`.
pub fn execute<F: PackageFilesystem>(
    ctx: &AppContext<F>,
    request: &DeployRequest,
    app_data: &Path,
) -> Result<DeployReport, AppError> {
    tracing::info!(
        platform = %request.platform,
        configuration = %request.configuration,
        full_version = %request.full_version,
        install_version = %request.install_version,
        "Package creation started"
    );

    let plan = preflight::plan(ctx, request, app_data)?;
    let fs = ctx.filesystem();
    let config = ctx.config();

    staging::reset(fs, &plan.staging_dir);
    staging::materialize(fs, &plan.template_dir, &plan.staging_dir)?;
    staging::apply_versions(
        fs,
        &plan.staging_dir,
        &config.package_version,
        &request.install_version,
    )?;
    tracing::info!(version = %config.package_version, "Package version set");

    let entries = staging::populate_binaries(fs, &plan.source_dir, &plan.staging_dir)?;
    tracing::info!(entries, source = %plan.source_dir.display(), "Binaries staged");

    let (installed, skipped) = replicate::replicate(fs, &plan.staging_dir, &plan.destinations);

    Ok(DeployReport {
        staging_dir: plan.staging_dir,
        package_version: config.package_version.clone(),
        installed,
        skipped,
    })
}
