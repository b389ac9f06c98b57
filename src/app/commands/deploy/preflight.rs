//! Precondition checks and path resolution. Nothing here mutates the filesystem.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, DeployRequest};
use crate::ports::PackageFilesystem;
use crate::services::install_root::{InstallRootContext, render_install_root};

/// A resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub variant: String,
    pub path: PathBuf,
}

/// Every path a deploy run touches, resolved up front.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub template_dir: PathBuf,
    pub source_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub destinations: Vec<Destination>,
}

pub fn plan<F: PackageFilesystem>(
    ctx: &AppContext<F>,
    request: &DeployRequest,
    app_data: &Path,
) -> Result<DeployPlan, AppError> {
    let source_dir = resolve_source_dir(ctx, request)?;

    let template_dir = paths::template_dir(ctx.tool_dir());
    if !ctx.filesystem().is_dir(&template_dir) {
        return Err(AppError::missing_build_input("package template", template_dir));
    }

    let root_ctx = InstallRootContext {
        app_data,
        package_name: &ctx.config().package_name,
        request,
    };
    let destinations = ctx
        .config()
        .destinations
        .iter()
        .map(|target| {
            Ok(Destination {
                variant: target.variant.clone(),
                path: render_install_root(target, &root_ctx)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(DeployPlan {
        template_dir,
        source_dir,
        staging_dir: paths::staging_dir(ctx.tool_dir()),
        destinations,
    })
}

/// Locate the build output, preferring the runtime subfolder.
fn resolve_source_dir<F: PackageFilesystem>(
    ctx: &AppContext<F>,
    request: &DeployRequest,
) -> Result<PathBuf, AppError> {
    let package_dir = paths::build_output_dir(
        ctx.tool_dir(),
        &request.configuration,
        &request.full_version,
        &ctx.config().package_name,
    );
    let fs = ctx.filesystem();

    let Some(runtime) = ctx.config().runtime_identifier() else {
        return if fs.is_dir(&package_dir) {
            Ok(package_dir)
        } else {
            Err(AppError::missing_build_input("source binaries", package_dir))
        };
    };

    let runtime_dir = package_dir.join(runtime);
    if fs.is_dir(&runtime_dir) {
        return Ok(runtime_dir);
    }
    if fs.is_dir(&package_dir) {
        tracing::info!(
            expected = %runtime_dir.display(),
            using = %package_dir.display(),
            "Runtime subfolder not found, using package build output"
        );
        return Ok(package_dir);
    }

    Err(AppError::missing_build_input("source binaries", runtime_dir))
}
