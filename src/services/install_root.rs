//! Rendering of install root templates with minijinja.

use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, DeployRequest, InstallTarget};

/// Values available to install root templates.
#[derive(Debug, Clone)]
pub struct InstallRootContext<'a> {
    pub app_data: &'a Path,
    pub package_name: &'a str,
    pub request: &'a DeployRequest,
}

/// Render the install root of `target`.
pub fn render_install_root(
    target: &InstallTarget,
    ctx: &InstallRootContext<'_>,
) -> Result<PathBuf, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let template_error = |e: minijinja::Error| AppError::PathTemplate {
        variant: target.variant.clone(),
        details: e.to_string(),
    };

    env.add_template("root", &target.root).map_err(template_error)?;
    let template = env.get_template("root").map_err(template_error)?;

    let rendered = template
        .render(context! {
            app_data => ctx.app_data.to_string_lossy(),
            variant => &target.variant,
            package_name => ctx.package_name,
            platform => &ctx.request.platform,
            configuration => &ctx.request.configuration,
            full_version => &ctx.request.full_version,
            install_version => &ctx.request.install_version,
        })
        .map_err(template_error)?;

    let rendered = rendered.trim();
    if rendered.is_empty() {
        return Err(AppError::PathTemplate {
            variant: target.variant.clone(),
            details: "template rendered to an empty path".into(),
        });
    }

    let path = PathBuf::from(rendered);
    if !path.is_absolute() {
        return Err(AppError::PathTemplate {
            variant: target.variant.clone(),
            details: format!("install root must be absolute, got '{}'", rendered),
        });
    }

    Ok(path)
}
