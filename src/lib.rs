//! pkgdeploy: assemble a plugin package from build output and install it into host package folders.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{DeployOptions, deploy};
pub use domain::{
    AppError, DeployConfig, DeployReport, DeployRequest, InstallTarget, InstalledDestination,
    SkipReason, SkippedDestination,
};
pub use ports::{PackageFilesystem, RemovalReport};
pub use services::force_remove_dir_all;
