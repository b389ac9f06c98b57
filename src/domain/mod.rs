pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod request;

pub use config::{DeployConfig, InstallTarget};
pub use error::AppError;
pub use report::{DeployReport, InstalledDestination, SkipReason, SkippedDestination};
pub use request::DeployRequest;
