//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DeployOptions};
use crate::domain::config::paths;
use crate::domain::{AppError, DeployReport, DeployRequest};

#[derive(Parser)]
#[command(name = "pkgdeploy")]
#[command(version)]
#[command(
    about = "Assemble the plugin package from build output and install it into host folders",
    long_about = None
)]
struct Cli {
    /// Target platform (informational)
    platform: String,
    /// Build configuration, e.g. Release
    configuration: String,
    /// Full product version locating the build output, e.g. 4.1.0-beta3200
    full_version: String,
    /// Short install version selecting the install folders, e.g. 4.1
    install_version: String,
    /// Directory containing package-template/ [default: the executable's directory when it
    /// holds package-template/, otherwise the current directory]
    #[arg(long, value_name = "DIR")]
    tool_dir: Option<PathBuf>,
    /// Config file (defaults to <tool-dir>/deploy.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Exit with a failure status when any destination was skipped
    #[arg(long)]
    strict: bool,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    match run_deploy(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; logging then goes there.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_deploy(cli: Cli) -> Result<i32, AppError> {
    let request =
        DeployRequest::new(cli.platform, cli.configuration, cli.full_version, cli.install_version)?;
    let tool_dir = match cli.tool_dir {
        Some(dir) => dir,
        None => {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf));
            default_tool_dir(exe_dir, std::env::current_dir()?)
        }
    };
    let options = DeployOptions { tool_dir, config_path: cli.config };

    let report = api::deploy(&request, &options)?;
    print_report(&report);

    if cli.strict && !report.is_complete() {
        return Ok(1);
    }
    Ok(0)
}

/// The template ships next to the executable; a bare working copy falls back to `cwd`.
fn default_tool_dir(exe_dir: Option<PathBuf>, cwd: PathBuf) -> PathBuf {
    match exe_dir {
        Some(dir) if paths::template_dir(&dir).is_dir() => {
            tracing::debug!(dir = %dir.display(), "Using executable directory as tool directory");
            dir
        }
        _ => cwd,
    }
}

fn print_report(report: &DeployReport) {
    println!("Package version set to: {}", report.package_version);
    println!("✅ Package staged at {}", report.staging_dir.display());

    for installed in &report.installed {
        println!("✅ Package complete ({})  {}", installed.variant, installed.path.display());
    }

    if !report.skipped.is_empty() {
        println!("⚠️  Skipped destinations:");
        for skipped in &report.skipped {
            println!("  - {} at {}: {}", skipped.variant, skipped.path.display(), skipped.reason);
        }
    }
}
