use std::path::{Path, PathBuf};

/// Template folder name inside the tool directory.
pub const TEMPLATE_DIR: &str = "package-template";

/// Staging folder name next to the tool directory.
pub const STAGING_DIR: &str = "dynamo-package";

/// Config file name inside the tool directory.
pub const CONFIG_FILE: &str = "deploy.toml";

/// Package subfolder receiving the build output.
pub const BIN_DIR: &str = "bin";

/// Package subfolder for data-flow definitions.
pub const DYF_DIR: &str = "dyf";

/// Package subfolder for extras.
pub const EXTRA_DIR: &str = "extra";

/// Subfolders every staged package must have.
pub const PACKAGE_SUBDIRS: [&str; 3] = [BIN_DIR, DYF_DIR, EXTRA_DIR];

/// `<tool-dir>/deploy.toml`
pub fn config(tool_dir: &Path) -> PathBuf {
    tool_dir.join(CONFIG_FILE)
}

/// `<tool-dir>/package-template/`
pub fn template_dir(tool_dir: &Path) -> PathBuf {
    tool_dir.join(TEMPLATE_DIR)
}

/// `<tool-dir>/../dynamo-package/`
pub fn staging_dir(tool_dir: &Path) -> PathBuf {
    tool_dir.join("..").join(STAGING_DIR)
}

/// `<tool-dir>/../bin/<configuration>/<full-version>/<package-name>/`
pub fn build_output_dir(
    tool_dir: &Path,
    configuration: &str,
    full_version: &str,
    package_name: &str,
) -> PathBuf {
    tool_dir.join("..").join("bin").join(configuration).join(full_version).join(package_name)
}
