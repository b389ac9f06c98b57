use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::app::AppContext;
use crate::domain::DeployConfig;
use crate::domain::config::{DEFAULT_PACKAGE_NAME, DEFAULT_RUNTIME_IDENTIFIER, paths};
use crate::ports::PackageFilesystem;

/// Throw-away tool directory, build output and app-data root.
pub struct PackageFixture {
    _root: TempDir,
    tool_dir: PathBuf,
    app_data: PathBuf,
}

impl PackageFixture {
    pub const MANIFEST: &'static str = r#"{
  "license": "",
  "file_hash": null,
  "name": "DataExchangeNodes",
  "version": "$Version$",
  "description": "Data exchange nodes",
  "group": "",
  "keywords": null,
  "dependencies": [],
  "contents": "",
  "engine_version": "$DynamoVersion$",
  "engine": "dynamo",
  "engine_metadata": ""
}
"#;

    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        let tool_dir = root.path().join("repo").join("extras");
        let app_data = root.path().join("appdata");
        fs::create_dir_all(&tool_dir).unwrap();
        fs::create_dir_all(&app_data).unwrap();
        Self { _root: root, tool_dir, app_data }
    }

    pub fn tool_dir(&self) -> &Path {
        &self.tool_dir
    }

    pub fn app_data(&self) -> &Path {
        &self.app_data
    }

    pub fn template_dir(&self) -> PathBuf {
        paths::template_dir(&self.tool_dir)
    }

    pub fn staging_dir(&self) -> PathBuf {
        paths::staging_dir(&self.tool_dir)
    }

    pub fn source_dir(&self, configuration: &str, full_version: &str) -> PathBuf {
        paths::build_output_dir(&self.tool_dir, configuration, full_version, DEFAULT_PACKAGE_NAME)
            .join(DEFAULT_RUNTIME_IDENTIFIER)
    }

    pub fn destination(&self, variant: &str, install_version: &str) -> PathBuf {
        self.app_data
            .join("Dynamo")
            .join(variant)
            .join(install_version)
            .join("packages")
            .join(DEFAULT_PACKAGE_NAME)
    }

    pub fn write_template_manifest(&self, content: &str) {
        let template = self.template_dir();
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("pkg.json"), content).unwrap();
    }

    pub fn write_binary(&self, configuration: &str, full_version: &str, rel: &str, content: &str) {
        let path = self.source_dir(configuration, full_version).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn context<F: PackageFilesystem>(&self, filesystem: F) -> AppContext<F> {
        AppContext::new(self.tool_dir.clone(), DeployConfig::default(), filesystem)
    }
}
