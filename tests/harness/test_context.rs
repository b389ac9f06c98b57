//! Shared testing harness for `pkgdeploy` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const CONFIGURATION: &str = "Release";
pub(crate) const FULL_VERSION: &str = "4.1.0-beta3200";
pub(crate) const INSTALL_VERSION: &str = "4.1";

pub(crate) const MANIFEST_TEMPLATE: &str = r#"{
  "name": "DataExchangeNodes",
  "version": "$Version$",
  "engine_version": "$DynamoVersion$",
  "engine": "dynamo",
  "node_libraries": ["DataExchangeNodes, Version=$Version$"]
}
"#;

/// Testing harness providing an isolated repository layout and app-data root.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment with an empty tool directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("repo/extras").create_dir_all().expect("Failed to create tool directory");
        root.child("appdata").create_dir_all().expect("Failed to create app-data directory");
        Self { root }
    }

    /// Create an environment with a template and a built binary set.
    pub(crate) fn with_build() -> Self {
        let ctx = Self::new();
        ctx.write_template();
        ctx.write_binary("DataExchangeNodes.dll", "nodes-v1");
        ctx.write_binary("DataExchangeNodes.xml", "docs");
        ctx
    }

    pub(crate) fn root(&self) -> &TempDir {
        &self.root
    }

    /// Directory holding `package-template/`.
    pub(crate) fn tool_dir(&self) -> PathBuf {
        self.root.path().join("repo/extras")
    }

    pub(crate) fn app_data(&self) -> PathBuf {
        self.root.path().join("appdata")
    }

    pub(crate) fn template_dir(&self) -> PathBuf {
        self.tool_dir().join("package-template")
    }

    pub(crate) fn staging_dir(&self) -> PathBuf {
        self.root.path().join("repo/dynamo-package")
    }

    pub(crate) fn source_dir(&self) -> PathBuf {
        self.root
            .path()
            .join("repo/bin")
            .join(CONFIGURATION)
            .join(FULL_VERSION)
            .join("DataExchangeNodes/win-x64")
    }

    pub(crate) fn destination(&self, variant: &str) -> PathBuf {
        self.app_data()
            .join("Dynamo")
            .join(variant)
            .join(INSTALL_VERSION)
            .join("packages/DataExchangeNodes")
    }

    /// Write the package template with a manifest and a sample definition.
    pub(crate) fn write_template(&self) {
        let template = self.template_dir();
        fs::create_dir_all(template.join("dyf")).unwrap();
        fs::write(template.join("pkg.json"), MANIFEST_TEMPLATE).unwrap();
        fs::write(template.join("dyf/Sample.dyf"), "<Workspace />").unwrap();
    }

    /// Write a file into the build output, relative to the runtime folder.
    pub(crate) fn write_binary(&self, rel: &str, content: &str) {
        write_file(&self.source_dir().join(rel), content);
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.tool_dir().join("deploy.toml"), content).unwrap();
    }

    /// Build a command for invoking the compiled `pkgdeploy` binary from the tool directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgdeploy").expect("Failed to locate pkgdeploy binary");
        cmd.current_dir(self.tool_dir()).env("APPDATA", self.app_data()).env_remove("RUST_LOG");
        cmd
    }

    /// Command with the standard four parameters.
    pub(crate) fn deploy_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args(["x64", CONFIGURATION, FULL_VERSION, INSTALL_VERSION]);
        cmd
    }

    pub(crate) fn read(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Sorted relative paths of every file below `dir`.
    pub(crate) fn file_set(&self, dir: &Path) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(dir, dir, &mut files);
        files.sort();
        files
    }
}

pub(crate) fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn collect_files(base: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(base, &path, out);
        } else {
            out.push(path.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/"));
        }
    }
}
