//! Shared testing harness for `chn-quickstart` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated deployment root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("deploy");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Deployment root used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a CLI command running inside the deployment root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("chn-quickstart").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env("NO_COLOR", "1").env_remove("CHN_QUICKSTART_LOG");
        cmd
    }

    /// Run `guide` with `answers` piped to stdin, one per line.
    pub(crate) fn guide(&self, answers: &[&str]) -> assert_cmd::assert::Assert {
        let mut input = answers.join("\n");
        input.push('\n');
        self.cli().arg("guide").write_stdin(input).assert()
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    /// Write a file, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Parse the composed manifest and return its service names.
    pub(crate) fn manifest_services(&self, relative: &str) -> Vec<String> {
        let manifest: serde_yaml::Value =
            serde_yaml::from_str(&self.read(relative)).expect("manifest should be valid YAML");
        manifest["services"]
            .as_mapping()
            .expect("manifest should have a services mapping")
            .keys()
            .filter_map(|key| key.as_str().map(str::to_string))
            .collect()
    }
}
