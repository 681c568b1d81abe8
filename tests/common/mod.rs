//! Shared testing utilities for pybuild-ci CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Issue body produced by the build-request form with every field filled in.
#[allow(dead_code)]
pub const FILLED_ISSUE: &str = "### Python版本\n3.9.0\n### 目标平台\nwindows-latest,macos-latest\nSee https://github.com/org/repo/files/123/build.zip for details";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    ///
    /// `GITHUB_OUTPUT` and the log filter are cleared so runs do not leak into
    /// the host workflow.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pybuild-ci").expect("Failed to locate pybuild-ci binary");
        cmd.current_dir(&self.work_dir).env_remove("GITHUB_OUTPUT").env_remove("PYBUILD_CI_LOG");
        cmd
    }

    /// Write `content` to a file relative to the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a tool config file outside the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("pybuild-ci.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Create an executable shell script that records its arguments and exits with `code`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.root.path().join(format!("{name}.args"));
        let script = self.root.path().join(name);
        fs::write(&script, format!("#!/bin/sh\necho \"$@\" > '{}'\nexit {code}\n", log.display()))
            .expect("Failed to write fake tool");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
        script
    }

    /// Arguments recorded by a fake tool, if it ran.
    pub fn recorded_args(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.root.path().join(format!("{name}.args")))
            .ok()
            .map(|args| args.trim_end().to_string())
    }
}
