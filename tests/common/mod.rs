//! Shared testing utilities for wikisync CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runner variables that must not leak from the test host into the CLI under test.
const RUNNER_VARS: &[&str] = &[
    "INPUT_TOKEN",
    "INPUT_SYNC-FOLDER",
    "INPUT_CONFLICT-STRATEGY",
    "INPUT_SYNC-DELETES",
    "GITHUB_REPOSITORY",
    "GITHUB_EVENT_PATH",
    "GITHUB_ACTIONS",
    "GITHUB_OUTPUT",
    "RUST_LOG",
];

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

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `wikisync` binary with a clean runner environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wikisync").expect("Failed to locate wikisync binary");
        cmd.current_dir(&self.work_dir);
        for var in RUNNER_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command with a token and repository already supplied, as the runner would.
    pub fn runner_cli(&self, token: &str, repository: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("INPUT_TOKEN", token).env("GITHUB_REPOSITORY", repository);
        cmd
    }

    /// Write a TOML inputs file and return its path.
    pub fn write_inputs(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("inputs.toml");
        fs::write(&path, content).expect("Failed to write inputs file");
        path
    }

    /// Write an event payload and return its path.
    pub fn write_event(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("event.json");
        fs::write(&path, content).expect("Failed to write event payload");
        path
    }

    /// Path for a step output file; created empty.
    pub fn output_file(&self) -> PathBuf {
        let path = self.root.path().join("github_output");
        fs::write(&path, "").expect("Failed to create output file");
        path
    }

    /// Turn the work directory into a git repository with an `origin` remote.
    pub fn init_git_with_origin(&self, url: &str) {
        let repo = git2::Repository::init(&self.work_dir).expect("Failed to init git repository");
        repo.remote("origin", url).expect("Failed to add origin remote");
    }
}
