#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary todo file
pub struct CliTestHarness {
    temp_dir: TempDir,
    store_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with an empty temporary directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("todos.json");

        Self {
            temp_dir,
            store_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("getitdone").expect("Failed to find getitdone binary");

        // Keep the run away from any getitdone.toml in the real working directory
        cmd.current_dir(self.temp_dir.path());
        cmd.env("GETITDONE_STORE_PATH", &self.store_path);
        cmd.env("GETITDONE_LOG_DIR", self.log_dir());
        cmd.env_remove("GETITDONE_DEFAULT_VIEW");
        cmd.env_remove("GETITDONE_LOG_LEVEL");

        cmd
    }

    /// Get the todo file path for this test instance
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn log_dir(&self) -> PathBuf {
        self.temp_dir.path().join("logs")
    }

    /// Parse the todo file as raw JSON
    pub fn stored_json(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(&self.store_path).expect("Failed to read todo file");
        serde_json::from_str(&content).expect("Todo file is not valid JSON")
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// A todo far enough ahead to never be inside the week window
    pub fn far_future_todo_args() -> Vec<&'static str> {
        vec!["add", "renew", "passport", "--due", "2099-01-15"]
    }

    pub fn asap_todo_args() -> Vec<&'static str> {
        vec!["add", "fix", "the", "sink", "asap"]
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the todo table headers
    pub fn has_todo_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Status"))
            .and(predicate::str::contains("Todo"))
            .and(predicate::str::contains("Logged"))
    }

    pub fn todo_added_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Added todo"))
    }

    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No todos yet")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}
