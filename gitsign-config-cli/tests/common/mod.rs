//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that isolate the binary from the host environment
//! - Config dump fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A config dump covering both recognized and unrelated keys.
#[allow(dead_code)]
pub const SAMPLE_DUMP: &str = "\
core.bare false
user.name Test User
user.email test@example.com
gitsign.rekorMode offline
gitsign.fulcio https://fulcio.example
gitsign.logPath /tmp/my logs/gitsign.log
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with an empty environment.
    ///
    /// No `SIGSTORE_*`/`GITSIGN_*` variables from the host leak in. `PATH`
    /// is cleared too, so tests that need git must pass `--config-file`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitsign-config").expect("Failed to find binary");
        cmd.env_clear();
        cmd
    }

    /// Get a command builder that reads `contents` as its config dump.
    pub fn command_with_config(&self, contents: &str) -> Command {
        let path = self.write_config("config.txt", contents);
        let mut cmd = self.command_bare();
        cmd.arg("--config-file").arg(path);
        cmd
    }

    /// Get a command builder reading [`SAMPLE_DUMP`].
    pub fn command(&self) -> Command {
        self.command_with_config(SAMPLE_DUMP)
    }

    /// Write a config dump file and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config dump");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
