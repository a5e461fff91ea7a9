//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for driving the `projects` binary
//! with scripted menu input against an isolated data directory.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the projects data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("projects-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder with no `PROJECTS_*` variables inherited.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("projects").expect("Failed to find projects binary");
        cmd.env_remove("PROJECTS_DATA_DIR")
            .env_remove("PROJECTS_BUSY_TIMEOUT")
            .env_remove("PROJECTS_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run the menu with `script` on stdin and return stdout.
    ///
    /// # Panics
    /// Panics if the binary exits unsuccessfully.
    pub fn run_menu(&self, script: &str) -> String {
        let output = self
            .command()
            .write_stdin(script)
            .output()
            .expect("Failed to run projects");

        assert!(
            output.status.success(),
            "Menu session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("projects.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Count rows in `table` directly.
    pub fn count_rows(&self, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(self.database_path()).expect("Failed to open db");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("Failed to count rows")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
