//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base configuration used across tests.
#[allow(dead_code)]
pub const AUDI_YAML: &str =
    "id: 123\nbrand: Audi\nengine: diesel\ncamera: front\nsmartphone: car-play\n";

/// Partial update adding driver assistance.
#[allow(dead_code)]
pub const ADAS_UPDATE_YAML: &str =
    "id: 123\nbrand: Audi\nengine: diesel\nadas: adaptive-control\n";

/// Test environment with an isolated working directory.
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

    /// Get a command builder for the carconf binary.
    ///
    /// `CARCONF_*` variables are cleared so the host environment cannot leak
    /// into `merge --env` or the log level.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("carconf").expect("Failed to find carconf binary");
        for var in [
            "CARCONF_ID",
            "CARCONF_BRAND",
            "CARCONF_ENGINE",
            "CARCONF_CAMERA",
            "CARCONF_SMARTPHONE",
            "CARCONF_ADAS",
            "CARCONF_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file under the temporary directory.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }
}
