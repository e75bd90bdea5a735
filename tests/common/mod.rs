//! Common test utilities for Shipwright integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write an executable shell script in the project
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn write_script(&self, path: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.write_file(path, &format!("#!/bin/sh\n{body}"));
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        script
    }

    /// `shipwright` command running against this project
    pub fn command(&self) -> Command {
        let mut cmd = shipwright_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

/// `shipwright` command with the process environment cleared of overrides
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn shipwright_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shipwright").expect("shipwright binary not built");
    cmd.env_remove("SHIPWRIGHT_PROJECT")
        .env_remove("SHIPWRIGHT_VCPKG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Relative paths of every regular file under `root`, sorted
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("walked path outside root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
