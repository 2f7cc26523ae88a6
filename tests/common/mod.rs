//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary Packwiz project and provides utilities for setting
/// up test scenarios and running the pwkit binary against it.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Scratch directory for fake tools and their logs
    pub tools: TempDir,
}

impl TestProject {
    /// Create an empty directory (not yet a project)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            tools: TempDir::new().expect("Failed to create tools directory"),
        }
    }

    /// Create a project with a `pack.toml` marker
    pub fn with_pack() -> Self {
        let project = Self::new();
        project.create_file("pack.toml", SAMPLE_PACK);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Path of the log written by the fake packwiz
    pub fn packwiz_log(&self) -> PathBuf {
        self.tools.path().join("packwiz-calls.log")
    }

    /// Invocations recorded by the fake packwiz, one line per call
    pub fn packwiz_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.packwiz_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Install a fake packwiz that logs its arguments and exits with `code`
    #[cfg(unix)]
    pub fn fake_packwiz(&self, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.path().join("packwiz");
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> '{}'\nexit {code}\n",
            self.packwiz_log().display()
        );
        std::fs::write(&path, script).expect("Failed to write fake packwiz");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake packwiz executable");
        path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run pwkit in `cwd` with a clean environment for pwkit variables
pub fn run_pwkit(cwd: &Path, args: &[&str]) -> Output {
    pwkit_command(cwd)
        .args(args)
        .output()
        .expect("Failed to execute pwkit")
}

/// pwkit command in `cwd` with pwkit environment variables cleared
pub fn pwkit_command(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pwkit"));
    cmd.current_dir(cwd)
        .env_remove("PACKWIZ_EXEC")
        .env_remove("PACKWIZ_PROJECT")
        .env_remove("PACKWIZ_LIST_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Sample pack.toml
#[allow(dead_code)]
pub const SAMPLE_PACK: &str = r#"
name = "Test Pack"
author = "tester"
version = "1.0.0"
pack-format = "packwiz:1.1.0"

[index]
file = "index.toml"
hash-format = "sha256"
hash = ""

[versions]
minecraft = "1.20.1"
fabric = "0.14.21"
"#;

/// Sample metadata file with every descriptive field
#[allow(dead_code)]
pub const SAMPLE_MOD: &str = r#"
name = "Sodium"
filename = "sodium-fabric-mc1.20.1-0.5.0.jar"
side = "client"

[download]
url = "https://cdn.modrinth.com/data/AANobbMI/versions/sodium.jar"
hash-format = "sha512"
hash = "00"

[update.modrinth]
mod-id = "AANobbMI"
version = "OihdIimA"
"#;
