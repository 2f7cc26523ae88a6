//! Packwiz process invocation
//!
//! Runs the Packwiz binary inside the project root with inherited stdio so
//! the operator sees its own output.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults::MANAGER_BINARY;
use crate::error::ManagerError;

/// Something that can run Packwiz commands in a project
pub trait ManagerInvoker {
    /// Run Packwiz with `args`, failing on a non-zero exit
    fn run(&self, args: &[&str]) -> Result<(), ManagerError>;
}

/// Packwiz binary bound to a project root
#[derive(Debug, Clone)]
pub struct Packwiz {
    executable: PathBuf,
    project_root: PathBuf,
}

impl Packwiz {
    /// Create a runner for `executable` operating in `project_root`
    pub fn new(executable: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            project_root: project_root.into(),
        }
    }

    /// Get the path to the packwiz binary
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Get the directory commands run in
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl ManagerInvoker for Packwiz {
    fn run(&self, args: &[&str]) -> Result<(), ManagerError> {
        let command = format!("{MANAGER_BINARY} {}", args.join(" "));
        println!("Running: {command}");
        tracing::info!(
            executable = %self.executable.display(),
            cwd = %self.project_root.display(),
            "Running packwiz"
        );

        let status = Command::new(&self.executable)
            .args(args)
            .current_dir(&self.project_root)
            .status()
            .map_err(|e| ManagerError::Spawn {
                executable: self.executable.clone(),
                error: e.to_string(),
            })?;

        if status.success() {
            println!("✓ Packwiz command ran successfully");
            Ok(())
        } else {
            tracing::debug!(?status, "packwiz failed");
            Err(ManagerError::Failed {
                command,
                code: status.code(),
            })
        }
    }
}

/// Guess the packwiz path: first match on `PATH`, else the bare name
pub fn guess_packwiz_path() -> PathBuf {
    which::which(MANAGER_BINARY).unwrap_or_else(|_| PathBuf::from(MANAGER_BINARY))
}
