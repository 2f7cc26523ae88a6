//! Per-invocation session state
//!
//! Resolved once from the global CLI options and passed by reference to
//! every command.

use std::path::{Path, PathBuf};

use crate::core::project::locate_root;
use crate::error::ProjectError;
use crate::infra::manager::{guess_packwiz_path, Packwiz};

/// Packwiz executable and project root for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    executable: PathBuf,
    project_root: PathBuf,
}

impl Session {
    /// Create a session from already-resolved values
    pub fn new(executable: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            project_root: project_root.into(),
        }
    }

    /// Resolve the executable and locate the project root
    ///
    /// Missing values default to the packwiz binary on `PATH` and the
    /// current working directory.
    pub fn resolve(
        executable: Option<PathBuf>,
        start: Option<PathBuf>,
    ) -> Result<Self, ProjectError> {
        let executable = executable.unwrap_or_else(guess_packwiz_path);
        let start = match start {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| ProjectError::CurrentDir {
                error: e.to_string(),
            })?,
        };

        let project_root = locate_root(&start)?;
        tracing::info!(
            executable = %executable.display(),
            root = %project_root.display(),
            "Resolved session"
        );

        Ok(Self::new(executable, project_root))
    }

    /// Path to the packwiz binary
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Project root (directory containing `pack.toml`)
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Packwiz runner bound to this project
    pub fn packwiz(&self) -> Packwiz {
        Packwiz::new(&self.executable, &self.project_root)
    }
}
