//! Index repair logic
//!
//! A stale or corrupt `index.toml` is fixed by replacing it with an empty
//! file and letting `packwiz refresh` rebuild it from the metadata files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::defaults::{INDEX_FILE, REFRESH_COMMAND};
use crate::error::{FilesystemError, ManagerError};
use crate::infra::filesystem;
use crate::infra::manager::ManagerInvoker;

/// Errors that can occur during repair
#[derive(Error, Debug)]
pub enum RepairError {
    /// Index could not be reset
    #[error(transparent)]
    Index(#[from] FilesystemError),

    /// `packwiz refresh` failed
    #[error(transparent)]
    Refresh(#[from] ManagerError),
}

/// Result of a repair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairResult {
    /// Path of the recreated index
    pub index_path: PathBuf,
    /// Whether an index existed before the reset
    pub replaced_existing: bool,
}

/// Delete the project index (if any) and recreate it empty
pub fn reset_index(project_root: &Path) -> Result<RepairResult, FilesystemError> {
    let index_path = project_root.join(INDEX_FILE);
    let replaced_existing = filesystem::reset_file(&index_path)?;

    if !replaced_existing {
        tracing::warn!(path = %index_path.display(), "No index file to replace, created an empty one");
    }

    Ok(RepairResult {
        index_path,
        replaced_existing,
    })
}

/// Reset the index and rebuild it with `packwiz refresh`
pub fn repair_project<M>(project_root: &Path, manager: &M) -> Result<RepairResult, RepairError>
where
    M: ManagerInvoker + ?Sized,
{
    let result = reset_index(project_root)?;
    manager.run(&[REFRESH_COMMAND])?;
    Ok(result)
}
