//! Filesystem operations
//!
//! Handles file reads, deletions and resets with typed errors.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::FilesystemError;

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a single file
pub fn remove_file(path: &Path) -> Result<(), FilesystemError> {
    std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a file if present, then recreate it empty
///
/// Returns `true` when a previous file was removed.
pub fn reset_file(path: &Path) -> Result<bool, FilesystemError> {
    let existed = match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            return Err(FilesystemError::RemoveFile {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
    };

    std::fs::File::create(path).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    Ok(existed)
}
