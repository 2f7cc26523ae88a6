//! Interactive removal of metadata files
//!
//! The workflow discovers every `*.pw.toml` file, labels it, lets the
//! operator pick files, asks for confirmation, deletes the picks and finally
//! runs `packwiz refresh` so the index matches the files on disk.
//!
//! Prompting is behind [`RemovalUi`] and Packwiz behind [`ManagerInvoker`],
//! so each step can be driven without a terminal.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::defaults::{REFRESH_COMMAND, REMOVE_LABEL_FORMAT};
use crate::core::metadata::format_all_with;
use crate::core::project::{discover_files, MetadataFile};
use crate::core::template::Template;
use crate::error::{FilesystemError, ManagerError, MetadataError, ProjectError, TemplateError};
use crate::infra::filesystem;
use crate::infra::manager::ManagerInvoker;

/// Errors that can occur during removal
#[derive(Error, Debug)]
pub enum RemoveError {
    /// Nothing to remove
    #[error("No external files (*.pw.toml) found in {root}")]
    NoFilesFound { root: PathBuf },

    /// Discovery failed
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Label template is invalid
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A metadata file could not be labeled
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Selection refers to a file that was not offered
    #[error("Selection index {index} is out of range for {len} files")]
    InvalidSelection { index: usize, len: usize },

    /// Prompting the operator failed
    #[error("Prompt failed")]
    Prompt(#[from] io::Error),

    /// Deleting a file failed; earlier deletions stay in effect
    #[error("Removal stopped after deleting {deleted} files; run `pwkit repair` once fixed")]
    Delete {
        deleted: usize,
        source: FilesystemError,
    },

    /// Files were deleted but Packwiz could not refresh the index
    #[error("Deleted {deleted} files but the index refresh failed")]
    RefreshFailed {
        deleted: usize,
        source: ManagerError,
    },
}

/// Operator-facing side of the removal workflow
///
/// Only selection and confirmation are required; the other hooks report
/// progress and default to doing nothing.
pub trait RemovalUi {
    /// Discovery is about to start
    fn discovering(&mut self) {}

    /// Discovery finished with `count` candidates
    fn found(&mut self, _count: usize) {}

    /// One candidate was labeled
    fn labeled(&mut self, _file: &MetadataFile) {}

    /// Let the operator pick zero or more labels, returning their indices
    fn select(&mut self, labels: &[String]) -> io::Result<Vec<usize>>;

    /// Ask whether `count` files should really be deleted
    fn confirm(&mut self, count: usize) -> io::Result<bool>;

    /// A file is about to be deleted
    fn deleting(&mut self, _label: &str) {}
}

/// How a removal run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Operator picked nothing
    NoneSelected,
    /// Operator declined the confirmation for `count` files
    Aborted { count: usize },
    /// Files were deleted and the index refreshed
    Removed { deleted: Vec<PathBuf> },
}

/// Discover candidates, failing if there are none
pub fn collect_candidates(root: &Path) -> Result<Vec<MetadataFile>, RemoveError> {
    let files = discover_files(root)?;
    if files.is_empty() {
        return Err(RemoveError::NoFilesFound {
            root: root.to_path_buf(),
        });
    }
    Ok(files)
}

/// Label candidates with the removal template (`{name} ({directory})`)
pub fn label_candidates<F>(files: &[MetadataFile], on_file: F) -> Result<Vec<String>, RemoveError>
where
    F: FnMut(&MetadataFile),
{
    let template = Template::parse(REMOVE_LABEL_FORMAT)?;
    Ok(format_all_with(files, &template, on_file)?)
}

/// Sort and deduplicate a selection, rejecting out-of-range indices
pub fn normalize_selection(mut selection: Vec<usize>, len: usize) -> Result<Vec<usize>, RemoveError> {
    if let Some(&index) = selection.iter().find(|&&i| i >= len) {
        return Err(RemoveError::InvalidSelection { index, len });
    }
    selection.sort_unstable();
    selection.dedup();
    Ok(selection)
}

/// Delete the selected files one at a time
///
/// Stops at the first failure; files deleted before it stay deleted.
pub fn delete_selected<F>(
    files: &[MetadataFile],
    labels: &[String],
    selection: &[usize],
    mut on_delete: F,
) -> Result<Vec<PathBuf>, RemoveError>
where
    F: FnMut(&str),
{
    let mut deleted = Vec::with_capacity(selection.len());

    for &index in selection {
        let (Some(file), Some(label)) = (files.get(index), labels.get(index)) else {
            return Err(RemoveError::InvalidSelection {
                index,
                len: files.len(),
            });
        };

        on_delete(label);
        tracing::info!(path = %file.absolute_path().display(), "Deleting metadata file");
        filesystem::remove_file(file.absolute_path()).map_err(|source| RemoveError::Delete {
            deleted: deleted.len(),
            source,
        })?;
        deleted.push(file.absolute_path().to_path_buf());
    }

    Ok(deleted)
}

/// Run the full removal workflow in `root`
pub fn run_removal<U, M>(root: &Path, ui: &mut U, manager: &M) -> Result<RemovalOutcome, RemoveError>
where
    U: RemovalUi + ?Sized,
    M: ManagerInvoker + ?Sized,
{
    ui.discovering();
    let files = collect_candidates(root)?;
    ui.found(files.len());

    let labels = label_candidates(&files, |file| ui.labeled(file))?;

    let selection = normalize_selection(ui.select(&labels)?, files.len())?;
    if selection.is_empty() {
        tracing::info!("No files selected");
        return Ok(RemovalOutcome::NoneSelected);
    }

    if !ui.confirm(selection.len())? {
        tracing::info!(count = selection.len(), "Removal aborted");
        return Ok(RemovalOutcome::Aborted {
            count: selection.len(),
        });
    }

    let deleted = delete_selected(&files, &labels, &selection, |label| ui.deleting(label))?;

    manager
        .run(&[REFRESH_COMMAND])
        .map_err(|source| RemoveError::RefreshFailed {
            deleted: deleted.len(),
            source,
        })?;

    Ok(RemovalOutcome::Removed { deleted })
}
