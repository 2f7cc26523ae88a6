//! Project root location and metadata file discovery
//!
//! A Packwiz project is any directory holding a `pack.toml`. Every
//! `*.pw.toml` file below it describes one tracked item.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults::{MARKER_FILE, METADATA_SUFFIX};
use crate::error::ProjectError;

/// A discovered `*.pw.toml` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    absolute: PathBuf,
    relative: PathBuf,
}

impl MetadataFile {
    /// Create from a file path under `root`
    ///
    /// Returns `None` if `path` is not inside `root`.
    pub fn new(root: &Path, path: PathBuf) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?.to_path_buf();
        Some(Self {
            absolute: path,
            relative,
        })
    }

    /// Full path of the file
    pub fn absolute_path(&self) -> &Path {
        &self.absolute
    }

    /// Path relative to the project root
    pub fn path(&self) -> &Path {
        &self.relative
    }

    /// Parent directory relative to the project root (`.` for the root itself)
    pub fn directory(&self) -> &Path {
        match self.relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Full path of the parent directory
    pub fn absolute_directory(&self) -> &Path {
        self.absolute.parent().unwrap_or(&self.absolute)
    }

    /// Base name, e.g. `sodium.pw.toml`
    pub fn file_name(&self) -> String {
        self.absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Base name without the `.pw.toml` suffix
    pub fn stem(&self) -> String {
        let name = self.file_name();
        match name.strip_suffix(METADATA_SUFFIX) {
            Some(stem) => stem.to_string(),
            None => name,
        }
    }
}

/// Check whether `dir` directly contains the marker file
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(MARKER_FILE).is_file()
}

/// Find the nearest directory at or above `start` that contains `pack.toml`
///
/// `start` must be an existing directory; relative paths are resolved
/// against the current working directory first.
pub fn locate_root(start: &Path) -> Result<PathBuf, ProjectError> {
    let start = std::path::absolute(start).map_err(|e| ProjectError::CurrentDir {
        error: e.to_string(),
    })?;

    if !start.is_dir() {
        return Err(ProjectError::NotADirectory { path: start });
    }

    match search_upward(&start, is_project_root) {
        Some(root) => {
            tracing::debug!(root = %root.display(), "Found project root");
            Ok(root)
        }
        None => Err(ProjectError::NotAProject { path: start }),
    }
}

/// First of `start` and its ancestors accepted by `is_root`
fn search_upward<F>(start: &Path, is_root: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    start.ancestors().find(|dir| is_root(dir)).map(Path::to_path_buf)
}

/// Check whether a file name marks a metadata file
pub fn is_metadata_file_name(name: &str) -> bool {
    name.ends_with(METADATA_SUFFIX)
}

/// Recursively collect every `*.pw.toml` file under `root`
///
/// Symlinked directories are not descended into, but a symlink that
/// resolves to a regular file counts. Results are sorted by path bytes so
/// repeated calls return identical sequences regardless of directory
/// iteration order.
pub fn discover_files(root: &Path) -> Result<Vec<MetadataFile>, ProjectError> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| ProjectError::Walk {
            path: e
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            error: e.to_string(),
        })?;

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file
            && is_metadata_file_name(&entry.file_name().to_string_lossy())
        {
            paths.push(entry.into_path());
        }
    }

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    tracing::debug!(count = paths.len(), "Discovered metadata files");

    Ok(paths
        .into_iter()
        .filter_map(|path| MetadataFile::new(root, path))
        .collect())
}
