//! Error types for pwkit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project location and discovery errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Working directory could not be determined
    #[error("Failed to read the current directory: {error}")]
    CurrentDir { error: String },

    /// Start path is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// No ancestor contains the marker file
    #[error("{path} is not the root or a subdirectory of a Packwiz project")]
    NotAProject { path: PathBuf },

    /// Directory walk failed
    #[error("Failed to scan '{path}': {error}")]
    Walk { path: PathBuf, error: String },
}

/// Template parsing errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholder name is not one of the known fields
    #[error("Unknown placeholder '{{{name}}}' (available: {known})")]
    UnknownPlaceholder { name: String, known: String },

    /// Text after the colon is not `[[fill]align][width][.precision]`
    #[error("Invalid format spec '{spec}' for placeholder '{{{name}}}' (expected [[fill]align][width][.precision])")]
    InvalidFormatSpec { name: String, spec: String },

    /// Lone brace that is neither a placeholder nor an escape
    #[error("Unmatched '{brace}' at position {position} (use '{brace}{brace}' for a literal brace)")]
    UnmatchedBrace { brace: char, position: usize },
}

/// Metadata file errors
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File could not be read
    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// File content is not valid TOML
    #[error("Malformed metadata file '{path}'")]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Packwiz invocation errors
#[derive(Error, Debug)]
pub enum ManagerError {
    /// Process could not be started
    #[error("Failed to run '{executable}': {error}")]
    Spawn { executable: PathBuf, error: String },

    /// Process exited unsuccessfully
    #[error("`{command}` exited with {}", describe_code(*code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
