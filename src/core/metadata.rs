//! Metadata file parsing and label formatting
//!
//! Each `*.pw.toml` file is read as a TOML table. Only `name` and `side`
//! matter here; everything else belongs to Packwiz.

use std::num::FpCategory;
use std::path::Path;

use serde::Serialize;
use toml::{Table, Value};

use crate::config::defaults::UNKNOWN_SIDE;
use crate::core::project::MetadataFile;
use crate::core::template::{Placeholder, Template};
use crate::error::MetadataError;
use crate::infra::filesystem;

/// Descriptive fields decoded from a metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMetadata {
    /// Display name, if present and non-empty
    pub name: Option<String>,
    /// Deployment side (`client`, `server`, `both`), if present and non-empty
    pub side: Option<String>,
}

impl ParsedMetadata {
    /// Parse metadata from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table: Table = toml::from_str(content)?;
        Ok(Self {
            name: field_text(&table, "name"),
            side: field_text(&table, "side"),
        })
    }

    /// Read and parse a metadata file
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let content = filesystem::read_file(path).map_err(|e| MetadataError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|source| MetadataError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Text for a top-level key; non-strings use their TOML form
///
/// Empty or zero-like values (`""`, `false`, `0`, `[]`, `{}`) count as absent
/// so the caller's fallback applies.
fn field_text(table: &Table, key: &str) -> Option<String> {
    match table.get(key)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Boolean(false) | Value::Integer(0) => None,
        Value::Float(f) if f.classify() == FpCategory::Zero => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Table(table) if table.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// A metadata file with every placeholder value resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFields {
    pub name: String,
    pub side: String,
    pub filename: String,
    pub directory: String,
    pub path: String,
    pub absolute_directory: String,
    pub absolute_path: String,
}

impl FileFields {
    /// Merge parsed values with path-derived fallbacks
    pub fn resolve(file: &MetadataFile, parsed: ParsedMetadata) -> Self {
        Self {
            name: parsed.name.unwrap_or_else(|| file.stem()),
            side: parsed.side.unwrap_or_else(|| UNKNOWN_SIDE.to_string()),
            filename: file.file_name(),
            directory: file.directory().display().to_string(),
            path: file.path().display().to_string(),
            absolute_directory: file.absolute_directory().display().to_string(),
            absolute_path: file.absolute_path().display().to_string(),
        }
    }

    /// Value for a single placeholder
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Name => &self.name,
            Placeholder::Side => &self.side,
            Placeholder::Filename => &self.filename,
            Placeholder::Directory => &self.directory,
            Placeholder::Path => &self.path,
            Placeholder::AbsoluteDirectory => &self.absolute_directory,
            Placeholder::AbsolutePath => &self.absolute_path,
        }
    }

    /// Render a template against these fields
    pub fn render(&self, template: &Template) -> String {
        template.render(|p| self.get(p).to_string())
    }
}

/// Read a file and resolve its fields
pub fn load_fields(file: &MetadataFile) -> Result<FileFields, MetadataError> {
    let parsed = ParsedMetadata::load(file.absolute_path())?;
    Ok(FileFields::resolve(file, parsed))
}

/// Produce the label for one file
pub fn format_file(file: &MetadataFile, template: &Template) -> Result<String, MetadataError> {
    Ok(load_fields(file)?.render(template))
}

/// Label every file, preserving input order
///
/// The first malformed file aborts the whole batch.
pub fn format_all(files: &[MetadataFile], template: &Template) -> Result<Vec<String>, MetadataError> {
    format_all_with(files, template, |_| {})
}

/// [`format_all`] with a callback after each file, for progress reporting
pub fn format_all_with<F>(
    files: &[MetadataFile],
    template: &Template,
    mut on_file: F,
) -> Result<Vec<String>, MetadataError>
where
    F: FnMut(&MetadataFile),
{
    let mut labels = Vec::with_capacity(files.len());
    for file in files {
        labels.push(format_file(file, template)?);
        on_file(file);
    }
    Ok(labels)
}
