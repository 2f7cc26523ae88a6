//! CLI implementation for `pwkit list` command

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::OutputConfig;
use crate::core::metadata::{format_all_with, load_fields, FileFields};
use crate::core::project::discover_files;
use crate::core::session::Session;
use crate::core::template::Template;

/// One row of `pwkit list --json`
#[derive(Debug, Serialize)]
pub struct ListEntry {
    /// Rendered label
    pub label: String,
    #[serde(flatten)]
    pub fields: FileFields,
}

/// Execute the list command
pub fn execute(session: &Session, format: &str, json: bool, output: OutputConfig) -> Result<()> {
    // Validate before touching any file
    let template = Template::parse(format)
        .with_context(|| format!("Invalid format template '{format}'"))?;

    let spinner = output.spinner("Discovering files...");
    let files = discover_files(session.project_root())?;
    spinner.finish_and_clear();

    let bar = output.progress_bar(files.len() as u64, "Generating formatted list...");

    if json {
        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            let fields = load_fields(file)?;
            entries.push(ListEntry {
                label: fields.render(&template),
                fields,
            });
            bar.inc(1);
        }
        bar.finish_and_clear();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let labels = format_all_with(&files, &template, |_| bar.inc(1))?;
        bar.finish_and_clear();
        for label in labels {
            println!("{label}");
        }
    }

    Ok(())
}
