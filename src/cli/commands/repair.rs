//! CLI implementation for `pwkit repair` command

use anyhow::{Context, Result};

use crate::cli::output::status;
use crate::config::defaults::INDEX_FILE;
use crate::core::repair::repair_project;
use crate::core::session::Session;

/// Execute the repair command
pub fn execute(session: &Session) -> Result<()> {
    println!("{} Deleting and touching {INDEX_FILE}", status::WARNING);

    let result = repair_project(session.project_root(), &session.packwiz())
        .context("Failed to repair project")?;

    println!("{} Rebuilt {}", status::SUCCESS, result.index_path.display());
    Ok(())
}
