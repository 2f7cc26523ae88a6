//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod list;
pub mod remove;
pub mod repair;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::config::defaults::{DEFAULT_LIST_FORMAT, ENV_LIST_FORMAT};
use crate::core::session::Session;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List project files
    List {
        /// Label template, e.g. "{name} ({side})"
        ///
        /// Placeholders: name, side, filename, directory, path,
        /// absolute_directory, absolute_path. Use {{ and }} for literal braces.
        /// Pad or truncate with a spec, e.g. "{side:<8} {name:.30}".
        #[arg(env = ENV_LIST_FORMAT, default_value = DEFAULT_LIST_FORMAT)]
        format: String,

        /// Output every field as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively remove external files (*.pw.toml)
    Remove,

    /// Rebuild the index from scratch
    ///
    /// Deletes and re-creates index.toml, then runs `packwiz refresh`.
    Repair,
}

impl Commands {
    /// Execute the command
    pub fn run(self, session: &Session, output: OutputConfig) -> Result<()> {
        match self {
            Self::List { format, json } => list::execute(session, &format, json, output),
            Self::Remove => remove::execute(session, output),
            Self::Repair => repair::execute(session),
        }
    }
}
