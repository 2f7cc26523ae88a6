//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;
pub mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{ENV_EXEC, ENV_PROJECT};
use crate::core::session::Session;
use commands::Commands;
use output::OutputConfig;

/// pwkit - Utilities for working with the Packwiz modpack manager
///
/// Lists, removes and repairs the files of a Packwiz project.
#[derive(Parser, Debug)]
#[command(name = "pwkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path of the Packwiz executable (searches PATH otherwise)
    #[arg(long, value_name = "PATH", env = ENV_EXEC, global = true)]
    pub exec: Option<PathBuf>,

    /// Path inside the Packwiz project (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = ENV_PROJECT, global = true)]
    pub path: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            let session = Session::resolve(self.exec, self.path)?;
            cmd.run(&session, OutputConfig::new(self.quiet))
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
