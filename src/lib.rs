//! pwkit - Utilities for Packwiz modpack projects
//!
//! This library finds the root of a Packwiz project, lists its metadata
//! files, removes selected files interactively and repairs the index by
//! driving the `packwiz` binary.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
