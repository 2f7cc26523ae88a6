//! Core business logic module
//!
//! This module contains the Packwiz project logic for pwkit. Process and
//! filesystem side effects go through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`session`] - Resolved executable and project root for one invocation
//! - [`project`] - Project root location and metadata file discovery
//! - [`template`] - Label template parsing and rendering
//! - [`metadata`] - Metadata file parsing and label formatting
//! - [`remove`] - Interactive removal workflow
//! - [`repair`] - Index repair logic

pub mod metadata;
pub mod project;
pub mod remove;
pub mod repair;
pub mod session;
pub mod template;
