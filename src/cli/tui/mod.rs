//! TUI (Terminal User Interface) module
//!
//! Provides the interactive checklist used by `pwkit remove`.

pub mod select;

pub use select::MultiSelect;
