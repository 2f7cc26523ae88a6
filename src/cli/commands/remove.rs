//! CLI implementation for `pwkit remove` command
//!
//! Drives the removal workflow with a terminal checklist for selection and a
//! `[y/N]` prompt for confirmation.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use indicatif::ProgressBar;

use crate::cli::output::{status, OutputConfig};
use crate::cli::tui::MultiSelect;
use crate::core::project::MetadataFile;
use crate::core::remove::{run_removal, RemovalOutcome, RemovalUi};
use crate::core::session::Session;

/// Terminal front-end for the removal workflow
struct TerminalUi {
    output: OutputConfig,
    progress: Option<ProgressBar>,
}

impl TerminalUi {
    fn new(output: OutputConfig) -> Self {
        Self {
            output,
            progress: None,
        }
    }

    fn clear_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    /// Report a deletion on `out` above the progress bar, if any
    ///
    /// The line is written even when the bar is hidden (quiet mode or no
    /// terminal on stderr).
    fn report_deletion(&self, label: &str, out: &mut impl Write) -> io::Result<()> {
        match &self.progress {
            Some(pb) => {
                pb.suspend(|| writeln!(out, "Deleting {label}"))?;
                pb.inc(1);
                Ok(())
            }
            None => writeln!(out, "Deleting {label}"),
        }
    }
}

impl RemovalUi for TerminalUi {
    fn discovering(&mut self) {
        self.progress = Some(self.output.spinner("Discovering files..."));
    }

    fn found(&mut self, count: usize) {
        self.clear_progress();
        println!("Found {count} files");
        self.progress = Some(
            self.output
                .progress_bar(count as u64, "Generating formatted list..."),
        );
    }

    fn labeled(&mut self, _file: &MetadataFile) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    fn select(&mut self, labels: &[String]) -> io::Result<Vec<usize>> {
        self.clear_progress();
        MultiSelect::new("Which files should be removed?", labels.to_vec()).run()
    }

    fn confirm(&mut self, count: usize) -> io::Result<bool> {
        let confirmed = confirm(&format!("Delete {count} files?"), &mut io::stdin().lock())?;
        if confirmed {
            self.progress = Some(
                self.output
                    .progress_bar(count as u64, "Deleting selected files..."),
            );
        }
        Ok(confirmed)
    }

    fn deleting(&mut self, label: &str) {
        if let Err(e) = self.report_deletion(label, &mut io::stdout().lock()) {
            tracing::warn!(error = %e, "Failed to report deletion");
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        self.clear_progress();
    }
}

/// Ask a `[y/N]` question, reading the answer from `input`
///
/// Only `y` or `yes` (any case) count as yes; end of input is a no.
pub fn confirm(question: &str, input: &mut impl BufRead) -> io::Result<bool> {
    eprint!("{question} [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Execute the remove command
pub fn execute(session: &Session, output: OutputConfig) -> Result<()> {
    let mut ui = TerminalUi::new(output);
    let outcome = run_removal(session.project_root(), &mut ui, &session.packwiz())?;
    drop(ui);

    match outcome {
        RemovalOutcome::NoneSelected => println!("{} No files selected", status::INFO),
        RemovalOutcome::Aborted { .. } => println!("{} Aborted!", status::WARNING),
        RemovalOutcome::Removed { deleted } => {
            println!("{} Removed {} files", status::SUCCESS, deleted.len());
        }
    }
    println!("{} All done!", status::SUCCESS);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_yes() {
        for answer in ["y\n", "Y\n", "yes\n", " YES \n"] {
            assert!(confirm("Delete?", &mut Cursor::new(answer)).unwrap(), "{answer:?}");
        }
    }

    fn reported(output: OutputConfig, labels: &[&str]) -> (String, u64) {
        let mut ui = TerminalUi::new(output);
        ui.progress = Some(output.progress_bar(labels.len() as u64, "Deleting selected files..."));
        let mut out = Vec::new();
        for label in labels {
            ui.report_deletion(label, &mut out).unwrap();
        }
        let position = ui.progress.as_ref().map_or(0, ProgressBar::position);
        (String::from_utf8(out).unwrap(), position)
    }

    #[test]
    fn test_quiet_mode_still_reports_deletions() {
        let (out, position) = reported(OutputConfig::new(true), &["Foo Mod (mods)", "bar (mods)"]);
        assert_eq!(out, "Deleting Foo Mod (mods)\nDeleting bar (mods)\n");
        assert_eq!(position, 2);
    }

    #[test]
    fn test_deletions_reported_with_visible_bar() {
        let (out, position) = reported(OutputConfig::new(false), &["Foo Mod (mods)"]);
        assert_eq!(out, "Deleting Foo Mod (mods)\n");
        assert_eq!(position, 1);
    }

    #[test]
    fn test_deletions_reported_without_bar() {
        let ui = TerminalUi::new(OutputConfig::new(false));
        let mut out = Vec::new();
        ui.report_deletion("bar (mods)", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Deleting bar (mods)\n");
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        for answer in ["\n", "n\n", "no\n", "yep\n", ""] {
            assert!(!confirm("Delete?", &mut Cursor::new(answer)).unwrap(), "{answer:?}");
        }
    }
}
