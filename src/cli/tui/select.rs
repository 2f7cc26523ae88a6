//! Multi-select checklist
//!
//! Full-screen list where the operator ticks any number of entries.
//! Up/Down (or k/j) move, Space toggles, `a` toggles everything, Enter
//! accepts. Esc, `q` and Ctrl+C leave with nothing selected.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

/// Result of handling one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep waiting for input
    Continue,
    /// Selection accepted
    Accept,
    /// Selection abandoned
    Cancel,
}

/// Checklist state
#[derive(Debug)]
pub struct MultiSelect {
    title: String,
    items: Vec<String>,
    checked: Vec<bool>,
    state: ListState,
}

impl MultiSelect {
    /// Create a checklist over `items`, nothing ticked
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            title: title.into(),
            checked: vec![false; items.len()],
            items,
            state,
        }
    }

    /// Indices of ticked items, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, &checked)| checked.then_some(i))
            .collect()
    }

    /// Index under the cursor
    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Step {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Step::Cancel;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Char(' ') => {
                if let Some(checked) = self.cursor().and_then(|i| self.checked.get_mut(i)) {
                    *checked = !*checked;
                }
            }
            KeyCode::Char('a') => {
                let all = self.checked.iter().all(|&c| c);
                self.checked.iter_mut().for_each(|c| *c = !all);
            }
            KeyCode::Enter => return Step::Accept,
            KeyCode::Esc | KeyCode::Char('q') => return Step::Cancel,
            _ => {}
        }
        Step::Continue
    }

    fn move_cursor(&mut self, down: bool) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let i = self.cursor().unwrap_or(0);
        let new_i = match (down, i) {
            (true, i) if i >= last => 0,
            (true, i) => i + 1,
            (false, 0) => last,
            (false, i) => i - 1,
        };
        self.state.select(Some(new_i));
    }

    /// Run the checklist on the terminal, returning the ticked indices
    ///
    /// Cancelling returns an empty selection.
    pub fn run(mut self) -> io::Result<Vec<usize>> {
        if !is_terminal_interactive() {
            return Err(io::Error::other(
                "interactive selection needs a terminal on stdin and stdout",
            ));
        }

        // Setup terminal; restored on every exit path from here on
        enable_raw_mode()?;
        let restore = RestoreGuard::new(restore_terminal);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);
        drop(restore);

        match result? {
            Step::Accept => Ok(self.selected_indices()),
            Step::Cancel | Step::Continue => Ok(Vec::new()),
        }
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<Step> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.handle_key(key) {
                    Step::Continue => {}
                    done => return Ok(done),
                }
            }
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(f.area());

        let items: Vec<ListItem> = self
            .items
            .iter()
            .zip(&self.checked)
            .map(|(label, &checked)| {
                let marker = if checked { "[x]" } else { "[ ]" };
                let style = if checked {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{marker} {label}")).style(style)
            })
            .collect();

        let title = format!(
            "{} ({} selected)",
            self.title,
            self.checked.iter().filter(|&&c| c).count()
        );
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, chunks[0], &mut self.state);

        let help = Paragraph::new("↑/↓ move  Space toggle  a all  Enter accept  Esc cancel")
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[1]);
    }
}

/// Leave raw mode and the alternate screen, logging any failure
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs its closure once when dropped
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Check if the terminal is interactive
pub fn is_terminal_interactive() -> bool {
    // Check TERM environment variable
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }
    }

    // Check if stdin/stdout are TTYs
    io::stdin().is_terminal() && io::stdout().is_terminal()
}
