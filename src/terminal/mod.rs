//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! and restores it when dropped, whether the report exits normally or
//! through an error. The panic hook from [`setup_panic_hook`] covers the
//! unwinding path.
//!
//! # Example
//!
//! ```no_run
//! use decoding_chain::terminal::TerminalManager;
//!
//! fn main() -> Result<(), decoding_chain::error::UiError> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let _terminal = term_manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::ReportResult;

/// Restores the terminal when dropped.
///
/// Cleanup runs at most once: raw mode off, alternate screen left, cursor
/// shown.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Terminal`](crate::error::UiError::Terminal) if any
    /// terminal command fails. Anything already switched on is switched off
    /// again.
    pub fn new() -> ReportResult<Self> {
        enable_raw_mode()?;
        // Dropped on any early return below, which undoes raw mode.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        tracing::debug!("terminal entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> ReportResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}
