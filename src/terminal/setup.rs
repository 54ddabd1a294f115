//! Low-level enter/leave functions used by `TerminalManager` and the panic
//! hook.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen so the shell's scrollback is preserved.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and return the terminal to normal operation.
///
/// Safe to call repeatedly; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for the panic path.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
