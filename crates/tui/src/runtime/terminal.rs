//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Manage raw mode, alternate screen, focus reporting and mouse capture.
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores the terminal on drop.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, enabling mouse capture when `mouse` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched into raw mode.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // Restores raw mode if the setup below fails.
        let guard = Self { mouse };

        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableFocusChange, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: there is nothing left to restore them with.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture, DisableFocusChange, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, DisableFocusChange, LeaveAlternateScreen);
        }
    }
}
