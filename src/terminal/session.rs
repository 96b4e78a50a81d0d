//! `TerminalSession`: Scoped raw-mode ownership of the controlling terminal.
//!
//! Creating a session switches the terminal to byte-at-a-time input without
//! echo; dropping it switches back. A panic hook restores the terminal too,
//! since release builds abort on panic and skip `Drop`.

use super::output::{CursorShape, OutputBuffer};
use crate::error::{GameError, Result};
use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Configuration for the terminal session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cursor shape while a game is on screen.
    pub play_cursor: CursorShape,
    /// Cursor shape restored on exit.
    pub exit_cursor: CursorShape,
    /// Whether to turn SIGINT/SIGQUIT into a clean exit.
    pub handle_signals: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            play_cursor: CursorShape::SteadyUnderline,
            exit_cursor: CursorShape::UserDefault,
            handle_signals: true,
        }
    }
}

/// Guard that keeps the terminal in raw mode for its lifetime.
#[derive(Debug)]
pub struct TerminalSession {
    _raw_mode: (),
}

impl TerminalSession {
    /// Check the terminal and enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotATerminal`] before touching any terminal state
    /// if standard input is not a TTY, or an I/O error if raw mode cannot be
    /// entered.
    pub fn new() -> Result<Self> {
        if !io::stdin().is_tty() {
            return Err(GameError::NotATerminal);
        }

        terminal::enable_raw_mode()?;
        install_panic_hook();
        debug!("terminal session started");

        Ok(Self { _raw_mode: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to restore terminal mode");
        }
        debug!("terminal session ended");
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let _ = terminal::disable_raw_mode();

    let mut out = OutputBuffer::with_capacity(16);
    out.newline();
    out.cursor_shape(CursorShape::UserDefault);
    let _ = out.flush_to(&mut io::stdout());
}
