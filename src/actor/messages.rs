//! Message types for actor communication.
//!
//! Everything the game loop waits on arrives as an [`InputEvent`] on a single
//! channel: key bytes from the input actor and interrupts from either the
//! input actor or the signal guard.

use std::io;

/// Which kind of interrupt stopped the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// SIGINT, or Ctrl+C typed while in raw mode.
    Interrupt,
    /// SIGQUIT, or Ctrl+\ typed while in raw mode.
    Quit,
}

/// Events from the input and signal threads.
#[derive(Debug)]
pub enum InputEvent {
    /// One byte read from standard input.
    Byte(u8),

    /// The user or the OS asked the program to stop right away.
    Interrupt(Interrupt),

    /// Standard input was closed.
    EndOfInput,

    /// Reading standard input failed.
    Error(io::Error),
}

/// Why the game loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitReason {
    /// The quit key was pressed.
    Quit,
    /// Standard input closed, or every event sender went away.
    EndOfInput,
    /// An interrupt arrived.
    Interrupted(Interrupt),
}
