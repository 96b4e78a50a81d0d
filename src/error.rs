//! Error type for terminal setup and I/O.
//!
//! Game logic never fails; only the terminal around it can.

use std::io;
use thiserror::Error;

/// Fatal errors that end the program.
#[derive(Debug, Error)]
pub enum GameError {
    /// Standard input is not an interactive terminal.
    #[error("not a terminal")]
    NotATerminal,

    /// Reading keys, writing frames or switching terminal modes failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for fallible terminal operations.
pub type Result<T> = std::result::Result<T, GameError>;
