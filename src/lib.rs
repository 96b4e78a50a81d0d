//! # Tic-tac-toe
//!
//! Two-player tic-tac-toe for the terminal, driven entirely from the keyboard.
//!
//! The board is painted as a fixed seven-line frame below whatever the
//! terminal already shows, and every move repaints that frame in place using
//! relative cursor motion. Nothing scrolls and earlier output stays intact.
//!
//! ## Core Concepts
//!
//! - **Game state machine**: [`Game`] owns the board, cursor and status and
//!   applies one [`Command`] at a time
//! - **Byte decoder**: [`Decoder`] turns keystrokes (letters, arrows) into
//!   commands without touching the terminal
//! - **In-place renderer**: [`Renderer`] emits the escape sequences for one
//!   frame into an [`OutputBuffer`], flushed in a single write
//! - **Actor model**: Input and signals arrive over one channel; the
//!   [`Engine`] loop is the only owner of game state
//!
//! ## Example
//!
//! ```rust
//! use tictactoe::{Command, Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.apply(Command::Select);
//! assert_eq!(game.board().active_player(), Player::Second);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod game;
pub mod input;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, ExitReason, InputEvent, Interrupt};
pub use error::{GameError, Result};
pub use game::{Board, Cell, Cursor, Direction, Game, GameStatus, Outcome, Player};
pub use input::{Command, Decoder};
pub use terminal::{CursorShape, OutputBuffer, Renderer, SessionConfig, TerminalSession};
