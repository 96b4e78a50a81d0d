//! Game module: Board, rules, cursor and the state machine that ties them.
//!
//! This module contains:
//! - [`Board`]: The 3×3 grid and the active [`Player`]
//! - [`rules`]: Win/draw detection over a board
//! - [`Cursor`]: Wrap-around cell selection
//! - [`Game`]: The state machine driven by [`crate::input::Command`]s

mod board;
mod cursor;
pub mod rules;
mod state;

pub use board::{Board, Cell, Player, SIZE};
pub use cursor::{Cursor, Direction};
pub use rules::Outcome;
pub use state::{Game, GameStatus};
