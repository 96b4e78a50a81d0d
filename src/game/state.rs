//! Game: The state machine that applies commands to the board and cursor.
//!
//! One [`Command`] is applied per step. Finished games pass through a
//! one-frame `Win`/`Draw` status that [`Game::settle`] turns into `Halted`;
//! from there only restart and quit are honored.

use super::board::{Board, Player};
use super::cursor::Cursor;
use super::rules::{self, Outcome};
use crate::input::Command;
use tracing::{debug, trace};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Players are taking turns.
    #[default]
    Playing,
    /// The given player just completed a line. Shown for one frame.
    Win(Player),
    /// The board just filled up without a line. Shown for one frame.
    Draw,
    /// The game is over and waits for restart or quit.
    Halted {
        /// Winner of the finished game, `None` for a draw.
        winner: Option<Player>,
    },
    /// A restart was accepted; resolved into a fresh game right away.
    ResetRequested,
    /// The player asked to leave. Terminal.
    ExitRequested,
}

impl GameStatus {
    /// Check if the status ends the main loop.
    #[inline]
    pub const fn is_exit(self) -> bool {
        matches!(self, Self::ExitRequested)
    }

    /// Check if the game has been decided.
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win(_) | Self::Draw | Self::Halted { .. })
    }
}

/// A single game session: board, cursor and status, owned together.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    cursor: Cursor,
    status: GameStatus,
}

impl Game {
    /// Start a game: empty board, centered cursor, `First` to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an arbitrary board, e.g. to replay a position.
    pub fn with_board(board: Board) -> Self {
        let mut game = Self {
            board,
            ..Self::default()
        };
        game.check_outcome();
        game
    }

    /// Get the board.
    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cursor.
    #[inline]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Get the status.
    #[inline]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply one command and return the resulting status.
    ///
    /// Never fails: commands that make no sense in the current status are
    /// dropped.
    pub fn apply(&mut self, command: Command) -> GameStatus {
        self.settle();
        trace!(?command, status = ?self.status, "apply");

        match (self.status, command) {
            (GameStatus::ExitRequested, _) => {}
            (_, Command::Quit) => {
                debug!("quit requested");
                self.status = GameStatus::ExitRequested;
            }
            (GameStatus::Playing, Command::Select) => self.select(),
            (GameStatus::Playing, command) => {
                if let Some(direction) = command.direction() {
                    self.cursor.step(direction);
                }
            }
            (GameStatus::Halted { .. }, Command::Restart) => {
                self.status = GameStatus::ResetRequested;
                self.restart();
            }
            _ => {}
        }

        self.status
    }

    /// Turn a just-announced `Win` or `Draw` into `Halted`.
    ///
    /// Call after the announcement frame has been drawn. Any other status is
    /// left alone.
    pub fn settle(&mut self) {
        let winner = match self.status {
            GameStatus::Win(player) => Some(player),
            GameStatus::Draw => None,
            _ => return,
        };
        self.status = GameStatus::Halted { winner };
    }

    /// Record that the terminal cursor now sits on the cursor's row.
    pub const fn mark_drawn(&mut self) {
        self.cursor.mark_drawn();
    }

    /// Mark the cell under the cursor and look for an outcome.
    fn select(&mut self) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let player = self.board.active_player();
        if !self.board.place(row, col) {
            trace!(row, col, "cell occupied");
            return;
        }
        debug!(%player, row, col, "mark placed");
        self.check_outcome();
    }

    fn check_outcome(&mut self) {
        match rules::outcome(&self.board) {
            Outcome::Win(player) => {
                debug!(%player, "game won");
                self.status = GameStatus::Win(player);
            }
            Outcome::Draw => {
                debug!("game drawn");
                self.status = GameStatus::Draw;
            }
            Outcome::Undecided => {}
        }
    }

    /// Replace board and cursor with fresh ones and resume play.
    fn restart(&mut self) {
        debug!("restarting");
        self.board = Board::new();
        self.cursor = self.cursor.recentered();
        self.status = GameStatus::Playing;
    }
}
