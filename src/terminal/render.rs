//! Renderer: Paints the board frame in place with relative cursor motion.
//!
//! # Frame Layout
//!
//! ```text
//! line 0  ┌───┬───┬───┐
//! line 1  │ X │ O │   │ Player 1        <- status
//! line 2  ├───┼───┼───┤ Press `r` ...   <- hint
//! line 3  │   │ X │   │
//! line 4  ├───┼───┼───┤
//! line 5  │   │   │ O │
//! line 6  └───┴───┴───┘
//! ```
//!
//! Every redraw climbs back to line 0 from wherever the terminal cursor was
//! left (the previously drawn cursor row), repaints all seven lines and parks
//! the terminal cursor on the selected cell. Nothing above the frame is ever
//! touched, so earlier scrollback stays intact.

use super::output::{CursorShape, OutputBuffer};
use crate::game::{Board, Cursor, Game, GameStatus, Player, SIZE};

/// Height of a frame in terminal lines.
pub const FRAME_HEIGHT: u16 = 7;

/// Columns between the left edges of adjacent cells.
const CELL_PITCH: u16 = 4;

/// Column of a cell's glyph relative to the cell's left border.
const CELL_OFFSET: u16 = 2;

/// Lines between adjacent cell rows.
const ROW_PITCH: u16 = 2;

const TOP_BORDER: &str = "┌───┬───┬───┐";
const SEPARATOR: &str = "├───┼───┼───┤";
const BOTTOM_BORDER: &str = "└───┴───┴───┘";

/// Hint shown once a game is decided.
pub const RESTART_HINT: &str = "Press `r` to restart";

/// Status line text for a status, or `None` when the previous text stays.
pub fn status_text(status: GameStatus, board: &Board) -> Option<String> {
    match status {
        GameStatus::Playing | GameStatus::ResetRequested => {
            Some(format!("Player {}", board.active_player()))
        }
        GameStatus::Win(winner)
        | GameStatus::Halted {
            winner: Some(winner),
        } => Some(win_text(winner)),
        GameStatus::Draw | GameStatus::Halted { winner: None } => Some("Draw".to_string()),
        GameStatus::ExitRequested => None,
    }
}

/// Hint text shown beside the first separator.
pub const fn hint_text(status: GameStatus) -> &'static str {
    if status.is_finished() {
        RESTART_HINT
    } else {
        ""
    }
}

fn win_text(winner: Player) -> String {
    format!("Player {winner} Wins")
}

/// Terminal column (0-indexed, relative to the frame) of a cell's glyph.
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_column(col: usize) -> u16 {
    CELL_PITCH * col as u16 + CELL_OFFSET
}

/// Terminal line (relative to the frame) of a cell row.
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_line(row: usize) -> u16 {
    ROW_PITCH * row as u16 + 1
}

/// Frame painter.
///
/// Remembers whether a frame is already on screen and the last status text,
/// which the final frame after a quit keeps showing.
#[derive(Debug, Default)]
pub struct Renderer {
    drawn: bool,
    status: String,
}

impl Renderer {
    /// Create a renderer with nothing on screen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame for `game` to `out`.
    ///
    /// The terminal cursor is expected where the previous frame left it, i.e.
    /// on the line of `game.cursor().previous_row()`. Call
    /// [`Game::mark_drawn`] once the frame is flushed.
    pub fn render(&mut self, game: &Game, out: &mut OutputBuffer) {
        self.clear_previous(game.cursor(), out);

        if let Some(text) = status_text(game.status(), game.board()) {
            self.status = text;
        }
        let hint = hint_text(game.status());
        let board = game.board();

        out.write_str(TOP_BORDER);
        out.newline();
        Self::write_cells(board, 0, out);
        out.write_char(' ');
        out.write_str(&self.status);
        out.erase_below();
        out.newline();
        out.write_str(SEPARATOR);
        if !hint.is_empty() {
            out.write_char(' ');
            out.write_str(hint);
        }
        out.erase_below();
        out.newline();
        for row in 1..SIZE {
            Self::write_cells(board, row, out);
            out.newline();
            out.write_str(if row + 1 < SIZE { SEPARATOR } else { BOTTOM_BORDER });
            out.newline();
        }

        Self::place_cursor(game.cursor(), out);
        self.drawn = true;
    }

    /// Leave the frame: park the terminal cursor below it and set `shape`.
    pub fn finish(&self, cursor: &Cursor, shape: CursorShape, out: &mut OutputBuffer) {
        if self.drawn {
            out.cursor_next_line(FRAME_HEIGHT - cell_line(cursor.row()));
        }
        out.cursor_shape(shape);
    }

    /// Climb back to the top line of the frame on screen.
    fn clear_previous(&self, cursor: &Cursor, out: &mut OutputBuffer) {
        if self.drawn {
            out.cursor_previous_line(cell_line(cursor.previous_row()));
            out.erase_line_right();
        } else {
            out.cursor_column(1);
        }
    }

    fn write_cells(board: &Board, row: usize, out: &mut OutputBuffer) {
        out.write_str("│");
        for col in 0..SIZE {
            out.write_char(' ');
            out.write_char(board.get(row, col).glyph());
            out.write_str(" │");
        }
    }

    /// Move from just below the frame onto the selected cell.
    fn place_cursor(cursor: &Cursor, out: &mut OutputBuffer) {
        out.cursor_up(FRAME_HEIGHT - 1);
        out.cursor_down(cell_line(cursor.row()) - 1);
        out.cursor_column(1);
        out.cursor_forward(cell_column(cursor.col()));
    }
}
