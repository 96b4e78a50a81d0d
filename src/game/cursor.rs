//! Cursor: The selected cell, moved with wrap-around.

use super::board::SIZE;

const LAST: usize = SIZE - 1;

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up, wrapping from the top row to the bottom.
    Up,
    /// One row down, wrapping from the bottom row to the top.
    Down,
    /// One column left, wrapping from the first column to the last.
    Left,
    /// One column right, wrapping from the last column to the first.
    Right,
}

/// The selected (row, col) plus the row the terminal cursor was last drawn on.
///
/// `previous_row` is rendering bookkeeping only: it tells the renderer how far
/// up the last frame starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    row: usize,
    col: usize,
    previous_row: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// A cursor on the center cell.
    pub const fn new() -> Self {
        Self {
            row: 1,
            col: 1,
            previous_row: 1,
        }
    }

    /// A fresh centered cursor that still remembers where this one was drawn.
    #[must_use]
    pub const fn recentered(&self) -> Self {
        Self {
            previous_row: self.row,
            ..Self::new()
        }
    }

    /// Selected row.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Selected column.
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Row before the latest vertical move.
    #[inline]
    pub const fn previous_row(&self) -> usize {
        self.previous_row
    }

    /// Move one step, wrapping at the edges.
    pub const fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                self.previous_row = self.row;
                self.row = if self.row == 0 { LAST } else { self.row - 1 };
            }
            Direction::Down => {
                self.previous_row = self.row;
                self.row = if self.row == LAST { 0 } else { self.row + 1 };
            }
            Direction::Left => {
                self.col = if self.col == 0 { LAST } else { self.col - 1 };
            }
            Direction::Right => {
                self.col = if self.col == LAST { 0 } else { self.col + 1 };
            }
        }
    }

    /// Record that a frame was drawn with the terminal cursor on `row`.
    pub const fn mark_drawn(&mut self) {
        self.previous_row = self.row;
    }
}
