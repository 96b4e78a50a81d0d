//! Board: The 3×3 grid of cells and the player whose turn it is.

use std::fmt;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// One of the two players.
///
/// `First` always opens the game and the players alternate strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    /// Opens every game, marks with `X`.
    #[default]
    First,
    /// Moves second, marks with `O`.
    Second,
}

impl Player {
    /// The player who moves after this one.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Glyph drawn in a cell owned by this player.
    #[inline]
    pub const fn mark(self) -> char {
        match self {
            Self::First => 'X',
            Self::Second => 'O',
        }
    }

    /// Player number shown in the status line.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A single square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by a player. Never reverts except through a full reset.
    Mark(Player),
}

impl Cell {
    /// Check if the cell is still free.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Glyph drawn for this cell.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Mark(player) => player.mark(),
        }
    }
}

/// The 3×3 grid, row-major, plus the active player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    active: Player,
}

impl Board {
    /// Create an empty board with `First` to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The player who will mark the next placed cell.
    #[inline]
    pub const fn active_player(&self) -> Player {
        self.active
    }

    /// Iterate the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }

    /// Mark (row, col) for the active player and hand the turn over.
    ///
    /// Returns `false` and leaves the board untouched if the cell is taken.
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Mark(self.active);
        self.active = self.active.other();
        true
    }

    /// Clear every cell and give the turn back to `First`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }

    /// Check the alternation invariant: `First` leads by zero or one mark.
    pub fn is_well_formed(&self) -> bool {
        let first = self.count(Player::First);
        let second = self.count(Player::Second);
        first == second || first == second + 1
    }

    /// Build a board from explicit cells, bypassing turn order.
    ///
    /// The active player is derived from the mark counts. Used to set up
    /// positions that legal play would reach in many steps (or never).
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        let mut board = Self {
            cells,
            active: Player::First,
        };
        if board.count(Player::First) > board.count(Player::Second) {
            board.active = Player::Second;
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.rows().flatten().all(|cell| cell.is_empty()));
        assert_eq!(board.active_player(), Player::First);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_flips_active_player() {
        let mut board = Board::new();

        assert!(board.place(0, 0));
        assert_eq!(board.get(0, 0), Cell::Mark(Player::First));
        assert_eq!(board.active_player(), Player::Second);

        assert!(board.place(1, 1));
        assert_eq!(board.get(1, 1), Cell::Mark(Player::Second));
        assert_eq!(board.active_player(), Player::First);
    }

    #[test]
    fn test_place_on_occupied_cell_is_ignored() {
        let mut board = Board::new();
        board.place(2, 1);
        let before = board.clone();

        assert!(!board.place(2, 1));
        assert_eq!(board, before);
        assert_eq!(board.active_player(), Player::Second);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        board.place(0, 0);
        board.place(0, 1);
        board.place(0, 2);

        board.reset();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert!(!board.is_full());
                board.place(row, col);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_alternation_invariant_holds_in_play() {
        let mut board = Board::new();
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
            board.place(row, col);
            assert!(board.is_well_formed());
        }
    }

    #[test]
    fn test_from_cells_derives_active_player() {
        let x = Cell::Mark(Player::First);
        let board = Board::from_cells([[x, Cell::Empty, Cell::Empty]; SIZE]);
        assert_eq!(board.active_player(), Player::Second);
        assert!(!board.is_well_formed());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Empty.glyph(), ' ');
        assert_eq!(Cell::Mark(Player::First).glyph(), 'X');
        assert_eq!(Cell::Mark(Player::Second).glyph(), 'O');
        assert_eq!(Player::Second.to_string(), "2");
    }
}
