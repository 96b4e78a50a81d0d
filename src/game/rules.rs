//! Outcome detection: three in a row wins, a full board without one is a draw.
//!
//! The eight lines are checked in a fixed order (rows, columns, main
//! diagonal, anti-diagonal) and the first uniform line ends the scan. Board
//! legality is not validated; a position with several winning lines reports
//! the first one found.

use super::board::{Board, Cell, Player, SIZE};

/// Result of inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    Undecided,
    /// The given player filled a line.
    Win(Player),
    /// Every cell is marked and no line is complete.
    Draw,
}

/// A line of three cells as (row, col) pairs.
pub type Line = [(usize, usize); SIZE];

/// Every winning line, in scan order.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Main diagonal
    [(0, 0), (1, 1), (2, 2)],
    // Anti-diagonal
    [(0, 2), (1, 1), (2, 0)],
];

/// Return the owner of `line` if all three cells carry the same mark.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let [(r0, c0), (r1, c1), (r2, c2)] = *line;
    match board.get(r0, c0) {
        Cell::Mark(player)
            if board.get(r1, c1) == Cell::Mark(player) && board.get(r2, c2) == Cell::Mark(player) =>
        {
            Some(player)
        }
        _ => None,
    }
}

/// Find the first complete line and its owner.
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|player| (*line, player)))
}

/// Decide the outcome of a board. A win is always found before a draw is
/// considered.
pub fn outcome(board: &Board) -> Outcome {
    if let Some((_, player)) = winning_line(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Mark(Player::First);
    const O: Cell = Cell::Mark(Player::Second);
    const E: Cell = Cell::Empty;

    fn board_with_line(line: &Line, mark: Cell) -> Board {
        let mut cells = [[E; SIZE]; SIZE];
        for &(row, col) in line {
            cells[row][col] = mark;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_is_undecided() {
        assert_eq!(outcome(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins_for_its_owner() {
        for line in &LINES {
            let board = board_with_line(line, X);
            assert!(!board.is_full());
            assert_eq!(outcome(&board), Outcome::Win(Player::First), "line {line:?}");

            let board = board_with_line(line, O);
            assert_eq!(outcome(&board), Outcome::Win(Player::Second), "line {line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_cells([[X, O, X], [E, E, E], [E, E, E]]);
        assert_eq!(outcome(&board), Outcome::Undecided);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([[X, O, X], [O, X, O], [O, X, O]]);
        assert!(board.is_full());
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_cells([[X, O, X], [O, X, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(outcome(&board), Outcome::Win(Player::First));
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        let board = Board::from_cells([[X, X, X], [E, E, E], [O, O, O]]);
        assert_eq!(winning_line(&board), Some((LINES[0], Player::First)));

        // Row 2 and column 0 are both complete.
        let board = Board::from_cells([[X, E, E], [X, E, E], [X, X, X]]);
        assert_eq!(winning_line(&board), Some((LINES[2], Player::First)));

        // Column 0 and the main diagonal are both complete.
        let board = Board::from_cells([[X, E, E], [X, X, E], [X, E, X]]);
        assert_eq!(winning_line(&board), Some((LINES[3], Player::First)));
    }
}
