//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, WinLine};

/// Every winning line, in scan order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new([0, 1, 2]),
    WinLine::new([3, 4, 5]),
    WinLine::new([6, 7, 8]),
    // Columns
    WinLine::new([0, 3, 6]),
    WinLine::new([1, 4, 7]),
    WinLine::new([2, 5, 8]),
    // Diagonals
    WinLine::new([0, 4, 8]),
    WinLine::new([2, 4, 6]),
];

/// Returns the first line fully held by `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| held_by(line, board, mark))
}

fn held_by(line: &WinLine, board: &Board, mark: Mark) -> bool {
    line.cells().iter().all(|&cell| board.holds(cell, mark))
}
