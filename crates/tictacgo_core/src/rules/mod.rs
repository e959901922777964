//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so the computer opponent can probe hypothetical
//! boards with the same terminal-state detector the engine uses.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, winning_line};

use crate::types::{Board, GameStatus, Mark};
use tracing::instrument;

/// Evaluates the board after `last_mark` has played.
///
/// Lines are scanned in [`WIN_LINES`] order, so when a contrived board
/// completes several lines the first listed one is reported. A full board
/// without a line for `last_mark` is a draw.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn evaluate_status(board: &Board, last_mark: Mark) -> GameStatus {
    if let Some(line) = winning_line(board, last_mark) {
        return GameStatus::Won {
            winner: last_mark,
            line,
        };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    }
}

/// The mark to move after `current`.
pub fn next_turn(current: Mark) -> Mark {
    current.opponent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Mark::X);
    const O: Square = Square::Occupied(Mark::O);

    #[test]
    fn test_empty_board_is_playing() {
        assert_eq!(evaluate_status(&Board::new(), Mark::X), GameStatus::Playing);
    }

    #[test]
    fn test_two_lines_reports_first_in_scan_order() {
        // X holds the top row and the left column.
        let board = Board::from_squares([X, X, X, X, O, O, X, O, E]);
        let status = evaluate_status(&board, Mark::X);
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Mark::X,
                line: WIN_LINES[0],
            }
        );
    }

    #[test]
    fn test_full_board_with_two_lines_is_won_not_draw() {
        // X holds the top row and the anti-diagonal on a full board.
        let board = Board::from_squares([X, X, X, O, X, O, X, O, O]);
        let status = evaluate_status(&board, Mark::X);
        assert_eq!(status.winner(), Some(Mark::X));
        assert_eq!(status.line(), Some(WIN_LINES[0]));
    }

    #[test]
    fn test_only_last_mark_is_checked() {
        let board = Board::from_squares([O, O, O, X, X, E, X, E, E]);
        assert_eq!(evaluate_status(&board, Mark::X), GameStatus::Playing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_status(&board, Mark::X), GameStatus::Draw);
    }

    #[test]
    fn test_winning_last_move_on_full_board_is_won() {
        let board = Board::from_squares([X, O, X, O, X, O, O, X, X]);
        let status = evaluate_status(&board, Mark::X);
        assert_eq!(status.line(), Some(WIN_LINES[6]));
    }

    #[test]
    fn test_next_turn_alternates() {
        assert_eq!(next_turn(Mark::X), Mark::O);
        assert_eq!(next_turn(next_turn(Mark::X)), Mark::X);
    }
}
