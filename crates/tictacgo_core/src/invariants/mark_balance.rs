//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::engine::GameState;
use crate::types::{Board, Mark};

/// Invariant: X moves first, so `#X - #O` is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        Self::board_holds(game.board())
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::board_holds(&Board::new()));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board = Board::new().with_mark(0, Mark::O).unwrap();
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        squares[1] = Square::Occupied(Mark::X);
        let board = Board::from_squares(squares);
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }
}
