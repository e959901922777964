//! Turn consistency invariant: the mark to move follows from the move count.

use super::Invariant;
use crate::engine::GameState;
use crate::types::Mark;

/// Invariant: while playing, X is to move after an even number of moves
/// and O after an odd number.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        if game.is_over() {
            return true;
        }

        let expected = if game.ply() % 2 == 0 { Mark::X } else { Mark::O };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Mark to move matches move count parity"
    }
}
