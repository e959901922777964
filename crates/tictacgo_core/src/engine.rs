//! Pure game engine for tic-tac-toe.
//!
//! [`GameState`] is an immutable snapshot. [`apply_move`] never touches
//! its input; it either returns the successor snapshot or a
//! [`MoveError`] describing why the move was refused.

use crate::action::MoveError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::{evaluate_status, next_turn};
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::Playing,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// Once the game is over this is the mark that played last.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Most recently played cell, for display emphasis only.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Number of moves played so far.
    pub fn ply(&self) -> usize {
        self.board.filled()
    }

    /// Checks if the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays the current mark at `cell`.
///
/// Checks, in order: the game must not be over ([`MoveError::GameOver`]),
/// then `cell` must be an empty cell in 0-8 ([`MoveError::InvalidCell`]).
/// The mark to move only advances while the game continues.
#[instrument(skip(state), fields(player = %state.to_move, ply = state.ply()))]
pub fn apply_move(state: &GameState, cell: usize) -> Result<GameState, MoveError> {
    if state.is_over() {
        debug!("Move rejected, game over");
        return Err(MoveError::GameOver);
    }

    let mark = state.to_move;
    let board = state.board.with_mark(cell, mark).ok_or_else(|| {
        debug!("Move rejected, cell unavailable");
        MoveError::InvalidCell(cell)
    })?;

    let status = evaluate_status(&board, mark);
    let to_move = if status.is_terminal() {
        mark
    } else {
        next_turn(mark)
    };

    let next = GameState {
        board,
        to_move,
        status,
        last_move: Some(cell),
    };

    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(&next)
    {
        warn!(?violations, "Board invariants violated after move");
        debug_assert!(violations.is_empty(), "Board invariants violated");
    }

    debug!(%status, "Move applied");
    Ok(next)
}

/// Replays `cells` from a fresh game.
#[instrument]
pub fn replay(cells: &[usize]) -> Result<GameState, MoveError> {
    cells
        .iter()
        .try_fold(GameState::new(), |state, &cell| apply_move(&state, cell))
}
