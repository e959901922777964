//! Heuristic computer opponent.
//!
//! The opponent does not search. It walks a fixed priority ladder:
//! win now, block, center, a random corner, a random edge, then any
//! random cell. Difficulty controls how often the ladder is consulted.
//!
//! Randomness is injected as any [`rand::Rng`], so callers decide
//! whether moves are reproducible.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules::evaluate_status;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Odds that a medium opponent plays a purely random cell.
pub const MEDIUM_RANDOM_ODDS: f64 = 0.5;

/// How strongly the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random cells.
    Easy,
    /// Coin flip per move between random and the heuristic ladder.
    #[default]
    Medium,
    /// Always the heuristic ladder.
    Hard,
}

impl Difficulty {
    /// The next tier, wrapping from hard back to easy.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Rung of the heuristic ladder that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Rung {
    /// Completes a line for the computer.
    Win,
    /// Occupies the opponent's winning cell.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free edge.
    Edge,
    /// Any random free cell.
    Fallback,
}

/// Picks a cell for `computer` to play.
///
/// Never returns an occupied cell. Fails with [`MoveError::NoLegalMove`]
/// when the board is full.
#[instrument(skip(board, rng), fields(filled = board.filled()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, MoveError> {
    let cell = match difficulty {
        Difficulty::Easy => random_cell(board, rng)?,
        Difficulty::Medium => {
            if rng.gen_bool(MEDIUM_RANDOM_ODDS) {
                debug!("Medium coin flip chose a random cell");
                random_cell(board, rng)?
            } else {
                heuristic_move(board, computer, rng)?.0
            }
        }
        Difficulty::Hard => heuristic_move(board, computer, rng)?.0,
    };

    debug!(cell, "Computer chose cell");
    Ok(cell)
}

/// Walks the heuristic ladder and reports which rung fired.
///
/// Win and block scan empty cells in ascending order and take the first
/// hit. Corner and edge picks are random among the free cells of that
/// group.
#[instrument(skip(board, rng))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    rng: &mut R,
) -> Result<(usize, Rung), MoveError> {
    let available = board.empty_cells();
    if available.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    if let Some(cell) = completing_cell(board, &available, computer) {
        return Ok((cell, Rung::Win));
    }

    if let Some(cell) = completing_cell(board, &available, computer.opponent()) {
        return Ok((cell, Rung::Block));
    }

    let center = Position::Center.to_index();
    if board.is_empty(center) {
        return Ok((center, Rung::Center));
    }

    if let Some(cell) = random_among(board, &Position::CORNERS, rng) {
        return Ok((cell, Rung::Corner));
    }

    if let Some(cell) = random_among(board, &Position::EDGES, rng) {
        return Ok((cell, Rung::Edge));
    }

    available
        .choose(rng)
        .map(|&cell| (cell, Rung::Fallback))
        .ok_or(MoveError::NoLegalMove)
}

/// First empty cell where `mark` would complete a line.
fn completing_cell(board: &Board, available: &[usize], mark: Mark) -> Option<usize> {
    available
        .iter()
        .copied()
        .find(|&cell| completes_line(board, cell, mark))
}

fn completes_line(board: &Board, cell: usize, mark: Mark) -> bool {
    let Some(next) = board.with_mark(cell, mark) else {
        return false;
    };
    evaluate_status(&next, mark).winner() == Some(mark)
}

fn random_among<R: Rng + ?Sized>(board: &Board, group: &[Position], rng: &mut R) -> Option<usize> {
    let free: Vec<usize> = group
        .iter()
        .map(|pos| pos.to_index())
        .filter(|&cell| board.is_empty(cell))
        .collect();
    free.choose(rng).copied()
}

fn random_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, MoveError> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(MoveError::NoLegalMove)
}
