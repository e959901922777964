//! Running tally across games in one session.

use crate::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win and draw counters.
///
/// Counters only ever grow; a fresh tally needs a fresh `ScoreBoard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game.
    ///
    /// Returns `false` and changes nothing for [`GameStatus::Playing`].
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) -> bool {
        match status {
            GameStatus::Playing => return false,
            GameStatus::Won { winner: Mark::X, .. } => self.x_wins += 1,
            GameStatus::Won { winner: Mark::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
        info!(
            x = self.x_wins,
            o = self.o_wins,
            draws = self.draws,
            "Score updated"
        );
        true
    }

    /// Wins for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}  Draws: {}  O wins: {}",
            self.x_wins, self.draws, self.o_wins
        )
    }
}
