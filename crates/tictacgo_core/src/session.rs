//! Owned session state: the current game plus the running score.
//!
//! [`GameSession`] is the only mutable container in the crate. It holds
//! the latest [`GameState`] snapshot and replaces it wholesale on every
//! applied move or reset, so the engine and opponent stay pure.

use crate::action::MoveError;
use crate::engine::{GameState, apply_move};
use crate::opponent::{Difficulty, choose_move};
use crate::score::ScoreBoard;
use crate::types::{Board, GameStatus, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the computer in human-vs-computer games.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Who sits at the board.
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
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the keyboard.
    #[serde(alias = "human", alias = "hvh")]
    #[strum(to_string = "human-vs-human", serialize = "human", serialize = "hvh")]
    HumanVsHuman,
    /// X is human, O is the computer.
    #[default]
    #[serde(alias = "computer", alias = "ai", alias = "hvc")]
    #[strum(
        to_string = "human-vs-computer",
        serialize = "computer",
        serialize = "ai",
        serialize = "hvc"
    )]
    HumanVsComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

/// Identifies the snapshot a decision was made against.
///
/// `round` changes on every reset and `ply` on every applied move, so two
/// equal tickets always refer to the same board and mark to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("round {round}, ply {ply}")]
pub struct MoveTicket {
    /// Games started in this session.
    pub round: u64,
    /// Moves played in the current game.
    pub ply: usize,
}

/// A computer decision waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    /// Snapshot the move was chosen for.
    pub ticket: MoveTicket,
    /// Chosen cell.
    pub cell: usize,
}

/// One sitting at the board: repeated games and their tally.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    difficulty: Difficulty,
    game: GameState,
    score: ScoreBoard,
    round: u64,
}

impl GameSession {
    /// Starts a session with a fresh game and an empty score.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        info!("Starting session");
        Self {
            mode,
            difficulty,
            game: GameState::new(),
            score: ScoreBoard::new(),
            round: 1,
        }
    }

    /// Replaces the game with a fresh one. The score is kept.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn new_game(&mut self) -> &GameState {
        self.game = GameState::new();
        self.round += 1;
        debug!(round = self.round, "New game");
        &self.game
    }

    /// Plays a human move at `cell`.
    ///
    /// Rejected with [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::OutOfTurn`] while the computer is to play, and
    /// [`MoveError::InvalidCell`] for an occupied or out-of-range cell.
    #[instrument(skip(self), fields(ticket = %self.ticket()))]
    pub fn player_move(&mut self, cell: usize) -> Result<GameStatus, MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            warn!("Human move attempted on the computer's turn");
            return Err(MoveError::OutOfTurn);
        }

        let next = apply_move(&self.game, cell)?;
        Ok(self.commit(next))
    }

    /// Chooses and plays the computer's move, returning the cell.
    #[instrument(skip(self, rng), fields(ticket = %self.ticket()))]
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, MoveError> {
        let plan = self.plan_computer_move(rng)?;
        self.apply_planned(plan)?;
        Ok(plan.cell)
    }

    /// Chooses the computer's move without applying it.
    ///
    /// The plan carries the current [`MoveTicket`] and can only be applied
    /// while the session still shows the same snapshot. In human-vs-human
    /// games the plan is for whichever mark is to move.
    #[instrument(skip(self, rng), fields(ticket = %self.ticket()))]
    pub fn plan_computer_move<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PlannedMove, MoveError> {
        if self.game.board().is_full() {
            return Err(MoveError::NoLegalMove);
        }
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::HumanVsComputer && !self.is_computer_turn() {
            return Err(MoveError::OutOfTurn);
        }

        let cell = choose_move(self.game.board(), self.game.to_move(), self.difficulty, rng)?;
        Ok(PlannedMove {
            ticket: self.ticket(),
            cell,
        })
    }

    /// Applies a plan made by [`plan_computer_move`](Self::plan_computer_move).
    ///
    /// Fails with [`MoveError::StaleMove`] if any move or reset happened
    /// since the plan was made.
    #[instrument(skip(self), fields(current = %self.ticket()))]
    pub fn apply_planned(&mut self, plan: PlannedMove) -> Result<GameStatus, MoveError> {
        if plan.ticket != self.ticket() {
            warn!(planned = %plan.ticket, "Discarding stale computer move");
            return Err(MoveError::StaleMove);
        }

        let next = apply_move(&self.game, plan.cell)?;
        Ok(self.commit(next))
    }

    fn commit(&mut self, next: GameState) -> GameStatus {
        self.game = next;
        let status = next.status();
        if status.is_terminal() {
            self.score.record(&status);
            info!(%status, round = self.round, "Game finished");
        }
        status
    }

    /// Identifies the current snapshot.
    pub fn ticket(&self) -> MoveTicket {
        MoveTicket {
            round: self.round,
            ply: self.game.ply(),
        }
    }

    /// Checks if the computer should play next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && !self.game.is_over()
            && self.game.to_move() == COMPUTER_MARK
    }

    /// Current game snapshot.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Most recently played cell.
    pub fn last_move(&self) -> Option<usize> {
        self.game.last_move()
    }

    /// Running score.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Computer difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switches mode and starts a new game. The score is kept.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.new_game();
    }

    /// Changes difficulty; applies from the computer's next decision.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}
