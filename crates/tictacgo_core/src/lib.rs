//! TicTacGo core - pure tic-tac-toe rules and a heuristic opponent.
//!
//! # Architecture
//!
//! - **Engine**: immutable [`GameState`] snapshots; [`apply_move`] returns
//!   the successor or a [`MoveError`]
//! - **Rules**: win/draw detection over the 8 fixed [`WinLine`]s
//! - **Opponent**: difficulty-tuned heuristic ladder with an injected RNG
//! - **Session**: owned container for the current game and running score
//!
//! # Example
//!
//! ```
//! use tictacgo_core::{Difficulty, GameMode, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(GameMode::HumanVsComputer, Difficulty::Hard);
//! assert_eq!(session.player_move(0), Ok(GameStatus::Playing));
//!
//! let cell = session.computer_move(&mut rand::thread_rng()).unwrap();
//! assert_eq!(cell, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod opponent;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::MoveError;
pub use engine::{GameState, apply_move, replay};
pub use opponent::{Difficulty, MEDIUM_RANDOM_ODDS, Rung, choose_move, heuristic_move};
pub use position::Position;
pub use rules::{WIN_LINES, evaluate_status, next_turn, winning_line};
pub use score::ScoreBoard;
pub use session::{COMPUTER_MARK, GameMode, GameSession, MoveTicket, PlannedMove};
pub use types::{Board, CELLS, GameStatus, Mark, Square, WinLine};
