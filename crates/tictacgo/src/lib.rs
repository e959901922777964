//! TicTacGo - terminal tic-tac-toe.
//!
//! Two people share the keyboard, or one person plays X against a computer
//! opponent at easy, medium or hard strength. Rules and the opponent live in
//! [`tictacgo_core`]; this crate adds configuration, the paced computer
//! turn, a headless simulator and the ratatui front end.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictacgo::run_simulation;
//! use tictacgo_core::Difficulty;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let score = run_simulation(5, Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
//! assert_eq!(score.draws(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod simulate;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use controller::Controller;
pub use simulate::run_simulation;
