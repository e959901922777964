//! Command-line interface for tictacgo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictacgo_core::{Difficulty, GameMode};

/// TicTacGo - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictacgo")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Opponent: human-vs-human or human-vs-computer
        #[arg(long)]
        mode: Option<GameMode>,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to the config file (defaults apply if it is missing)
        #[arg(short, long, default_value = "tictacgo.toml")]
        config: PathBuf,
    },

    /// Play computer-vs-computer games and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strength of the X player
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Strength of the O player
        #[arg(long, default_value = "hard")]
        o_difficulty: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Cli::try_parse_from(line.split_whitespace()).unwrap().command
    }

    #[test]
    fn test_play_defaults() {
        match parse("tictacgo play") {
            Command::Play {
                mode,
                difficulty,
                delay_ms,
                config,
            } => {
                assert_eq!(mode, None);
                assert_eq!(difficulty, None);
                assert_eq!(delay_ms, None);
                assert_eq!(config, PathBuf::from("tictacgo.toml"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_play_overrides_parse() {
        match parse("tictacgo play --mode human -d HARD --delay-ms 0") {
            Command::Play {
                mode,
                difficulty,
                delay_ms,
                ..
            } => {
                assert_eq!(mode, Some(GameMode::HumanVsHuman));
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(delay_ms, Some(0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_simulate_args() {
        match parse("tictacgo simulate -g 10 --o-difficulty easy --seed 3") {
            Command::Simulate {
                games,
                x_difficulty,
                o_difficulty,
                seed,
            } => {
                assert_eq!(games, 10);
                assert_eq!(x_difficulty, Difficulty::Hard);
                assert_eq!(o_difficulty, Difficulty::Easy);
                assert_eq!(seed, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result = Cli::try_parse_from("tictacgo play -d impossible".split_whitespace());
        assert!(result.is_err());
    }
}
