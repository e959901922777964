//! TicTacGo - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tictacgo::{Cli, Command, GameConfig, run_simulation, tui};
use tictacgo_core::{Difficulty, GameMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tictacgo=debug,tictacgo_core=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            delay_ms,
            config,
        } => run_play(config, mode, difficulty, delay_ms).await,
        Command::Simulate {
            games,
            x_difficulty,
            o_difficulty,
            seed,
        } => run_simulate(games, x_difficulty, o_difficulty, seed),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Run the terminal UI
async fn run_play(
    config_path: PathBuf,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_overrides(mode, difficulty, delay_ms);

    // The terminal owns stdout, so logs go to a file
    let log_path = config.log_file();
    let log_file = File::create(log_path)
        .with_context(|| format!("Failed to open log {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = ?config, "Launching TUI");
    tui::run(config).await
}

/// Run headless computer-vs-computer games
fn run_simulate(
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();

    let score = match seed {
        Some(seed) => {
            info!(seed, "Using seeded RNG");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            run_simulation(games, x_difficulty, o_difficulty, &mut rng)?
        }
        None => {
            let mut rng = StdRng::from_entropy();
            run_simulation(games, x_difficulty, o_difficulty, &mut rng)?
        }
    };

    println!("{} ({} vs {}): {}", games, x_difficulty, o_difficulty, score);
    Ok(())
}
