//! Terminal front end.
//!
//! Keys are read on a blocking thread and forwarded over a channel; the
//! main loop selects between keys and delayed computer moves, redrawing
//! after each.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::config::GameConfig;
use crate::controller::Controller;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictacgo_core::GameSession;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), difficulty = %config.difficulty()))]
pub async fn run(config: GameConfig) -> Result<()> {
    info!("Starting TicTacGo TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
) -> Result<()> {
    let session = GameSession::new(*config.mode(), *config.difficulty());
    let rng = StdRng::from_entropy();
    let (controller, mut computer_rx) = Controller::new(session, rng, config.computer_delay());
    let mut app = App::new(controller);

    let mut key_rx = spawn_key_reader();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    info!("Key reader stopped");
                    return Ok(());
                };
                if let Some(action) = action_for(key, app.cursor()) {
                    app.handle_action(action);
                }
            }
            Some(plan) = computer_rx.recv() => {
                debug!(cell = plan.cell, "Computer move ready");
                app.handle_computer_move(plan);
            }
        }

        if app.should_quit() {
            info!(score = %app.controller().session().score(), "User quit");
            return Ok(());
        }
    }
}

/// Reads key presses on a dedicated thread.
///
/// The thread exits once the receiver is dropped.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyCode> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || read_keys(tx));
    rx
}

fn read_keys(tx: mpsc::UnboundedSender<KeyCode>) {
    loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(key.code).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    return;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    return;
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to poll terminal events");
                return;
            }
        }
    }
}
