//! Application state for the terminal UI.

use super::input::Action;
use crate::controller::Controller;
use rand::Rng;
use tictacgo_core::{
    COMPUTER_MARK, GameMode, GameSession, GameStatus, MoveError, PlannedMove, Position,
};
use tracing::debug;

/// UI state layered over the controller.
pub struct App<R> {
    controller: Controller<R>,
    cursor: Position,
    notice: String,
    should_quit: bool,
}

impl<R: Rng> App<R> {
    /// Creates the app around a controller.
    pub fn new(controller: Controller<R>) -> Self {
        let notice = start_notice(controller.session());
        Self {
            controller,
            cursor: Position::Center,
            notice,
            should_quit: false,
        }
    }

    /// Underlying controller.
    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Latest one-off notification.
    pub fn notice(&self) -> &str {
        &self.notice
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a key action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Cursor(position) => self.cursor = position,
            Action::Select(cell) => {
                if let Some(position) = Position::from_index(cell) {
                    self.cursor = position;
                }
                match self.controller.select_cell(cell) {
                    Ok(status) => self.notice_status(status),
                    Err(MoveError::InvalidCell(_)) => {
                        self.notice = format!("Cell {} is taken", cell + 1);
                    }
                    Err(MoveError::OutOfTurn) => {
                        self.notice = "Wait for the computer's move".to_string();
                    }
                    Err(MoveError::GameOver) => {
                        self.notice = "Game over. Press 'r' to play again".to_string();
                    }
                    Err(e) => self.notice = e.to_string(),
                }
            }
            Action::NewGame => {
                self.controller.reset();
                self.notice = start_notice(self.controller.session());
            }
            Action::ToggleMode => {
                self.controller.toggle_mode();
                self.notice = start_notice(self.controller.session());
            }
            Action::CycleDifficulty => {
                let difficulty = self.controller.cycle_difficulty();
                self.notice = format!("Difficulty set to {}", difficulty);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Hands a delayed computer move to the controller.
    pub fn handle_computer_move(&mut self, plan: PlannedMove) {
        if let Ok(status) = self.controller.deliver(plan) {
            self.notice_status(status);
        }
    }

    /// One-line summary of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        let session = self.controller.session();
        match session.status() {
            GameStatus::Won { winner, line } => format!("{} wins on the {}!", winner, line.label()),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::Playing if self.controller.is_thinking() => {
                "Computer is thinking...".to_string()
            }
            GameStatus::Playing => {
                let mark = session.state().to_move();
                match session.mode() {
                    GameMode::HumanVsComputer if mark != COMPUTER_MARK => {
                        format!("Your turn ({})", mark)
                    }
                    _ => format!("Player {}'s turn", mark),
                }
            }
        }
    }

    fn notice_status(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won { winner, .. } => {
                self.notice = format!("Player {} wins! Press 'r' to play again", winner);
            }
            GameStatus::Draw => {
                self.notice = "It's a draw! Press 'r' to play again".to_string();
            }
            GameStatus::Playing => {}
        }
    }
}

fn start_notice(session: &GameSession) -> String {
    match session.mode() {
        GameMode::HumanVsComputer => format!(
            "Starting game against the computer ({} difficulty)",
            session.difficulty()
        ),
        GameMode::HumanVsHuman => "Starting a 2-player game. X goes first!".to_string(),
    }
}
