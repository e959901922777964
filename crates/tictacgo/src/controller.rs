//! Wires human input and the paced computer move to a [`GameSession`].
//!
//! The computer's move is chosen as soon as it becomes its turn, then held
//! back by a delay so it does not appear instantly. The delay runs as a
//! spawned task bound to the [`MoveTicket`] of the snapshot it was chosen
//! for. Every transition that produces a new snapshot aborts a task whose
//! ticket no longer matches, so a late move can never land on a newer
//! board.

use rand::Rng;
use std::time::Duration;
use tictacgo_core::{
    Difficulty, GameMode, GameSession, GameStatus, MoveError, MoveTicket, PlannedMove,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// A computer move counting down to delivery.
#[derive(Debug)]
struct PendingMove {
    plan: PlannedMove,
    handle: JoinHandle<()>,
}

/// Owns the session and schedules computer moves.
pub struct Controller<R> {
    session: GameSession,
    rng: R,
    delay: Duration,
    pending: Option<PendingMove>,
    ready_tx: mpsc::UnboundedSender<PlannedMove>,
}

impl<R: Rng> Controller<R> {
    /// Creates a controller and the channel on which delayed computer
    /// moves arrive. Feed every received move back to
    /// [`deliver`](Self::deliver).
    ///
    /// Must be called inside a tokio runtime.
    #[instrument(skip_all, fields(mode = %session.mode(), delay_ms = delay.as_millis() as u64))]
    pub fn new(
        session: GameSession,
        rng: R,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PlannedMove>) {
        let (ready_tx, ready_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            session,
            rng,
            delay,
            pending: None,
            ready_tx,
        };
        controller.sync_pending();
        (controller, ready_rx)
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Checks if a computer move is counting down.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the pending computer move, if any.
    pub fn pending_ticket(&self) -> Option<MoveTicket> {
        self.pending.as_ref().map(|p| p.plan.ticket)
    }

    /// Human clicked `cell`.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, cell: usize) -> Result<GameStatus, MoveError> {
        let result = self.session.player_move(cell);
        match &result {
            Ok(status) => debug!(%status, "Human move applied"),
            Err(e) => debug!(error = %e, "Human move ignored"),
        }
        self.sync_pending();
        result
    }

    /// Starts a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.new_game();
        self.sync_pending();
    }

    /// Switches between human and computer opponents (starts a new game).
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.session.mode().toggle();
        self.session.set_mode(mode);
        self.sync_pending();
        mode
    }

    /// Moves to the next difficulty tier.
    ///
    /// A move already chosen under the old tier is discarded and chosen
    /// again.
    #[instrument(skip(self))]
    pub fn cycle_difficulty(&mut self) -> Difficulty {
        let difficulty = self.session.difficulty().cycle();
        self.session.set_difficulty(difficulty);
        self.cancel_pending();
        self.sync_pending();
        difficulty
    }

    /// Applies a computer move that finished its delay.
    ///
    /// Moves that are not the current pending move, or whose ticket no
    /// longer matches the session, are dropped with
    /// [`MoveError::StaleMove`].
    #[instrument(skip(self), fields(ticket = %plan.ticket, cell = plan.cell))]
    pub fn deliver(&mut self, plan: PlannedMove) -> Result<GameStatus, MoveError> {
        let expected = self.pending.as_ref().is_some_and(|p| p.plan == plan);
        if !expected {
            warn!("Dropping computer move that is no longer pending");
            return Err(MoveError::StaleMove);
        }

        self.pending = None;
        let result = self.session.apply_planned(plan);
        if let Ok(status) = &result {
            info!(%status, "Computer move applied");
        }
        self.sync_pending();
        result
    }

    /// Re-checks the pending move against the session.
    ///
    /// Aborts a pending move for an outdated ticket, and schedules one when
    /// the computer is to play and nothing is pending.
    fn sync_pending(&mut self) {
        let current = self.session.ticket();
        let outdated = self
            .pending
            .as_ref()
            .is_some_and(|p| p.plan.ticket != current);
        if outdated {
            self.cancel_pending();
        }

        if self.pending.is_some() || !self.session.is_computer_turn() {
            return;
        }

        match self.session.plan_computer_move(&mut self.rng) {
            Ok(plan) => self.schedule(plan),
            Err(e) => warn!(error = %e, "Computer could not plan a move"),
        }
    }

    fn schedule(&mut self, plan: PlannedMove) {
        debug!(
            ticket = %plan.ticket,
            cell = plan.cell,
            delay_ms = self.delay.as_millis() as u64,
            "Scheduling computer move"
        );
        let tx = self.ready_tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(plan).is_err() {
                debug!("Controller gone before computer move was delivered");
            }
        });
        self.pending = Some(PendingMove { plan, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = %pending.plan.ticket, "Cancelling pending computer move");
            pending.handle.abort();
        }
    }
}

impl<R> Drop for Controller<R> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tictacgo_core::Mark;
    use tokio::time::{Instant, timeout};

    const DELAY: Duration = Duration::from_millis(600);

    fn controller(
        mode: GameMode,
    ) -> (Controller<ChaCha8Rng>, mpsc::UnboundedReceiver<PlannedMove>) {
        Controller::new(
            GameSession::new(mode, Difficulty::Hard),
            ChaCha8Rng::seed_from_u64(17),
            DELAY,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_move_arrives_after_delay() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsComputer);
        assert!(!controller.is_thinking());

        controller.select_cell(0).unwrap();
        assert!(controller.is_thinking());

        let started = Instant::now();
        let plan = rx.recv().await.unwrap();
        assert!(started.elapsed() >= DELAY);
        assert_eq!(plan.cell, 4);

        assert_eq!(controller.deliver(plan), Ok(GameStatus::Playing));
        assert!(controller.session().board().holds(4, Mark::O));
        assert!(!controller.is_thinking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_move() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsComputer);
        controller.select_cell(0).unwrap();
        assert!(controller.is_thinking());

        controller.reset();
        assert!(!controller.is_thinking());

        let waited = timeout(DELAY * 4, rx.recv()).await;
        assert!(waited.is_err(), "cancelled move must never be sent");
        assert_eq!(controller.session().board().filled(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_delivery_is_dropped() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsComputer);
        controller.select_cell(0).unwrap();
        let plan = rx.recv().await.unwrap();

        controller.reset();
        assert_eq!(controller.deliver(plan), Err(MoveError::StaleMove));
        assert_eq!(controller.session().board().filled(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_human_input_ignored_while_computer_thinks() {
        let (mut controller, _rx) = controller(GameMode::HumanVsComputer);
        controller.select_cell(0).unwrap();
        let ticket = controller.pending_ticket();

        assert_eq!(controller.select_cell(1), Err(MoveError::OutOfTurn));
        assert_eq!(controller.pending_ticket(), ticket);
    }

    #[tokio::test(start_paused = true)]
    async fn test_difficulty_change_replans() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsComputer);
        controller.select_cell(0).unwrap();

        assert_eq!(controller.cycle_difficulty(), Difficulty::Easy);
        assert!(controller.is_thinking());

        let plan = rx.recv().await.unwrap();
        assert!(controller.deliver(plan).is_ok());
        assert_eq!(controller.session().board().filled(), 2);
        assert_eq!(controller.session().difficulty(), Difficulty::Easy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_player_mode_never_schedules() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsHuman);
        controller.select_cell(0).unwrap();
        assert!(!controller.is_thinking());
        controller.select_cell(4).unwrap();
        assert!(timeout(DELAY * 2, rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_mode_cancels_and_restarts() {
        let (mut controller, mut rx) = controller(GameMode::HumanVsComputer);
        controller.select_cell(0).unwrap();

        assert_eq!(controller.toggle_mode(), GameMode::HumanVsHuman);
        assert!(!controller.is_thinking());
        assert!(timeout(DELAY * 2, rx.recv()).await.is_err());
        assert_eq!(controller.session().board().filled(), 0);
    }
}
