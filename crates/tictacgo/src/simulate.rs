//! Headless computer-vs-computer games.

use rand::Rng;
use tictacgo_core::{Difficulty, GameMode, GameSession, Mark, MoveError, ScoreBoard};
use tracing::{debug, info, instrument};

/// Plays `games` computer-vs-computer games and returns the tally.
///
/// Both sides share one session, so the score accumulates exactly as it
/// does for interactive play.
#[instrument(skip(rng))]
pub fn run_simulation<R: Rng + ?Sized>(
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut R,
) -> Result<ScoreBoard, MoveError> {
    let mut session = GameSession::new(GameMode::HumanVsHuman, x_difficulty);

    for game in 0..games {
        if game > 0 {
            session.new_game();
        }

        while !session.status().is_terminal() {
            let difficulty = match session.state().to_move() {
                Mark::X => x_difficulty,
                Mark::O => o_difficulty,
            };
            session.set_difficulty(difficulty);
            session.computer_move(rng)?;
        }

        debug!(game, status = %session.status(), "Simulated game finished");
    }

    info!(score = %session.score(), "Simulation complete");
    Ok(*session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tally(games: u32, x: Difficulty, o: Difficulty, seed: u64) -> ScoreBoard {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        run_simulation(games, x, o, &mut rng).unwrap()
    }

    #[test]
    fn test_every_game_is_scored() {
        let score = tally(25, Difficulty::Easy, Difficulty::Medium, 1);
        assert_eq!(score.total(), 25);
    }

    #[test]
    fn test_hard_mirror_match_always_draws() {
        let score = tally(10, Difficulty::Hard, Difficulty::Hard, 2);
        assert_eq!(score.draws(), 10);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let a = tally(30, Difficulty::Easy, Difficulty::Easy, 9);
        let b = tally(30, Difficulty::Easy, Difficulty::Easy, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_games_empty_tally() {
        let score = tally(0, Difficulty::Hard, Difficulty::Hard, 0);
        assert_eq!(score, ScoreBoard::new());
    }
}
