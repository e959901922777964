//! Tests for the computer opponent's decision ladder.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictacgo_core::{
    Board, Difficulty, GameState, Mark, MoveError, Rung, Square, apply_move, choose_move,
    heuristic_move,
};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Mark::X);
const O: Square = Square::Occupied(Mark::O);

#[test]
fn test_win_now_completes_center_column() {
    // O holds 4 and 7; only cell 1 completes the center column.
    let board = Board::from_squares([X, E, E, E, O, E, E, O, E]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let cell = choose_move(&board, Mark::O, Difficulty::Hard, &mut rng);
    assert_eq!(cell, Ok(1));
}

#[test]
fn test_block_third_cell_of_line() {
    // X holds the left column top two; O cannot win this turn.
    let board = Board::from_squares([X, E, E, X, O, E, E, E, E]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let (cell, rung) = heuristic_move(&board, Mark::O, &mut rng).unwrap();
    assert_eq!(cell, 6);
    assert_eq!(rung, Rung::Block);
}

#[test]
fn test_center_preferred_on_empty_board() {
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (cell, rung) = heuristic_move(&Board::new(), Mark::O, &mut rng).unwrap();
        assert_eq!((cell, rung), (4, Rung::Center));
    }
}

#[test]
fn test_full_board_reports_no_legal_move() {
    let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        heuristic_move(&board, Mark::O, &mut rng),
        Err(MoveError::NoLegalMove)
    );
}

#[test]
fn test_hard_never_loses_to_itself_as_o() {
    // Hard vs hard from an empty board always ends in a draw.
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = GameState::new();
        while !game.is_over() {
            let mover = game.to_move();
            let cell = choose_move(game.board(), mover, Difficulty::Hard, &mut rng);
            game = apply_move(&game, cell.unwrap()).unwrap();
        }
        assert_eq!(game.status().winner(), None, "seed {seed}");
    }
}

proptest! {
    #[test]
    fn chosen_cell_is_always_empty(
        choices in prop::collection::vec(0usize..9, 0..8),
        seed in any::<u64>(),
        difficulty in prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ],
    ) {
        let mut game = GameState::new();
        for choice in choices {
            if game.is_over() {
                break;
            }
            let empty = game.board().empty_cells();
            game = apply_move(&game, empty[choice % empty.len()]).unwrap();
        }
        prop_assume!(!game.board().is_full());

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cell = choose_move(game.board(), game.to_move(), difficulty, &mut rng).unwrap();
        prop_assert!(game.board().is_empty(cell));
    }
}
