//! Move rejection reasons.

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the rejected operation leaves all state
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is occupied or outside 0-8.
    #[display("Cell {} is not an empty cell on the board", _0)]
    InvalidCell(usize),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The computer was asked to move on a full board.
    #[display("No legal move remains")]
    NoLegalMove,

    /// A human tried to move while the computer is to play.
    #[display("It's the computer's turn")]
    OutOfTurn,

    /// A planned move no longer matches the current game.
    #[display("Planned move is stale")]
    StaleMove,
}

impl std::error::Error for MoveError {}
