//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// 3x3 board, row-major (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from raw squares.
    ///
    /// Any arrangement is accepted, including ones unreachable in legal
    /// play; useful for evaluating contrived positions.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at `cell`, or `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if `cell` is on the board and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns `true` when the cell holds `mark`.
    pub fn holds(&self, cell: usize, mark: Mark) -> bool {
        self.get(cell) == Some(Square::Occupied(mark))
    }

    /// Returns a copy of this board with `mark` written at `cell`.
    ///
    /// Returns `None` if `cell` is out of range or already occupied.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Option<Self> {
        if !self.is_empty(cell) {
            return None;
        }
        let mut next = *self;
        next.squares[cell] = Square::Occupied(mark);
        Some(next)
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&cell| self.is_empty(cell)).collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        CELLS - self.empty_cells().len()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.filled() == CELLS
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Formats the board as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                let symbol = match self.squares[cell] {
                    Square::Empty => (cell + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Three cells that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Creates a line from three cell indices.
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    /// The cell indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Checks if `cell` lies on this line.
    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }

    /// Human-readable name of the line.
    pub fn label(&self) -> &'static str {
        match self.0 {
            [0, 1, 2] => "top row",
            [3, 4, 5] => "middle row",
            [6, 7, 8] => "bottom row",
            [0, 3, 6] => "left column",
            [1, 4, 7] => "center column",
            [2, 5, 8] => "right column",
            [0, 4, 8] => "diagonal",
            [2, 4, 6] => "anti-diagonal",
            _ => "line",
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} ({}-{}-{})", self.label(), a, b, c)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    Playing,
    /// A mark completed a line.
    Won {
        /// The mark holding the line.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Board full, nobody won.
    Draw,
}

impl GameStatus {
    /// Returns `true` once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "Playing"),
            GameStatus::Won { winner, .. } => write!(f, "{} wins!", winner),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}
