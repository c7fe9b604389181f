//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A cell on the board, named by its place in the grid.
///
/// Row-major index layout:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge midpoints.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a zero-based row and column.
    ///
    /// Returns `None` unless both are in `0..=2`.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The cell reflected through the center (corner to opposite corner).
    pub fn opposite(self) -> Self {
        Self::ALL[8 - self.to_index()]
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a numbered grid, empty cells showing 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
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

/// Compact notation: three rows of `X`, `O` or `_`, joined by `/`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                f.write_str("/")?;
            }
            match square {
                Square::Empty => f.write_str("_")?,
                Square::Occupied(player) => write!(f, "{player}")?,
            }
        }
        Ok(())
    }
}

/// Malformed board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than `X`, `O`, `_`, `.` or space.
    #[display("Unexpected character {:?} in board notation", _0)]
    InvalidCell(#[error(not(source))] char),
    /// Wrong number of rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(#[error(not(source))] usize),
    /// A row that is not three cells wide.
    #[display("Row {} has {} cells, expected 3", row, len)]
    RowLength {
        /// Zero-based row.
        row: usize,
        /// Cells found.
        len: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != 3 {
                return Err(BoardParseError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, c) in cells.into_iter().enumerate() {
                let square = match c.to_ascii_uppercase() {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    '_' | '.' | ' ' => Square::Empty,
                    other => return Err(BoardParseError::InvalidCell(other)),
                };
                board.squares[row * 3 + col] = square;
            }
        }
        Ok(board)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this player.
    Won(Player),
    /// Full board, no line.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{player}"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}
