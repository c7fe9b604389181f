//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Every winning line: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether `player` holds all three cells of some line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}
