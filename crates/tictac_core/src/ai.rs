//! Heuristic computer opponent with three difficulty tiers.
//!
//! This is not a minimax player. A perfect opponent can beat Hard in some
//! lines, and Easy ignores threats entirely.

use crate::rules::has_won;
use crate::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty square.
    Easy,
    /// Win, block, center, then random.
    #[default]
    Medium,
    /// Medium's checks plus corner play and a simple fork setup.
    Hard,
}

impl Difficulty {
    /// Capitalised name for menus.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles Easy, Medium, Hard, then back to Easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Chooses the next square for `ai`, or `None` on a full board.
///
/// Ties between equally good squares are broken uniformly at random
/// using `rng`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    rng: &mut R,
) -> Option<Position> {
    let empty = Position::valid_moves(board);
    if empty.is_empty() {
        debug!("No empty squares");
        return None;
    }

    let choice = match difficulty {
        Difficulty::Easy => empty.choose(rng).copied(),
        Difficulty::Medium => win_or_block(board, ai, rng)
            .or_else(|| take_center(board))
            .or_else(|| empty.choose(rng).copied()),
        Difficulty::Hard => win_or_block(board, ai, rng)
            .or_else(|| take_center(board))
            .or_else(|| fork_setup(board, ai))
            .or_else(|| pick_empty(board, &Position::CORNERS, rng))
            .or_else(|| pick_empty(board, &Position::EDGES, rng))
            .or_else(|| empty.choose(rng).copied()),
    };

    debug!(?choice, "AI selected move");
    choice
}

/// Every empty square that would complete a line for `player`.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_moves(board: &Board, player: Player) -> Vec<Position> {
    Position::valid_moves(board)
        .into_iter()
        .filter(|&pos| {
            let mut probe = *board;
            probe.set(pos, Square::Occupied(player));
            has_won(&probe, player)
        })
        .collect()
}

fn win_or_block<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<Position> {
    if let Some(&pos) = winning_moves(board, ai).choose(rng) {
        debug!(position = %pos, "Taking the win");
        return Some(pos);
    }
    if let Some(&pos) = winning_moves(board, ai.opponent()).choose(rng) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }
    None
}

fn take_center(board: &Board) -> Option<Position> {
    board.is_empty(Position::Center).then_some(Position::Center)
}

/// With the center held, one corner of ours and its opposite open:
/// take the opposite corner.
fn fork_setup(board: &Board, ai: Player) -> Option<Position> {
    let mark = Square::Occupied(ai);
    if board.get(Position::Center) != mark {
        return None;
    }

    let mut owned = Position::CORNERS.iter().filter(|&&c| board.get(c) == mark);
    match (owned.next(), owned.next()) {
        (Some(&corner), None) if board.is_empty(corner.opposite()) => {
            debug!(corner = %corner, "Setting up fork across the center");
            Some(corner.opposite())
        }
        _ => None,
    }
}

fn pick_empty<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let open: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    open.choose(rng).copied()
}
