//! Printable summaries of a session, for the headless `play` command.

use crate::controller::{GameController, Scoreboard};
use crate::mode::GameMode;
use derive_new::new;
use serde::Serialize;
use tictac_core::{Difficulty, Outcome, Player};
use tracing::instrument;

/// Serializable view of a controller after a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Snapshot {
    /// Compact board notation, e.g. `XX_/OO_/___`.
    pub board: String,
    /// Player to move (or who moved last, once the game is over).
    pub current_player: Player,
    /// Whether the game has finished.
    pub game_over: bool,
    /// `"X"`, `"O"`, `"Draw"`, or absent while in progress.
    pub winner: Option<String>,
    /// Human-readable status line.
    pub status: String,
    /// Mode the game was played in.
    pub mode: GameMode,
    /// AI difficulty.
    pub difficulty: Difficulty,
    /// Running scores.
    pub scores: Scoreboard,
    /// Moves in play order as `[row, col]`.
    pub history: Vec<[usize; 2]>,
}

impl Snapshot {
    /// Captures the controller's current state.
    #[instrument(skip(game))]
    pub fn capture(game: &GameController) -> Self {
        Self::new(
            game.board().to_string(),
            game.current_player(),
            game.game_over(),
            game.winner().map(|outcome: Outcome| outcome.to_string()),
            game.status_line(),
            game.mode(),
            game.difficulty(),
            game.scores(),
            game.state()
                .history()
                .iter()
                .map(|pos| [pos.row(), pos.col()])
                .collect(),
        )
    }
}

/// Plain-text rendering: numbered grid, status line and scores.
#[instrument(skip(game))]
pub fn render_text(game: &GameController) -> String {
    let scores = game.scores();
    let [x_label, draw_label, o_label] = game.score_labels();
    format!(
        "{}\n\n{}\n{}: {}  {}: {}  {}: {}",
        game.board().display(),
        game.status_line(),
        x_label,
        scores.x_wins(),
        draw_label,
        scores.draws(),
        o_label,
        scores.o_wins(),
    )
}
