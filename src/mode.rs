//! Game mode selection.

use serde::{Deserialize, Serialize};
use tictac_core::Player;

/// Game mode - who is the opponent?
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Human (X) vs the computer (O).
    #[default]
    Ai,
    /// Two humans sharing the board.
    Human,
}

impl GameMode {
    /// Mark the computer plays in AI mode.
    pub const AI_MARK: Player = Player::O;

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Ai => "Human vs AI",
            GameMode::Human => "Human vs Human",
        }
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::Ai => GameMode::Human,
            GameMode::Human => GameMode::Ai,
        }
    }

    /// Whether `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self == GameMode::Ai && player == Self::AI_MARK
    }
}
