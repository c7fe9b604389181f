//! Tic Tac Toe library - sessions, settings and front ends
//!
//! Game rules and the AI live in [`tictac_core`]; this crate adds what a
//! front end needs around them.
//!
//! # Architecture
//!
//! - **Controller**: one game with mode, difficulty, scores and the AI's turn
//! - **Session**: create-if-absent store of controllers keyed by session id
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: interactive terminal front end
//! - **Report**: text and JSON summaries for scripted games
//!
//! # Example
//!
//! ```
//! use tictac::{GameController, GameMode};
//! use tictac_core::{Difficulty, Position};
//!
//! let mut game = GameController::seeded(GameMode::Ai, Difficulty::Medium, 42);
//! game.play(Position::TopLeft);
//!
//! // Medium answers a corner opening with the center
//! assert!(!game.board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod mode;
mod report;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game control
pub use controller::{GameController, Scoreboard};
pub use mode::GameMode;

// Crate-level exports - Session management
pub use session::{SessionDefaults, SessionId, SessionStore};

// Crate-level exports - Reports
pub use report::{Snapshot, render_text};
