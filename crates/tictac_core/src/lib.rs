//! Tic-tac-toe rules and a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Position`], [`Player`], [`Outcome`]
//! - **Rules**: win and draw detection as pure functions over a board
//! - **Game**: [`GameState`], which applies moves and silently ignores invalid ones
//! - **AI**: [`select_move`] with [`Difficulty`] tiers Easy, Medium and Hard
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictac_core::{Difficulty, GameState, Player, Position, select_move};
//!
//! let mut game = GameState::new();
//! game.apply_move(0, 0);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let reply = select_move(game.board(), Difficulty::Medium, Player::O, &mut rng);
//! assert_eq!(reply, Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
pub mod rules;
mod types;

pub use ai::{Difficulty, select_move, winning_moves};
pub use game::{GameState, Placement, Rejection};
pub use types::{Board, BoardParseError, Outcome, Player, Position, Square};
