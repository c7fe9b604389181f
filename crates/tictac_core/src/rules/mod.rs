//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the AI can probe hypothetical placements with them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_won};
