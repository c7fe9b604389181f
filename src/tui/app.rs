//! Application state and logic.

use super::input::{Command, move_cursor};
use crate::controller::GameController;
use crate::session::{SessionDefaults, SessionId, SessionStore};
use std::time::Duration;
use tictac_core::Position;
use tracing::{debug, instrument};

/// Session the terminal UI plays in.
pub const LOCAL_SESSION: &str = "local";

/// Main application state.
#[derive(Debug)]
pub struct App {
    sessions: SessionStore,
    session_id: SessionId,
    cursor: Position,
    ai_delay: Duration,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(defaults: SessionDefaults, ai_delay: Duration) -> Self {
        Self {
            sessions: SessionStore::new(defaults),
            session_id: LOCAL_SESSION.to_string(),
            cursor: Position::Center,
            ai_delay,
        }
    }

    /// The game being played, created on first use.
    pub fn game(&mut self) -> &mut GameController {
        self.sessions.get_or_create(&self.session_id)
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pause before the computer replies.
    pub fn ai_delay(&self) -> Duration {
        self.ai_delay
    }

    /// Applies a command. Returns `false` when the app should exit.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> bool {
        debug!(?command, "Handling command");

        match command {
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlaceAtCursor => {
                let cursor = self.cursor;
                self.game().make_move(cursor);
            }
            Command::Place(pos) => {
                self.cursor = pos;
                self.game().make_move(pos);
            }
            Command::NewGame => self.game().reset(),
            Command::ToggleMode => {
                let game = self.game();
                let mode = game.mode().toggle();
                game.set_mode(mode);
            }
            Command::CycleDifficulty => {
                let game = self.game();
                let difficulty = game.difficulty().next();
                game.set_difficulty(difficulty);
            }
            Command::Quit => return false,
        }
        true
    }
}
