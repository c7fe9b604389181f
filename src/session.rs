//! Per-session game storage.

use crate::controller::GameController;
use crate::mode::GameMode;
use std::collections::HashMap;
use tictac_core::Difficulty;
use tracing::{debug, info, instrument};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Settings applied to every newly created session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionDefaults {
    /// Starting mode.
    pub mode: GameMode,
    /// Starting AI difficulty.
    pub difficulty: Difficulty,
    /// Base RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Owns one [`GameController`] per session, created on first access.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, GameController>,
    defaults: SessionDefaults,
    created: u64,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            sessions: HashMap::new(),
            defaults,
            created: 0,
        }
    }

    /// Returns the session's controller, creating it from the defaults if absent.
    ///
    /// With a base seed, the n-th session created is seeded with `seed + n`.
    #[instrument(skip(self))]
    pub fn get_or_create(&mut self, id: &str) -> &mut GameController {
        let SessionDefaults {
            mode,
            difficulty,
            seed,
        } = self.defaults;
        let created = &mut self.created;

        self.sessions.entry(id.to_string()).or_insert_with(|| {
            let controller = match seed {
                Some(seed) => GameController::seeded(mode, difficulty, seed.wrapping_add(*created)),
                None => GameController::new(mode, difficulty),
            };
            *created += 1;
            info!(session_id = id, %mode, %difficulty, "Created new session");
            controller
        })
    }

    /// Gets a session by ID.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<&GameController> {
        let session = self.sessions.get(id);
        if session.is_none() {
            debug!("Session not found");
        }
        session
    }

    /// Drops a session. Returns it if it existed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Option<GameController> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            info!("Session removed");
        }
        removed
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has been created (or all were removed).
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
