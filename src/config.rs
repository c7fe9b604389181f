//! Application configuration.

use crate::mode::GameMode;
use crate::session::SessionDefaults;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::Difficulty;
use tracing::{debug, info, instrument};

/// Settings read from `tictac.toml`, overridable on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Opponent for new sessions.
    mode: GameMode,

    /// AI difficulty for new sessions.
    difficulty: Difficulty,

    /// Cosmetic pause before the computer replies, in milliseconds.
    ai_delay_ms: u64,

    /// Fixed RNG seed for reproducible AI play.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    #[setters(into)]
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The AI's cosmetic pause.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Settings for sessions created under this config.
    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            mode: self.mode,
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
