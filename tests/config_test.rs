//! Configuration loading tests.

use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};
use tictac::{AppConfig, GameMode};
use tictac_core::Difficulty;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(dir.path().join("tictac.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.mode(), &GameMode::Ai);
    assert_eq!(config.difficulty(), &Difficulty::Medium);
    assert_eq!(config.ai_delay(), Duration::from_millis(500));
    assert_eq!(config.seed(), &None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("difficulty = \"hard\"\n");
    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config.difficulty(), &Difficulty::Hard);
    assert_eq!(config.mode(), &GameMode::Ai);
    assert_eq!(config.ai_delay_ms(), &500);
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
mode = "human"
difficulty = "easy"
ai_delay_ms = 0
seed = 7
log_file = "logs/game.log"
"#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.mode(), &GameMode::Human);
    assert_eq!(config.difficulty(), &Difficulty::Easy);
    assert_eq!(config.ai_delay(), Duration::ZERO);
    assert_eq!(config.seed(), &Some(7));
    assert_eq!(config.log_file().to_str(), Some("logs/game.log"));

    let defaults = config.session_defaults();
    assert_eq!(defaults.mode, GameMode::Human);
    assert_eq!(defaults.seed, Some(7));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("mode = [\n");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_unknown_difficulty_is_an_error() {
    let file = write_config("difficulty = \"impossible\"\n");
    assert!(AppConfig::load(file.path()).is_err());
}

#[test]
fn test_from_file_requires_the_file() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_setters_override() {
    let config = AppConfig::default()
        .with_mode(GameMode::Human)
        .with_seed(3)
        .with_log_file("other.log");
    assert_eq!(config.mode(), &GameMode::Human);
    assert_eq!(config.seed(), &Some(3));
    assert_eq!(config.log_file().to_str(), Some("other.log"));
}
