//! Tic Tac Toe - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictac::{AppConfig, SessionStore, Snapshot, render_text};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Session used by scripted games.
const PLAY_SESSION: &str = "play";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match cli.command {
        Command::Tui { settings } => {
            let config = settings.apply(config);

            // Log to a file so the TUI owns the terminal
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();

            tictac::tui::run_tui(config).await
        }
        Command::Play {
            settings,
            json,
            moves,
        } => {
            // Keep stdout clean for the report
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();

            run_play(settings.apply(config), &moves, json)
        }
    }
}

/// Plays `moves` through one session and prints the outcome.
#[instrument(skip(config))]
fn run_play(config: AppConfig, moves: &[(usize, usize)], json: bool) -> Result<()> {
    info!(mode = %config.mode(), difficulty = %config.difficulty(), "Playing scripted game");

    let mut sessions = SessionStore::new(config.session_defaults());
    let game = sessions.get_or_create(PLAY_SESSION);
    for &(row, col) in moves {
        let placement = game.play_at(row, col);
        info!(row, col, ?placement, "Move played");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&Snapshot::capture(game))?);
    } else {
        println!("{}", render_text(game));
    }
    Ok(())
}
