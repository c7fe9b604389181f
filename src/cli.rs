//! Command-line interface for tictac.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac::{AppConfig, GameMode};
use tictac_core::Difficulty;

/// Tic Tac Toe - play a friend or a three-tier AI in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Game settings
        #[command(flatten)]
        settings: GameSettings,
    },

    /// Play a scripted game and print the result
    Play {
        /// Game settings
        #[command(flatten)]
        settings: GameSettings,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,

        /// Human moves as zero-based row,col pairs, e.g. `0,0 1,1`
        #[arg(value_parser = parse_coord)]
        moves: Vec<(usize, usize)>,
    },
}

/// Overrides for values from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameSettings {
    /// Opponent: `ai` or `human`
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// AI difficulty: `easy`, `medium` or `hard`
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Seed the AI for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameSettings {
    /// Layers the flags that were given over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got {s:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad coordinate {part:?}: {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}
