//! Terminal UI: the interactive front end.
//!
//! Every key press mutates the session and the next loop iteration
//! redraws the whole screen.

mod app;
mod input;
mod ui;

pub use app::{App, LOCAL_SESSION};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::controller::GameController;
use input::command_for;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
///
/// Logging must already go somewhere other than the terminal.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!(mode = %config.mode(), difficulty = %config.difficulty(), "Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(config.session_defaults(), config.ai_delay());
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        let cursor = app.cursor();
        let game: &GameController = app.game();
        terminal.draw(|frame| ui::draw(frame, game, cursor))?;

        if game.ai_turn_pending() {
            tokio::time::sleep(app.ai_delay()).await;
            app.game().play_ai_turn();
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(key.code)
            && !app.handle(command)
        {
            info!("User quit");
            return Ok(());
        }
    }
}
