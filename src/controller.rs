//! Per-session game controller.
//!
//! Wraps the rules engine with what a front end needs between clicks: the
//! chosen mode and difficulty, a running scoreboard and the AI's turn.

use crate::mode::GameMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictac_core::{
    Board, Difficulty, GameState, Outcome, Placement, Player, Position, Rejection, select_move,
};
use tracing::{debug, info, instrument, warn};

/// Finished games, tallied by result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Games won by X (the human in AI mode).
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O (the computer in AI mode).
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// One player's game: state, settings, scores and the AI's dice.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    scores: Scoreboard,
    rng: StdRng,
}

impl GameController {
    /// Creates a controller with an entropy-seeded AI.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::with_rng(mode, difficulty, StdRng::from_entropy())
    }

    /// Creates a controller whose AI replays the same choices for a seed.
    #[instrument]
    pub fn seeded(mode: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(mode, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            state: GameState::new(),
            mode,
            difficulty,
            scores: Scoreboard::default(),
            rng,
        }
    }

    /// Places the human's mark.
    ///
    /// Ignored while an AI turn is pending; otherwise behaves like
    /// [`GameState::place`] and tallies a finished game.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn make_move(&mut self, pos: Position) -> Placement {
        if self.ai_turn_pending() {
            debug!("Ignoring human move during AI turn");
            return Placement::Rejected(Rejection::OutOfTurn(self.state.current_player()));
        }
        self.apply(pos)
    }

    /// [`make_move`](Self::make_move) by zero-based row and column.
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, row: usize, col: usize) -> Placement {
        match Position::from_row_col(row, col) {
            Some(pos) => self.make_move(pos),
            None => Placement::Rejected(Rejection::OutOfBounds),
        }
    }

    /// True in AI mode while the game is live and the computer is to move.
    pub fn ai_turn_pending(&self) -> bool {
        !self.state.game_over() && self.mode.is_computer(self.state.current_player())
    }

    /// Lets the computer move, if it is its turn.
    ///
    /// Returns `None` when no AI turn was pending.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn play_ai_turn(&mut self) -> Option<Placement> {
        if !self.ai_turn_pending() {
            return None;
        }

        let ai = self.state.current_player();
        let Some(pos) = select_move(self.state.board(), self.difficulty, ai, &mut self.rng) else {
            warn!("AI found no empty square on a live board");
            return None;
        };
        info!(position = %pos, "AI moves");
        Some(self.apply(pos))
    }

    /// Human move followed by the computer's reply, if one is due.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Placement {
        let placement = self.make_move(pos);
        if placement.accepted()
            && let Some(reply) = self.play_ai_turn()
        {
            return reply;
        }
        placement
    }

    /// [`play`](Self::play) by zero-based row and column.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Placement {
        match Position::from_row_col(row, col) {
            Some(pos) => self.play(pos),
            None => Placement::Rejected(Rejection::OutOfBounds),
        }
    }

    /// Starts a fresh game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("New game");
        self.state = GameState::new();
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(%mode, "Mode changed");
        self.mode = mode;
        self.reset();
    }

    /// Switches difficulty and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
        self.reset();
    }

    fn apply(&mut self, pos: Position) -> Placement {
        let placement = self.state.place(pos);
        if let Placement::Finished(outcome) = placement {
            self.scores.record(outcome);
            info!(
                %outcome,
                x = self.scores.x_wins,
                o = self.scores.o_wins,
                draws = self.scores.draws,
                "Score updated"
            );
        }
        placement
    }

    /// The underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Whether the current game has finished.
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Result of the current game, once finished.
    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner()
    }

    /// Running totals across games.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current AI difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// One-line description of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        let ai = self.mode == GameMode::Ai;
        match self.state.winner() {
            Some(Outcome::Draw) => "Game Over: It's a Draw!".to_string(),
            Some(Outcome::Won(Player::X)) if ai => "You Win!".to_string(),
            Some(Outcome::Won(Player::O)) if ai => "AI Wins!".to_string(),
            Some(Outcome::Won(player)) => format!("Player {player} Wins!"),
            None => match self.state.current_player() {
                Player::X if ai => "Your Turn (X)".to_string(),
                Player::O if ai => "AI's Turn (O)".to_string(),
                player => format!("Player {player}'s Turn"),
            },
        }
    }

    /// Scoreboard labels for X, draws and O, in display order.
    pub fn score_labels(&self) -> [&'static str; 3] {
        match self.mode {
            GameMode::Ai => ["You (X)", "Draws", "AI (O)"],
            GameMode::Human => ["Player X", "Draws", "Player O"],
        }
    }
}
