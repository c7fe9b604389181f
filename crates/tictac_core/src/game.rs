//! Game state and move application.
//!
//! Invalid moves are not errors here: an occupied square, an out-of-range
//! coordinate or a finished game all leave the state untouched and report
//! [`Placement::Rejected`].

use crate::rules::{has_won, is_full};
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// Row or column outside `0..=2`.
    #[display("Position is off the board")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
    /// The caller is gating turns and it is someone else's move.
    /// Never produced by [`GameState`] itself.
    #[display("It is not {}'s turn", _0)]
    OutOfTurn(Player),
}

/// What a call to [`GameState::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Nothing changed.
    Rejected(Rejection),
    /// Mark placed; the other player is now to move.
    Continue,
    /// Mark placed and the game is over.
    Finished(Outcome),
}

impl Placement {
    /// Whether the move changed the board.
    pub fn accepted(self) -> bool {
        !matches!(self, Placement::Rejected(_))
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Unchanged once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether a line or a full board has ended the game.
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The result, once the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at zero-based `(row, col)`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Placement {
        match Position::from_row_col(row, col) {
            Some(pos) => self.place(pos),
            None => {
                debug!("Rejected move off the board");
                Placement::Rejected(Rejection::OutOfBounds)
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Checks for a win by the mover, then for a full board; otherwise hands
    /// the turn to the opponent.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.game_over() {
            debug!("Rejected move after game over");
            return Placement::Rejected(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Rejected move on occupied square");
            return Placement::Rejected(Rejection::Occupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);

        if has_won(&self.board, player) {
            info!(winner = %player, "Game won");
            self.outcome = Some(Outcome::Won(player));
            return Placement::Finished(Outcome::Won(player));
        }

        if is_full(&self.board) {
            info!("Game drawn");
            self.outcome = Some(Outcome::Draw);
            return Placement::Finished(Outcome::Draw);
        }

        self.current_player = player.opponent();
        Placement::Continue
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert!(state.apply_move(row, col).accepted(), "({row}, {col})");
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(0, 0), Placement::Continue);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.apply_move(1, 1), Placement::Continue);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.history(), &[Position::TopLeft, Position::Center]);
    }

    #[test]
    fn test_completing_top_row_wins() {
        // X X _ / O O _ / _ _ _ with X to move
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(state.board().to_string(), "XX_/OO_/___");

        assert_eq!(
            state.apply_move(0, 2),
            Placement::Finished(Outcome::Won(Player::X))
        );
        assert!(state.game_over());
        assert_eq!(state.winner(), Some(Outcome::Won(Player::X)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (1, 2), (2, 2)],
        );
        assert_eq!(state.apply_move(2, 1), Placement::Finished(Outcome::Draw));
        assert_eq!(state.winner(), Some(Outcome::Draw));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1)]);
        let before = state.clone();

        assert_eq!(
            state.apply_move(1, 1),
            Placement::Rejected(Rejection::Occupied(Position::Center))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_after_game_over_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let before = state.clone();

        assert_eq!(
            state.apply_move(2, 2),
            Placement::Rejected(Rejection::GameOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_move(3, 0),
            Placement::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(state, GameState::new());
    }
}
