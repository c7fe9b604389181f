//! Game controller scenarios: AI replies, turn gating and scores.

use tictac::{GameController, GameMode, Snapshot, render_text};
use tictac_core::{Difficulty, Outcome, Placement, Player, Position, Rejection, Square};

/// X takes the top row while O plays the middle row.
const X_WINS_TOP_ROW: [Position; 5] = [
    Position::TopLeft,
    Position::MiddleLeft,
    Position::TopCenter,
    Position::Center,
    Position::TopRight,
];

fn play_all(game: &mut GameController, moves: &[Position]) {
    for &pos in moves {
        assert!(game.play(pos).accepted(), "{pos}");
    }
}

#[test]
fn test_medium_answers_corner_with_center() {
    let mut game = GameController::seeded(GameMode::Ai, Difficulty::Medium, 7);
    assert_eq!(game.play(Position::TopLeft), Placement::Continue);

    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status_line(), "Your Turn (X)");
}

#[test]
fn test_medium_blocks_the_open_row() {
    let mut game = GameController::seeded(GameMode::Ai, Difficulty::Medium, 7);
    game.play(Position::TopLeft);
    game.play(Position::TopCenter);

    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::O));
}

#[test]
fn test_human_move_ignored_while_ai_is_thinking() {
    let mut game = GameController::seeded(GameMode::Ai, Difficulty::Easy, 3);
    assert_eq!(game.make_move(Position::Center), Placement::Continue);
    assert!(game.ai_turn_pending());
    assert_eq!(game.status_line(), "AI's Turn (O)");

    let before = *game.board();
    assert_eq!(
        game.make_move(Position::TopLeft),
        Placement::Rejected(Rejection::OutOfTurn(Player::O))
    );
    assert_eq!(game.board(), &before);

    assert_eq!(game.play_ai_turn(), Some(Placement::Continue));
    assert!(!game.ai_turn_pending());
    assert_eq!(game.play_ai_turn(), None);
}

#[test]
fn test_win_is_scored_exactly_once() {
    let mut game = GameController::seeded(GameMode::Human, Difficulty::Medium, 1);
    play_all(&mut game, &X_WINS_TOP_ROW);

    assert!(game.game_over());
    assert_eq!(game.winner(), Some(Outcome::Won(Player::X)));
    assert_eq!(game.status_line(), "Player X Wins!");
    assert_eq!(game.scores().x_wins(), 1);

    // Further clicks are no-ops and don't score again
    assert_eq!(
        game.play(Position::BottomLeft),
        Placement::Rejected(Rejection::GameOver)
    );
    assert_eq!(game.scores().x_wins(), 1);
    assert_eq!(game.scores().o_wins(), 0);
    assert_eq!(game.scores().draws(), 0);
}

#[test]
fn test_draw_is_scored() {
    let mut game = GameController::seeded(GameMode::Human, Difficulty::Medium, 1);
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomCenter,
        ],
    );

    assert_eq!(game.winner(), Some(Outcome::Draw));
    assert_eq!(game.status_line(), "Game Over: It's a Draw!");
    assert_eq!(game.scores().draws(), 1);
}

#[test]
fn test_reset_and_settings_keep_scores() {
    let mut game = GameController::seeded(GameMode::Human, Difficulty::Medium, 1);
    play_all(&mut game, &X_WINS_TOP_ROW);

    game.reset();
    assert!(!game.game_over());
    assert_eq!(game.state().history().len(), 0);
    assert_eq!(game.scores().x_wins(), 1);

    game.play(Position::Center);
    game.set_mode(GameMode::Ai);
    assert_eq!(game.mode(), GameMode::Ai);
    assert!(game.board().is_empty(Position::Center));
    assert_eq!(game.current_player(), Player::X);

    game.play(Position::Center);
    game.set_difficulty(Difficulty::Hard);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.state().history().len(), 0);
    assert_eq!(game.scores().x_wins(), 1);
}

#[test]
fn test_ai_games_always_finish_and_score_once() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..20 {
            let mut game = GameController::seeded(GameMode::Ai, difficulty, seed);
            while !game.game_over() {
                let pos = Position::valid_moves(game.board())
                    .into_iter()
                    .next()
                    .expect("live game has an empty square");
                assert!(game.play(pos).accepted());
            }

            let scores = game.scores();
            assert_eq!(scores.x_wins() + scores.o_wins() + scores.draws(), 1);
        }
    }
}

#[test]
fn test_text_report() {
    let mut game = GameController::seeded(GameMode::Ai, Difficulty::Medium, 7);
    game.play(Position::TopLeft);

    let text = render_text(&game);
    assert!(text.starts_with("X|2|3\n-+-+-\n4|O|6"), "{text}");
    assert!(text.contains("Your Turn (X)"));
    assert!(text.ends_with("You (X): 0  Draws: 0  AI (O): 0"), "{text}");
}

#[test]
fn test_json_snapshot() {
    let mut game = GameController::seeded(GameMode::Human, Difficulty::Hard, 1);
    play_all(&mut game, &X_WINS_TOP_ROW);

    let snapshot = Snapshot::capture(&game);
    assert_eq!(snapshot.board, "XXX/OO_/___");
    assert_eq!(snapshot.winner.as_deref(), Some("X"));
    assert_eq!(snapshot.history.len(), 5);
    assert_eq!(snapshot.history[0], [0, 0]);

    let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["mode"], "human");
    assert_eq!(json["difficulty"], "hard");
    assert_eq!(json["game_over"], true);
    assert_eq!(json["scores"]["x_wins"], 1);
}
