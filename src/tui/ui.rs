//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Board, Player, Position, Square};

use crate::controller::GameController;
use crate::mode::GameMode;

const HELP: &str =
    "arrows/1-9 move · enter place · n new game · m mode · tab difficulty · q quit";

/// Renders the whole screen for one frame.
pub fn draw(frame: &mut Frame, game: &GameController, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Settings
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let settings = match game.mode() {
        GameMode::Ai => {
            format!("{} · {}", game.mode().name(), game.difficulty().label())
        }
        GameMode::Human => game.mode().name().to_string(),
    };
    frame.render_widget(
        Paragraph::new(settings)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[1],
    );

    draw_board(frame, chunks[2], game.board(), cursor, !game.game_over());
    draw_scores(frame, chunks[3], game);

    let (status, color) = if game.ai_turn_pending() {
        ("Thinking...".to_string(), Color::Magenta)
    } else if game.game_over() {
        (game.status_line(), Color::Green)
    } else {
        (game.status_line(), Color::Yellow)
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[4]);

    frame.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[5],
    );
}

fn draw_scores(frame: &mut Frame, area: Rect, game: &GameController) {
    let scores = game.scores();
    let [x_label, draw_label, o_label] = game.score_labels();
    let line = Line::from(vec![
        Span::styled(
            format!("{x_label}: {}", scores.x_wins()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   "),
        Span::raw(format!("{draw_label}: {}", scores.draws())),
        Span::raw("   "),
        Span::styled(
            format!("{o_label}: {}", scores.o_wins()),
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score")),
        area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, show_cursor: bool) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in Position::ALL.chunks(3).enumerate() {
        let cursor = show_cursor.then_some(cursor);
        draw_row(frame, rows[i * 2], board, cursor, row);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, cursor, pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell
    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"), Line::raw("│"), Line::raw("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
