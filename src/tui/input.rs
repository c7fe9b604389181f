//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use tictac_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a numbered square.
    Place(Position),
    /// Start a new game.
    NewGame,
    /// Switch between vs-AI and vs-human.
    ToggleMode,
    /// Easy, Medium, Hard, Easy, ...
    CycleDifficulty,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command; unbound keys map to `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => digit_position(c).map(Command::Place),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char('m') => Some(Command::ToggleMode),
        KeyCode::Tab => Some(Command::CycleDifficulty),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Squares are numbered 1-9 in reading order, like a phone keypad.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        digit => Position::from_index(digit as usize - 1),
    }
}

/// Moves cursor based on arrow keys, stopping at the board's edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('5'), Some(Position::Center));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Tab), Some(Command::CycleDifficulty));
        assert_eq!(command_for(KeyCode::Enter), Some(Command::PlaceAtCursor));
        assert_eq!(command_for(KeyCode::Char('x')), None);
    }
}
