//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictacgo_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Play at a cell.
    Select(usize),
    /// Start a new game.
    NewGame,
    /// Switch between two-player and computer games.
    ToggleMode,
    /// Cycle computer difficulty.
    CycleDifficulty,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action given the cursor position.
pub fn action_for(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select(cursor.to_index())),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Select(c as usize - '1' as usize)),
        KeyCode::Char('r') | KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('d') => Some(Action::CycleDifficulty),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        let moves = [
            (Position::Center, KeyCode::Up, Position::TopCenter),
            (Position::Center, KeyCode::Right, Position::MiddleRight),
            (Position::BottomLeft, KeyCode::Right, Position::BottomCenter),
        ];
        for (from, key, to) in moves {
            assert_eq!(move_cursor(from, key), to);
        }
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let stuck = [
            (Position::TopLeft, KeyCode::Up),
            (Position::TopLeft, KeyCode::Left),
            (Position::BottomRight, KeyCode::Down),
            (Position::MiddleRight, KeyCode::Right),
        ];
        for (from, key) in stuck {
            assert_eq!(move_cursor(from, key), from);
        }
    }

    #[test]
    fn test_digits_select_cells() {
        let at = Position::Center;
        assert_eq!(action_for(KeyCode::Char('1'), at), Some(Action::Select(0)));
        assert_eq!(action_for(KeyCode::Char('9'), at), Some(Action::Select(8)));
        assert_eq!(action_for(KeyCode::Char('0'), at), None);
    }

    #[test]
    fn test_enter_and_space_select_cursor() {
        let enter = action_for(KeyCode::Enter, Position::BottomLeft);
        let space = action_for(KeyCode::Char(' '), Position::TopRight);
        assert_eq!(enter, Some(Action::Select(6)));
        assert_eq!(space, Some(Action::Select(2)));
    }

    #[test]
    fn test_command_keys() {
        let keys = [
            (KeyCode::Char('r'), Action::NewGame),
            (KeyCode::Char('n'), Action::NewGame),
            (KeyCode::Char('m'), Action::ToggleMode),
            (KeyCode::Char('d'), Action::CycleDifficulty),
            (KeyCode::Char('q'), Action::Quit),
            (KeyCode::Esc, Action::Quit),
        ];
        for (key, action) in keys {
            assert_eq!(action_for(key, Position::Center), Some(action));
        }
    }
}
