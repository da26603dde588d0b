//! Key mapping from terminal events to move directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a move direction.
///
/// WASD (either case) and the arrow keys. Chords with Ctrl or Alt are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => Direction::from_char(c),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
