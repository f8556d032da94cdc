//! Key mapping from terminal events to game controls.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the game, before edge/hold tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// A discrete engine action.
    Act(Action),
    /// Held modifier that switches to the quick descend cadence.
    SoftDrop,
    /// End the outer loop.
    Quit,
}

/// Map a key to its control, ignoring press/release kind.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Control::Act(Action::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Control::Act(Action::MoveRight))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Control::Act(Action::RotateCcw)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Control::Act(Action::RotateCw)),

        // Soft drop
        KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Control::SoftDrop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
