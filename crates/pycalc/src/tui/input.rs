//! Keyboard and mouse input mapping

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::keys::Key;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(Key),
    /// The dedicated commit key; same as `=`
    Commit,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Commit,
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Key::Clear),
            _ => KeyAction::None,
        }
    }

    /// Returns the cell of a left-button press, if this is one
    #[must_use]
    pub fn click_position(event: MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
            _ => None,
        }
    }
}
