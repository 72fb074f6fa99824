//! TUI application state

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::keypad_area;
use crate::coordinator::{CoordinatorState, InputCoordinator};
use crate::keys::Key;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    coordinator: InputCoordinator,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.coordinator.text()
    }

    /// Returns the coordinator state
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        self.coordinator.state()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key and highlights its button
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight(key);
        self.coordinator.press(key);
    }

    /// Commits the expression; highlights `=`
    pub fn commit(&mut self) {
        self.keypad.highlight(Key::Equals);
        self.coordinator.commit();
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Commit => self.commit(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the button under a click in a terminal of size `area`
    ///
    /// Returns the key pressed, if the click hit one.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let index = self.keypad.hit_test(keypad_area(area), x, y)?;
        let key = self.keypad.get_button(index)?.key;
        tracing::trace!(x, y, key = key.label(), "keypad click");
        self.press(key);
        Some(key)
    }
}
