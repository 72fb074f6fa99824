//! Keypad grid for the terminal calculator
//!
//! Buttons can be clicked with the mouse and are highlighted when the
//! matching key is typed. Drawing and hit testing share [`cell_size`], so a
//! click always lands on the button drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keys::{Key, LAYOUT};

/// Keypad rows
pub const ROWS: usize = LAYOUT.len();
/// Keypad columns
pub const COLS: usize = LAYOUT[0].len();

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button for `key`
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    fn style(self) -> Style {
        let base = match self.key {
            Key::Digit(_) | Key::DoubleZero | Key::Decimal => Style::default().fg(Color::White),
            Key::Add | Key::Subtract | Key::Multiply | Key::Divide => {
                Style::default().fg(Color::Yellow)
            }
            Key::OpenParen | Key::CloseParen => Style::default().fg(Color::Cyan),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
        };
        if self.pressed {
            base.fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    fn label(self, width: u16) -> String {
        if width >= 4 {
            format!("[{:^2}]", self.key.label())
        } else {
            self.key.label().to_string()
        }
    }
}

/// Size of one button cell inside `inner`, `None` when a cell would be empty
#[must_use]
pub fn cell_size(inner: Rect) -> Option<(u16, u16)> {
    let width = inner.width / COLS as u16;
    let height = inner.height / ROWS as u16;
    (width > 0 && height > 0).then_some((width, height))
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// The 4x5 keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: [KeypadButton; ROWS * COLS],
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad with nothing highlighted
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = [KeypadButton::new(Key::Clear); ROWS * COLS];
        for (slot, key) in buttons.iter_mut().zip(Key::all()) {
            *slot = KeypadButton::new(key);
        }
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button index for a key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Highlights the button for `key` only
    pub fn highlight(&mut self, key: Key) {
        for button in &mut self.buttons {
            button.pressed = button.key == key;
        }
    }

    /// Iterates over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, button)| ((i / COLS, i % COLS), button))
    }

    /// Index of the button drawn at `(x, y)` when the keypad fills `area`
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner(area);
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let (width, height) = cell_size(inner)?;
        let col = usize::from((x - inner.x) / width);
        let row = usize::from((y - inner.y) / height);
        (row < ROWS && col < COLS).then_some(row * COLS + col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner(area);
        let Some((width, height)) = cell_size(inner) else {
            return;
        };

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let label = button.label(width);
            let x = inner.x + col as u16 * width + width.saturating_sub(label.len() as u16) / 2;
            let y = inner.y + row as u16 * height + height / 2;
            buf.set_span(x, y, &Span::styled(label, button.style()), width);
        }
    }
}
