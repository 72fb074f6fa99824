//! Input coordinator: turns key presses into display updates
//!
//! Two observable states:
//!
//! ```text
//!              token / append            =  (Ok)
//!   Normal ────────────────────▶ Normal ◀────────── any
//!     ▲                                             │
//!     │ token (clear, then append) or C            │ =  (Error)
//!     └──────────────────────── ErrorShown ◀───────┘
//! ```
//!
//! The coordinator never fails. Evaluation errors arrive as the sentinel
//! text and are cleared by the next appended token.

use crate::core::{Evaluator, Model, ERROR_MSG};
use crate::display::{DisplaySurface, TextDisplay};
use crate::keys::{Handler, Key};

/// Observable state of the display buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatorState {
    /// Any text other than the error marker
    #[default]
    Normal,
    /// The display shows the error marker
    ErrorShown,
}

/// Mediates between key presses, the display and the evaluation model
#[derive(Debug)]
pub struct InputCoordinator<M = Evaluator, D = TextDisplay> {
    model: M,
    display: D,
}

impl Default for InputCoordinator {
    fn default() -> Self {
        Self::new(Evaluator::new(), TextDisplay::new())
    }
}

impl<M: Model, D: DisplaySurface> InputCoordinator<M, D> {
    /// Creates a coordinator over a model and a display
    #[must_use]
    pub fn new(model: M, display: D) -> Self {
        Self { model, display }
    }

    /// Dispatches a key press to its handler
    pub fn press(&mut self, key: Key) {
        tracing::trace!(key = key.label(), "key pressed");
        match key.handler() {
            Handler::Append(text) => self.build_expression(text),
            Handler::Evaluate => self.commit(),
            Handler::Clear => self.clear(),
        }
    }

    /// Presses each key in order
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    /// Appends `sub_expression`, clearing a shown error first
    pub fn build_expression(&mut self, sub_expression: &str) {
        if self.state() == CoordinatorState::ErrorShown {
            self.display.clear();
        }
        let expression = format!("{}{sub_expression}", self.display.text());
        self.display.set_text(expression);
    }

    /// Evaluates the display and shows the result
    pub fn commit(&mut self) {
        let result = self.model.evaluate(self.display.text());
        tracing::debug!(
            expression = self.display.text(),
            result = result.text(),
            error = result.is_error(),
            "commit"
        );
        self.display.set_text(result.into_text());
    }

    /// Clears the display
    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        if self.display.text() == ERROR_MSG {
            CoordinatorState::ErrorShown
        } else {
            CoordinatorState::Normal
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn text(&self) -> &str {
        self.display.text()
    }

    /// Returns the display
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the evaluation model
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }
}
