//! Terminal frontend
//!
//! A bordered display above a 4x5 keypad. Keys are typed or clicked.

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::{run, TerminalGuard};
pub use ui::{keypad_area, render, CalculatorUI};
