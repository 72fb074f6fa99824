//! pycalc: a keypad calculator
//!
//! A display above a 4x5 keypad. Keys append to the display text, `=`
//! replaces it with its value, `C` clears it. Failed evaluations show
//! `ERROR`, which the next key press replaces.
//!
//! # Layers
//!
//! - [`core`]: tokenizer, parser and evaluator for the keypad alphabet
//! - [`display`] and [`coordinator`]: the display buffer and the key
//!   dispatch around it
//! - [`tui`]: the terminal frontend (feature `tui`)
//! - [`driver`]: one scenario API over the headless and terminal frontends
//!
//! # Example
//!
//! ```rust
//! use pycalc::prelude::*;
//!
//! assert_eq!(evaluate("42*(3+7)").text(), "420");
//! assert_eq!(evaluate("7/2").text(), "3.5");
//! assert!(evaluate("5/0").is_error());
//!
//! let mut calc = InputCoordinator::default();
//! calc.press_all(parse_keys("2+3*4=").unwrap());
//! assert_eq!(calc.text(), "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod core;
pub mod display;
pub mod driver;
pub mod error;
pub mod keys;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, Verbosity};
    pub use crate::coordinator::{CoordinatorState, InputCoordinator};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        evaluate, CalcError, CalcResult, Calculator, EvaluationResult, Evaluator, Model, Number,
        Operation, ERROR_MSG,
    };
    pub use crate::display::{DisplaySurface, TextDisplay};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::keys::{parse_keys, Handler, Key, LAYOUT};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
