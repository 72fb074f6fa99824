//! Arithmetic core: tokenizer, parser, evaluator and number formatting
//!
//! Everything here is pure. Failures are values (`CalcError`), and the
//! evaluator folds them into an [`EvaluationResult`] so nothing escapes to
//! the caller.

pub mod evaluator;
mod number;
mod operations;
pub mod parser;

pub use evaluator::{evaluate, EvaluationResult, Evaluator, Model, ERROR_MSG};
pub use number::Number;
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an expression can fail to produce a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// A character outside the keypad alphabet
    #[error("Unexpected character: '{0}'")]
    InvalidCharacter(char),
    /// Malformed token sequence
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Division, floor division or a negative power of zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit the numeric range
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a real number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}
