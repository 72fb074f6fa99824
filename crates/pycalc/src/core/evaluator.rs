//! AST evaluator and the evaluation model contract
//!
//! [`Model`] is the seam between the input coordinator and whatever turns a
//! display string into a result. [`Evaluator`] is the built-in model.

use std::fmt;

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, Calculator, Number};

/// Text shown in the display when evaluation fails
pub const ERROR_MSG: &str = "ERROR";

/// Outcome of evaluating a display string
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// Rendered numeric result
    Ok(String),
    /// Evaluation failed; shown as [`ERROR_MSG`]
    Error(CalcError),
}

impl EvaluationResult {
    /// Returns the text the display should show
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Ok(text) => text,
            Self::Error(_) => ERROR_MSG,
        }
    }

    /// Consumes the result, returning the display text
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Ok(text) => text,
            Self::Error(_) => ERROR_MSG.to_string(),
        }
    }

    /// Returns true if evaluation failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the failure cause, if any
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Ok(_) => None,
            Self::Error(e) => Some(e),
        }
    }
}

impl From<CalcResult<Number>> for EvaluationResult {
    fn from(result: CalcResult<Number>) -> Self {
        match result {
            Ok(value) => Self::Ok(value.to_string()),
            Err(e) => Self::Error(e),
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// An evaluation model: display string in, result out.
///
/// Implementations must not panic; every failure is an
/// [`EvaluationResult::Error`].
pub trait Model {
    /// Evaluates an expression string
    fn evaluate(&self, expression: &str) -> EvaluationResult;
}

impl<F> Model for F
where
    F: Fn(&str) -> EvaluationResult,
{
    fn evaluate(&self, expression: &str) -> EvaluationResult {
        self(expression)
    }
}

/// Evaluator for keypad expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node
    pub fn evaluate_ast(&self, node: &AstNode) -> CalcResult<Number> {
        match node {
            AstNode::Number(n) => n.clone().ensure_bounded(),
            AstNode::Negate(inner) => Calculator::negate(self.evaluate_ast(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate_ast(left)?;
                let right_val = self.evaluate_ast(right)?;
                self.calculator.calculate(left_val, right_val, *op)
            }
        }
    }

    /// Parses and evaluates a string expression
    ///
    /// Integer results too long to display are an overflow.
    pub fn evaluate_str(&self, input: &str) -> CalcResult<Number> {
        let ast = Parser::parse_str(input)?;
        self.evaluate_ast(&ast)?.ensure_displayable()
    }
}

impl Model for Evaluator {
    fn evaluate(&self, expression: &str) -> EvaluationResult {
        let result = self.evaluate_str(expression);
        match &result {
            Ok(value) => tracing::trace!(expression, %value, "evaluated"),
            Err(error) => tracing::debug!(expression, %error, "evaluation failed"),
        }
        result.into()
    }
}

/// Evaluates `expression` with the built-in [`Evaluator`]
#[must_use]
pub fn evaluate(expression: &str) -> EvaluationResult {
    Evaluator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn ok(text: &str) -> EvaluationResult {
        EvaluationResult::Ok(text.to_string())
    }

    // ===== AST evaluation =====

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_ast(&AstNode::integer(42)), Ok(Number::int(42)));
    }

    #[test]
    fn test_evaluate_infinite_literal() {
        let eval = Evaluator::new();
        assert_eq!(
            eval.evaluate_ast(&AstNode::float(f64::INFINITY)),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_evaluate_double_negative() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::negate(AstNode::integer(5)));
        assert_eq!(eval.evaluate_ast(&ast), Ok(Number::int(5)));
    }

    #[test]
    fn test_evaluate_nested_expression() {
        let eval = Evaluator::new();
        let ast = AstNode::binary(
            AstNode::binary(AstNode::integer(1), Operation::Add, AstNode::integer(2)),
            Operation::Multiply,
            AstNode::binary(AstNode::integer(3), Operation::Add, AstNode::integer(4)),
        );
        assert_eq!(eval.evaluate_ast(&ast), Ok(Number::int(21)));
    }

    #[test]
    fn test_evaluate_error_propagates_from_either_side() {
        let eval = Evaluator::new();
        let div_zero = AstNode::binary(AstNode::integer(10), Operation::Divide, AstNode::integer(0));
        let left = AstNode::binary(div_zero.clone(), Operation::Add, AstNode::integer(5));
        let right = AstNode::binary(AstNode::integer(5), Operation::Add, div_zero);
        assert_eq!(eval.evaluate_ast(&left), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_ast(&right), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation =====

    #[test]
    fn test_precedence_respected() {
        assert_eq!(evaluate("2+3*4"), ok("14"));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(1+2)*3"), ok("9"));
    }

    #[test]
    fn test_division_by_zero_is_error() {
        assert_eq!(
            evaluate("5/0"),
            EvaluationResult::Error(CalcError::DivisionByZero)
        );
        assert!(evaluate("5//0").is_error());
        assert!(evaluate("0**-1").is_error());
        assert!(evaluate("5/0.0").is_error());
    }

    #[test]
    fn test_incomplete_expression_is_error() {
        assert!(matches!(
            evaluate("2+"),
            EvaluationResult::Error(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_expression_is_error() {
        assert_eq!(
            evaluate(""),
            EvaluationResult::Error(CalcError::EmptyExpression)
        );
    }

    #[test]
    fn test_float_results() {
        assert_eq!(evaluate("7/2"), ok("3.5"));
        assert_eq!(evaluate("4/2"), ok("2.0"));
        assert_eq!(evaluate("1.5+1.5"), ok("3.0"));
        assert_eq!(evaluate(".1+.2"), ok("0.30000000000000004"));
    }

    #[test]
    fn test_doubled_operators() {
        assert_eq!(evaluate("2**3"), ok("8"));
        assert_eq!(evaluate("2**-1"), ok("0.5"));
        assert_eq!(evaluate("-2**2"), ok("-4"));
        assert_eq!(evaluate("7//2"), ok("3"));
        assert_eq!(evaluate("-7//2"), ok("-4"));
        assert_eq!(evaluate("7.5//2"), ok("3.0"));
    }

    #[test]
    fn test_double_zero_key_output() {
        assert_eq!(evaluate("100"), ok("100"));
        assert_eq!(evaluate("00"), ok("0"));
        assert_eq!(evaluate("000"), ok("0"));
        assert_eq!(evaluate("00.5*2"), ok("1.0"));
        assert_eq!(evaluate("007.5"), ok("7.5"));
    }

    #[test]
    fn test_leading_zero_integer_is_error() {
        assert!(evaluate("07").is_error());
        assert!(evaluate("05+3").is_error());
        assert!(evaluate("2*(03)").is_error());
    }

    #[test]
    fn test_float_floor_division_matches_remainder() {
        assert_eq!(evaluate("1//0.1"), ok("9.0"));
        assert_eq!(evaluate("-7.5//2"), ok("-4.0"));
    }

    #[test]
    fn test_big_integer_results() {
        assert_eq!(
            evaluate("12345678901234567890*98765432109876543210"),
            ok("1219326311370217952237463801111263526900")
        );
        assert_eq!(
            evaluate("10**40"),
            ok("10000000000000000000000000000000000000000")
        );
        let literal = "1234567890123456789012345678901234567890";
        assert_eq!(evaluate(literal), ok(literal));
    }

    #[test]
    fn test_integer_too_long_to_display_is_error() {
        assert_eq!(
            evaluate("10**5000"),
            EvaluationResult::Error(CalcError::Overflow)
        );
        // Intermediate values may be longer than the display allows
        assert_eq!(evaluate("10**5000//10**4990"), ok("10000000000"));
    }

    #[test]
    fn test_scientific_results_evaluate_again() {
        let first = evaluate("10000000000.0*1000000");
        assert_eq!(first, ok("1e+16"));
        assert_eq!(evaluate(first.text()), ok("1e+16"));
    }

    #[test]
    fn test_reevaluating_a_result_is_stable() {
        for expression in ["2+3*4", "7/2", "-7//2", "1/3", "0-0.0", "2**-3"] {
            let first = evaluate(expression);
            assert!(!first.is_error(), "{expression}");
            assert_eq!(evaluate(first.text()), first, "{expression}");
        }
    }

    #[test]
    fn test_non_alphabet_input_is_error() {
        for expression in ["2 + 3", "2^3", "abs(-1)", "1_000", "3%2", "0x10"] {
            assert!(evaluate(expression).is_error(), "{expression}");
        }
    }

    // ===== EvaluationResult =====

    #[test]
    fn test_result_text() {
        assert_eq!(ok("14").text(), "14");
        assert_eq!(
            EvaluationResult::Error(CalcError::DivisionByZero).text(),
            ERROR_MSG
        );
        assert_eq!(
            EvaluationResult::Error(CalcError::Overflow).into_text(),
            "ERROR"
        );
        assert_eq!(ok("3.5").to_string(), "3.5");
    }

    #[test]
    fn test_result_error_accessor() {
        assert_eq!(ok("1").error(), None);
        assert_eq!(
            EvaluationResult::Error(CalcError::Overflow).error(),
            Some(&CalcError::Overflow)
        );
    }

    // ===== Model trait =====

    #[test]
    fn test_closure_is_a_model() {
        let constant = |_: &str| EvaluationResult::Ok("42".into());
        assert_eq!(constant.evaluate("anything"), ok("42"));
    }

    #[test]
    fn test_evaluator_is_a_model() {
        let model: &dyn Model = &Evaluator::new();
        assert_eq!(model.evaluate("6*7"), ok("42"));
    }
}
