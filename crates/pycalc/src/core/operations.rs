//! Arithmetic on calculator numbers
//!
//! Integer operands stay exact where the operation allows it; mixing in a
//! float, or dividing with `/`, produces a float.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::core::number::MAX_INT_BITS;
use crate::core::{CalcError, CalcResult, Number};

/// Binary operations reachable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// True division (/)
    Divide,
    /// Floor division (//)
    FloorDivide,
    /// Power (**)
    Power,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::FloorDivide => "//",
            Self::Power => "**",
        }
    }
}

/// Stateless arithmetic unit
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Performs an operation on two operands
    pub fn calculate(&self, a: Number, b: Number, op: Operation) -> CalcResult<Number> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
            Operation::FloorDivide => Self::floor_divide(a, b),
            Operation::Power => Self::power(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Number::Integer(x + y).ensure_bounded(),
            (a, b) => Number::Float(a.to_f64()? + b.to_f64()?).ensure_bounded(),
        }
    }

    /// Subtraction: a - b
    pub fn subtract(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Number::Integer(x - y).ensure_bounded(),
            (a, b) => Number::Float(a.to_f64()? - b.to_f64()?).ensure_bounded(),
        }
    }

    /// Multiplication: a * b
    pub fn multiply(a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => {
                if x.bits() + y.bits() > MAX_INT_BITS + 1 {
                    return Err(CalcError::Overflow);
                }
                Number::Integer(x * y).ensure_bounded()
            }
            (a, b) => Number::Float(a.to_f64()? * b.to_f64()?).ensure_bounded(),
        }
    }

    /// Division: a / b, always a float
    pub fn divide(a: Number, b: Number) -> CalcResult<Number> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Number::Float(a.to_f64()? / b.to_f64()?).ensure_bounded()
    }

    /// Floor division: a // b, rounding towards negative infinity
    pub fn floor_divide(a: Number, b: Number) -> CalcResult<Number> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Ok(Number::Integer(x.div_floor(&y))),
            (a, b) => Number::Float(float_floor_div(a.to_f64()?, b.to_f64()?)).ensure_bounded(),
        }
    }

    /// Power: a ** b
    pub fn power(a: Number, b: Number) -> CalcResult<Number> {
        if a.is_zero() && b.is_negative() {
            return Err(CalcError::DivisionByZero);
        }
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) if !y.is_negative() => integer_power(&x, &y),
            (a, b) => Number::Float(a.to_f64()?.powf(b.to_f64()?)).ensure_bounded(),
        }
    }

    /// Negation: -a
    pub fn negate(a: Number) -> CalcResult<Number> {
        match a {
            Number::Integer(x) => Ok(Number::Integer(-x)),
            Number::Float(x) => Ok(Number::Float(-x)),
        }
    }
}

/// Floor division of floats, with the quotient derived from `fmod` so that
/// `1 // 0.1` is `9.0` rather than `floor(1 / 0.1)`.
fn float_floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Non-negative integer power, refusing results wider than [`MAX_INT_BITS`].
fn integer_power(base: &BigInt, exp: &BigInt) -> CalcResult<Number> {
    // 0, 1 and -1 stay small for any exponent
    if base.bits() <= 1 {
        let exp = if exp.is_zero() {
            0
        } else if exp.is_odd() {
            1
        } else {
            2
        };
        return Ok(Number::Integer(base.pow(exp)));
    }
    let exp = exp.to_u32().ok_or(CalcError::Overflow)?;
    if (base.bits() - 1).saturating_mul(u64::from(exp)) > MAX_INT_BITS {
        return Err(CalcError::Overflow);
    }
    Number::Integer(base.pow(exp)).ensure_bounded()
}
