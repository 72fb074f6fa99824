//! Numeric values and their display form
//!
//! Integers and floats are kept apart so that `2+3` shows `5` while `4/2`
//! shows `2.0`. Integers are arbitrary precision.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::core::{CalcError, CalcResult};

/// Decimal exponents in this range render positionally, others in
/// scientific notation.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Most decimal digits an integer may have to be read or shown
pub const MAX_INT_DIGITS: usize = 4300;

/// Widest integer, in bits, kept while evaluating
pub const MAX_INT_BITS: u64 = 1 << 20;

/// A calculator value
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Exact integer
    Integer(BigInt),
    /// Floating-point value
    Float(f64),
}

impl Number {
    /// Creates an integer value
    #[must_use]
    pub fn int(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    /// Returns the value as a float
    ///
    /// Integers beyond the float range are an overflow.
    pub fn to_f64(&self) -> CalcResult<f64> {
        match self {
            Self::Integer(n) => n
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or(CalcError::Overflow),
            Self::Float(x) => Ok(*x),
        }
    }

    /// Returns true for exact integers
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the value equals zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Float(x) => *x == 0.0,
        }
    }

    /// Returns true if the value is below zero
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => n.sign() == num_bigint::Sign::Minus,
            Self::Float(x) => *x < 0.0,
        }
    }

    /// Rejects NaN, infinities and integers wider than [`MAX_INT_BITS`]
    pub fn ensure_bounded(self) -> CalcResult<Self> {
        match self {
            Self::Float(x) if x.is_nan() => Err(CalcError::InvalidResult("NaN".into())),
            Self::Float(x) if x.is_infinite() => Err(CalcError::Overflow),
            Self::Integer(ref n) if n.bits() > MAX_INT_BITS => Err(CalcError::Overflow),
            _ => Ok(self),
        }
    }

    /// Rejects integers with more than [`MAX_INT_DIGITS`] decimal digits
    pub fn ensure_displayable(self) -> CalcResult<Self> {
        match self {
            Self::Integer(ref n) if exceeds_digits(n, MAX_INT_DIGITS) => Err(CalcError::Overflow),
            _ => Ok(self),
        }
    }
}

/// Whether `|n|` has more than `limit` decimal digits.
///
/// `2^(bits-1) <= |n| < 2^bits` settles most cases without rendering.
fn exceeds_digits(n: &BigInt, limit: usize) -> bool {
    let bits = n.bits();
    let most = (bits as f64 * std::f64::consts::LOG10_2).ceil() as usize;
    if most <= limit {
        return false;
    }
    let least = (bits.saturating_sub(1) as f64 * std::f64::consts::LOG10_2).floor() as usize + 1;
    if least > limit {
        return true;
    }
    n.magnitude().to_string().len() > limit
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Formats a float with the shortest digits that round-trip.
///
/// Integral values keep a `.0` suffix; very large or very small magnitudes
/// switch to `d.ddde+XX`.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.into();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.5e-5"
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        format!("{sign}{}", positional(&digits, exponent + 1))
    } else {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let exp_abs = exponent.unsigned_abs();
        if tail.is_empty() {
            format!("{sign}{head}e{exp_sign}{exp_abs:02}")
        } else {
            format!("{sign}{head}.{tail}e{exp_sign}{exp_abs:02}")
        }
    }
}

/// Places the decimal point `point` digits into `digits`.
fn positional(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;
    if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else if point >= len {
        format!("{digits}{}.0", "0".repeat((point - len) as usize))
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    }
}
