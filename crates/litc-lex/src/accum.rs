//! Integer digit accumulation with width promotion and sticky overflow.
//!
//! The accumulator folds digits left to right, widening its representation
//! as the value grows: 32-bit signed, then 64-bit signed, then floating.
//! Transitions are monotonic; a value never narrows back. Overflow past the
//! 64-bit range behaves asymmetrically on purpose: on a non-final digit the
//! value silently degrades to a (lossy) float and accumulation continues,
//! while on the final digit it produces the absorbing [`Accum::Overflow`]
//! sentinel, surfaced as an error at the end-of-parse checkpoint.

use litc_num::{Constant, FloatClass, IntClass, NumericKind, ParseError, ParseResult};

use crate::radix::Radix;

/// Running accumulator state for the integer digit fold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Accum {
    /// Value fits a 32-bit signed integer.
    I32(i32),
    /// Value fits a 64-bit signed integer.
    I64(i64),
    /// Value degraded to floating after overflowing mid-sequence.
    Float(f64),
    /// Overflow sentinel. Absorbing: every further fold yields it again.
    Overflow,
}

impl Accum {
    /// The starting state: zero, in the narrowest width.
    pub fn start() -> Self {
        Self::I32(0)
    }

    /// Folds one digit into the accumulator: `value * radix + digit`, with
    /// promotion when the result outgrows the current width.
    ///
    /// `is_last` marks the final digit of the whole literal. Overflowing the
    /// 64-bit range there yields [`Accum::Overflow`]; anywhere else it falls
    /// back to floating and keeps going.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::accum::Accum;
    /// use litc_lex::radix::Radix;
    ///
    /// let acc = Accum::start()
    ///     .push_digit(Radix::Decimal, 4, false)
    ///     .push_digit(Radix::Decimal, 2, true);
    /// assert_eq!(acc, Accum::I32(42));
    /// ```
    pub fn push_digit(self, radix: Radix, digit: u32, is_last: bool) -> Self {
        let base = i64::from(radix.value());
        match self {
            Self::I32(value) => {
                // A 32-bit value times 16 plus 15 cannot overflow i64.
                let next = i64::from(value) * base + i64::from(digit);
                if next <= i64::from(i32::MAX) {
                    Self::I32(next as i32)
                } else {
                    Self::I64(next)
                }
            }
            Self::I64(value) => {
                match value
                    .checked_mul(base)
                    .and_then(|n| n.checked_add(i64::from(digit)))
                {
                    Some(next) => Self::I64(next),
                    None if is_last => Self::Overflow,
                    None => Self::Float(value as f64 * base as f64 + f64::from(digit)),
                }
            }
            Self::Float(value) => Self::Float(value * base as f64 + f64::from(digit)),
            Self::Overflow => Self::Overflow,
        }
    }

    /// Terminal checkpoint: converts the sentinel into the overflow error
    /// and everything else into a usable [`Value`].
    pub fn finish(self) -> ParseResult<Value> {
        match self {
            Self::I32(v) => Ok(Value::I32(v)),
            Self::I64(v) => Ok(Value::I64(v)),
            Self::Float(v) => Ok(Value::Float(v)),
            Self::Overflow => Err(ParseError::IntegerOverflow),
        }
    }
}

/// A successfully accumulated value, past the overflow checkpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Floating-point value.
    Float(f64),
}

impl Value {
    /// Current value as a float, switching representation permanently.
    pub fn into_float(self) -> f64 {
        match self {
            Self::I32(v) => f64::from(v),
            Self::I64(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// The kind this value has before any suffix is applied.
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::I32(_) => NumericKind::Integral(IntClass::I32),
            Self::I64(_) => NumericKind::Integral(IntClass::I64),
            Self::Float(_) => NumericKind::Floating(FloatClass::Double),
        }
    }

    /// Wraps the value in its natural constant type, as used when no suffix
    /// was supplied.
    pub fn into_constant(self) -> Constant {
        match self {
            Self::I32(v) => Constant::I32(v),
            Self::I64(v) => Constant::I64(v),
            Self::Float(v) => Constant::F64(v),
        }
    }
}
