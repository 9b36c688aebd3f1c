//! Literal parsing pipeline.
//!
//! Control flow: radix detection, then the integer digit fold, optionally
//! handing off to the fraction and/or exponent scans, then the overflow
//! checkpoint, then suffix validation. Each literal either yields exactly
//! one [`Constant`] or fails with exactly one [`ParseError`].

use litc_num::{Constant, ParseError, ParseResult, Suffix};

use crate::accum::{Accum, Value};
use crate::cursor::Cursor;
use crate::radix::Radix;

/// Parses a numeric literal against a requested suffix.
///
/// The literal is the bare character sequence: optional base prefix, digit
/// body, optional fraction and exponent. The suffix is supplied separately
/// and never appears among the characters.
///
/// # Example
///
/// ```
/// use litc_lex::{parse, Constant, Suffix};
///
/// assert_eq!(parse("0x1A", Suffix::None).unwrap(), Constant::I32(26));
/// assert_eq!(parse("5", Suffix::Unsigned).unwrap(), Constant::U32(5));
/// assert!(parse("3.14", Suffix::Unsigned).is_err());
/// ```
pub fn parse(literal: &str, suffix: Suffix) -> ParseResult<Constant> {
    let value = scan(literal)?;
    apply_suffix(literal, value, suffix)
}

/// Parses a literal with no suffix, keeping its natural type.
///
/// # Example
///
/// ```
/// use litc_lex::{parse_untyped, Constant};
///
/// assert_eq!(parse_untyped("0b101").unwrap(), Constant::I32(5));
/// ```
pub fn parse_untyped(literal: &str) -> ParseResult<Constant> {
    parse(literal, Suffix::None)
}

/// Runs the character-to-value pipeline up to the overflow checkpoint.
fn scan(literal: &str) -> ParseResult<Value> {
    let (radix, body) = Radix::detect(literal);
    LiteralParser::new(body, radix).scan()
}

/// Validates the suffix against the parsed value's kind and produces the
/// final constant. Magnitude never changes here, only representation.
fn apply_suffix(literal: &str, value: Value, suffix: Suffix) -> ParseResult<Constant> {
    match suffix {
        Suffix::None => Ok(value.into_constant()),
        Suffix::Unsigned => match value {
            Value::I32(v) => Ok(Constant::U32(v as u32)),
            Value::I64(v) => Ok(Constant::U64(v as u64)),
            Value::Float(_) => Err(mismatch(value, "unsigned")),
        },
        Suffix::Float => match value {
            Value::Float(v) => Ok(Constant::F32(v as f32)),
            Value::I32(_) | Value::I64(_) => Err(mismatch(value, "float")),
        },
        Suffix::LongLong => match value {
            Value::I32(v) => Ok(Constant::I64(i64::from(v))),
            Value::I64(v) => Ok(Constant::I64(v)),
            Value::Float(_) => Err(mismatch(value, "long long")),
        },
        Suffix::UnsignedLongLong => match value {
            Value::I32(v) => Ok(Constant::U64(v as u64)),
            Value::I64(v) => Ok(Constant::U64(v as u64)),
            Value::Float(_) => Err(mismatch(value, "unsigned")),
        },
        Suffix::LongDouble => match value {
            // Reparse from the start rather than widening the finished
            // value, so the extended result is accumulated at extended
            // precision throughout.
            Value::Float(_) => Ok(Constant::Extended(scan(literal)?.into_float())),
            Value::I32(_) | Value::I64(_) => Err(mismatch(value, "long double")),
        },
    }
}

fn mismatch(value: Value, requested: &'static str) -> ParseError {
    ParseError::TypeMismatch {
        kind: value.kind(),
        requested,
    }
}

/// Scans one literal's digit body in a fixed radix.
struct LiteralParser<'a> {
    cursor: Cursor<'a>,
    radix: Radix,
}

impl<'a> LiteralParser<'a> {
    fn new(body: &'a str, radix: Radix) -> Self {
        Self {
            cursor: Cursor::new(body),
            radix,
        }
    }

    /// Folds the integer digits, handing off at `.` or an exponent marker.
    ///
    /// `e`/`E` is the exponent marker in every radix: in hexadecimal bodies
    /// it never reaches the digit mapper.
    fn scan(mut self) -> ParseResult<Value> {
        if self.cursor.is_at_end() {
            return Err(ParseError::EmptyDigits);
        }
        let mut acc = Accum::start();
        loop {
            match self.cursor.current_char() {
                '.' => {
                    self.cursor.advance();
                    let int_part = acc.finish()?.into_float();
                    return self.scan_fraction(int_part);
                }
                'e' | 'E' => {
                    self.cursor.advance();
                    let mantissa = acc.finish()?.into_float();
                    return self.scan_exponent(mantissa);
                }
                c => {
                    let digit = self.digit(c)?;
                    self.cursor.advance();
                    acc = acc.push_digit(self.radix, digit, self.cursor.is_at_end());
                    if self.cursor.is_at_end() {
                        return acc.finish();
                    }
                }
            }
        }
    }

    /// Accumulates digits after the decimal point.
    ///
    /// Each digit contributes `digit / radix^position`, position starting at
    /// one. A point with no digits after it leaves the integer part as-is,
    /// already reinterpreted as floating.
    fn scan_fraction(&mut self, int_part: f64) -> ParseResult<Value> {
        let base = f64::from(self.radix.value());
        let mut value = int_part;
        let mut divisor = base;
        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                'e' | 'E' => {
                    self.cursor.advance();
                    return self.scan_exponent(value);
                }
                c => {
                    let digit = self.digit(c)?;
                    self.cursor.advance();
                    value += f64::from(digit) / divisor;
                    divisor *= base;
                }
            }
        }
        Ok(Value::Float(value))
    }

    /// Accumulates the exponent after `e`/`E` and applies it.
    ///
    /// An optional leading sign, then at least one digit. Digits fold in the
    /// literal's radix, but the magnitude always scales by powers of ten,
    /// whatever the radix.
    fn scan_exponent(&mut self, value: f64) -> ParseResult<Value> {
        let negative = self.cursor.match_char('-');
        if !negative {
            self.cursor.match_char('+');
        }
        if self.cursor.is_at_end() {
            return Err(ParseError::EmptyExponent);
        }
        let base = self.radix.value() as i32;
        let mut magnitude: i32 = 0;
        while !self.cursor.is_at_end() {
            let digit = self.digit(self.cursor.current_char())?;
            self.cursor.advance();
            // Exponent width is never promoted; a saturated magnitude
            // already scales past the finite float range.
            magnitude = magnitude.saturating_mul(base).saturating_add(digit as i32);
        }
        let scale = 10f64.powi(magnitude);
        Ok(Value::Float(if negative {
            value / scale
        } else {
            value * scale
        }))
    }

    fn digit(&self, c: char) -> ParseResult<u32> {
        self.radix.digit_value(c).ok_or(ParseError::InvalidDigit {
            ch: c,
            radix: self.radix.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litc_num::{FloatClass, IntClass, NumericKind};

    fn parse_num(literal: &str) -> Constant {
        parse_untyped(literal).unwrap()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(parse_num("42"), Constant::I32(42));
        assert_eq!(parse_num("0"), Constant::I32(0));
        assert_eq!(parse_num("123456"), Constant::I32(123456));
    }

    #[test]
    fn test_hex_integer() {
        assert_eq!(parse_num("0x1A"), Constant::I32(26));
        assert_eq!(parse_num("0xff"), Constant::I32(255));
        assert_eq!(parse_num("0X0"), Constant::I32(0));
    }

    #[test]
    fn test_binary_integer() {
        assert_eq!(parse_num("0b101"), Constant::I32(5));
        assert_eq!(parse_num("0B1111"), Constant::I32(15));
    }

    #[test]
    fn test_float() {
        match parse_num("3.14") {
            Constant::F64(v) => assert!((v - 3.14).abs() < 1e-12),
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_point() {
        assert_eq!(parse_num("1."), Constant::F64(1.0));
    }

    #[test]
    fn test_leading_point() {
        match parse_num(".5") {
            Constant::F64(v) => assert!((v - 0.5).abs() < 1e-12),
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_num("1e3"), Constant::F64(1000.0));
        assert_eq!(parse_num("1E3"), Constant::F64(1000.0));
        assert_eq!(parse_num("1e+3"), Constant::F64(1000.0));
    }

    #[test]
    fn test_negative_exponent() {
        match parse_num("1e-3") {
            Constant::F64(v) => assert!((v - 0.001).abs() < 1e-15),
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn test_fraction_with_exponent() {
        match parse_num("2.5e2") {
            Constant::F64(v) => assert!((v - 250.0).abs() < 1e-9),
            other => panic!("expected F64, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_exponent_scales_by_ten() {
        // The marker ends the digit body even in base 16, and the scale is
        // decimal: 0x1e2 is 1 * 10^2.
        assert_eq!(parse_num("0x1e2"), Constant::F64(100.0));
    }

    #[test]
    fn test_binary_exponent_digits_fold_in_radix() {
        // Exponent digits 1,1 fold in base 2 to 3: 5 * 10^3.
        assert_eq!(parse_num("0b101e11"), Constant::F64(5000.0));
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            parse_untyped("12G").unwrap_err(),
            ParseError::InvalidDigit { ch: 'G', radix: 10 }
        );
        assert_eq!(
            parse_untyped("0b12").unwrap_err(),
            ParseError::InvalidDigit { ch: '2', radix: 2 }
        );
        assert_eq!(
            parse_untyped("1.2.3").unwrap_err(),
            ParseError::InvalidDigit { ch: '.', radix: 10 }
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(parse_untyped("").unwrap_err(), ParseError::EmptyDigits);
        assert_eq!(parse_untyped("0x").unwrap_err(), ParseError::EmptyDigits);
        assert_eq!(parse_untyped("0b").unwrap_err(), ParseError::EmptyDigits);
    }

    #[test]
    fn test_empty_exponent() {
        assert_eq!(parse_untyped("1e").unwrap_err(), ParseError::EmptyExponent);
        assert_eq!(parse_untyped("1e+").unwrap_err(), ParseError::EmptyExponent);
        assert_eq!(parse_untyped("2.5E-").unwrap_err(), ParseError::EmptyExponent);
    }

    #[test]
    fn test_sign_only_leads_the_exponent() {
        // A sign anywhere past the first exponent character is not a digit.
        assert_eq!(
            parse_untyped("1e2-3").unwrap_err(),
            ParseError::InvalidDigit { ch: '-', radix: 10 }
        );
    }

    #[test]
    fn test_unsigned_suffix() {
        assert_eq!(parse("5", Suffix::Unsigned).unwrap(), Constant::U32(5));
        assert_eq!(
            parse("2147483648", Suffix::Unsigned).unwrap(),
            Constant::U64(2_147_483_648)
        );
    }

    #[test]
    fn test_unsigned_suffix_rejects_floats() {
        assert_eq!(
            parse("3.14", Suffix::Unsigned).unwrap_err(),
            ParseError::TypeMismatch {
                kind: NumericKind::Floating(FloatClass::Double),
                requested: "unsigned",
            }
        );
    }

    #[test]
    fn test_float_suffix() {
        assert_eq!(parse("2.5", Suffix::Float).unwrap(), Constant::F32(2.5));
        assert_eq!(
            parse("42", Suffix::Float).unwrap_err(),
            ParseError::TypeMismatch {
                kind: NumericKind::Integral(IntClass::I32),
                requested: "float",
            }
        );
    }

    #[test]
    fn test_long_long_suffix() {
        assert_eq!(parse("5", Suffix::LongLong).unwrap(), Constant::I64(5));
        assert_eq!(
            parse("1.5", Suffix::LongLong).unwrap_err(),
            ParseError::TypeMismatch {
                kind: NumericKind::Floating(FloatClass::Double),
                requested: "long long",
            }
        );
    }

    #[test]
    fn test_unsigned_long_long_suffix() {
        assert_eq!(
            parse("5", Suffix::UnsignedLongLong).unwrap(),
            Constant::U64(5)
        );
        assert_eq!(
            parse("1.5", Suffix::UnsignedLongLong).unwrap_err(),
            ParseError::TypeMismatch {
                kind: NumericKind::Floating(FloatClass::Double),
                requested: "unsigned",
            }
        );
    }

    #[test]
    fn test_long_double_suffix() {
        assert_eq!(
            parse("2.5", Suffix::LongDouble).unwrap(),
            Constant::Extended(2.5)
        );
        assert_eq!(
            parse("42", Suffix::LongDouble).unwrap_err(),
            ParseError::TypeMismatch {
                kind: NumericKind::Integral(IntClass::I32),
                requested: "long double",
            }
        );
    }

    #[test]
    fn test_overflow_reported_for_any_suffix() {
        let literal = "92233720368547758071";
        for suffix in [
            Suffix::None,
            Suffix::Unsigned,
            Suffix::Float,
            Suffix::LongLong,
            Suffix::UnsignedLongLong,
            Suffix::LongDouble,
        ] {
            assert_eq!(
                parse(literal, suffix).unwrap_err(),
                ParseError::IntegerOverflow,
                "suffix {suffix:?}"
            );
        }
    }

    #[test]
    fn test_width_as_accumulated() {
        assert_eq!(parse_num("2147483647"), Constant::I32(i32::MAX));
        assert_eq!(parse_num("2147483648"), Constant::I64(2_147_483_648));
        assert_eq!(parse_num("9223372036854775807"), Constant::I64(i64::MAX));
    }
}
