//! Literal type suffixes.
//!
//! A suffix requests a specific output type for a parsed literal. It is
//! supplied alongside the digit characters, not embedded in them, and is
//! validated against the parsed value's kind at the end of the pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A type suffix attached to a numeric literal.
///
/// Spellings follow the usual C conventions. Upper- and lower-case variants
/// are equivalent, as are the `ull`/`llu` orderings.
///
/// # Example
///
/// ```
/// use litc_num::Suffix;
///
/// assert_eq!("ull".parse::<Suffix>().unwrap(), Suffix::UnsignedLongLong);
/// assert_eq!("LLU".parse::<Suffix>().unwrap(), Suffix::UnsignedLongLong);
/// assert_eq!("".parse::<Suffix>().unwrap(), Suffix::None);
/// assert!("q".parse::<Suffix>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Suffix {
    /// No suffix; the literal keeps its natural parsed type.
    None,
    /// `u` / `U`: unsigned variant of the parsed integer width.
    Unsigned,
    /// `f` / `F`: single-precision float.
    Float,
    /// `ll` / `LL`: 64-bit signed integer.
    LongLong,
    /// `ull` / `ULL` / `llu` / `LLU`: 64-bit unsigned integer.
    UnsignedLongLong,
    /// `l` / `L`: extended-precision float.
    LongDouble,
}

impl Suffix {
    /// Canonical lowercase spelling; empty for `None`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Unsigned => "u",
            Self::Float => "f",
            Self::LongLong => "ll",
            Self::UnsignedLongLong => "ull",
            Self::LongDouble => "l",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suffix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::None),
            "u" | "U" => Ok(Self::Unsigned),
            "f" | "F" => Ok(Self::Float),
            "ll" | "LL" => Ok(Self::LongLong),
            "ull" | "ULL" | "llu" | "LLU" => Ok(Self::UnsignedLongLong),
            "l" | "L" => Ok(Self::LongDouble),
            _ => Err(ParseError::InvalidSuffix(s.to_owned())),
        }
    }
}
