//! Core error types for numeric literal parsing
//!
//! This module defines the error taxonomy shared by the parsing pipeline
//! and its consumers. Parsing is fail-fast: the first violation terminates
//! the parse and no partial constant is ever observable.

use thiserror::Error;

use crate::kind::NumericKind;

/// Error produced while turning a literal's characters into a constant.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// A character in the digit body is not a valid digit for the active radix
    #[error("bad character '{ch}' in base-{radix} literal")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Value of the active radix (2, 10, or 16).
        radix: u32,
    },

    /// Folding the final digit of an integer body overflowed a 64-bit value
    #[error("integer literal is too long")]
    IntegerOverflow,

    /// A requested suffix is incompatible with the parsed value's kind
    #[error("{kind} cannot be {requested}")]
    TypeMismatch {
        /// Kind of the value that was actually parsed.
        kind: NumericKind,
        /// Name of the type the suffix requested.
        requested: &'static str,
    },

    /// The literal contains no digits at all
    #[error("literal has no digits")]
    EmptyDigits,

    /// An exponent marker with no digits after it
    #[error("exponent has no digits")]
    EmptyExponent,

    /// A suffix spelling that is not in the suffix table
    #[error("unknown literal suffix `{0}`")]
    InvalidSuffix(String),
}

/// Result type alias for literal parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;
