//! litc-lex - Numeric literal parsing for litc
//!
//! This crate turns the raw character sequence of a numeric literal, plus a
//! separately-supplied type suffix, into a strongly-typed immutable
//! constant. Malformed input, numeric overflow, and suffix/kind mismatches
//! are all detected before the value is ever usable.
//!
//! # Overview
//!
//! Parsing is a pure function of the input: no I/O, no shared state, and no
//! partial results. Either the whole literal parses into one
//! [`Constant`], or it fails with one [`ParseError`] describing the
//! violated rule. That also makes it trivially safe to parse many literals
//! concurrently.
//!
//! # Grammar
//!
//! ```text
//! literal      := base_prefix? digit_body ('.' frac_digits?)? exponent?
//! base_prefix  := '0x' | '0X' | '0b' | '0B'
//! digit_body   := digit+
//! frac_digits  := digit+
//! exponent     := ('e'|'E') sign? digit+
//! sign         := '+' | '-'
//! ```
//!
//! The digit alphabet depends on the radix: `0-1` for binary, `0-9` for
//! decimal, `0-9 a-f A-F` for hexadecimal. The suffix is an argument to the
//! entry point, not part of the grammar.
//!
//! # Example Usage
//!
//! ```
//! use litc_lex::{parse, parse_untyped, Constant, Suffix};
//!
//! assert_eq!(parse_untyped("0x1A").unwrap(), Constant::I32(26));
//! assert_eq!(parse("1e3", Suffix::None).unwrap(), Constant::F64(1000.0));
//! assert_eq!(parse("5", Suffix::UnsignedLongLong).unwrap(), Constant::U64(5));
//!
//! // Negative literals are the negation of the parsed positive literal.
//! let c = -parse_untyped("5").unwrap();
//! assert_eq!(c, Constant::I32(-5));
//! ```
//!
//! # Module Structure
//!
//! - [`parse`](mod@parse) - The parsing pipeline and entry points
//! - [`accum`] - Digit folding with width promotion and sticky overflow
//! - [`radix`] - Radix detection and digit mapping
//! - [`cursor`] - Character cursor over the digit body

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accum;
pub mod cursor;
mod edge_cases;
pub mod parse;
pub mod radix;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use parse::{parse, parse_untyped};
pub use radix::Radix;

pub use litc_num::{
    Constant, FloatClass, IntClass, NumericKind, ParseError, ParseResult, Suffix,
};
