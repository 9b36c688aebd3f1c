//! litc-num - Numeric domain types for the litc literal parser
//!
//! This crate holds the vocabulary shared by the literal parsing pipeline
//! and its consumers: the typed constant produced by a successful parse,
//! the kind taxonomy that classifies it, the suffix table that requests a
//! concrete output type, and the error taxonomy for everything that can go
//! wrong. It contains no parsing logic; see the `litc-lex` crate for the
//! character-to-value pipeline.
//!
//! # Example
//!
//! ```
//! use litc_num::{Constant, Suffix};
//!
//! let suffix: Suffix = "ull".parse().unwrap();
//! assert_eq!(suffix, Suffix::UnsignedLongLong);
//!
//! let c = Constant::U64(5);
//! assert!(c.is_integral());
//! assert_eq!(-(-c), c);
//! ```
//!
//! # Module Structure
//!
//! - [`constant`] - The immutable (value, type) pair and its negation
//! - [`kind`] - Integral/floating classification with width classes
//! - [`suffix`] - Suffix spellings and their aliases
//! - [`error`] - The fail-fast error taxonomy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constant;
pub mod error;
pub mod kind;
pub mod suffix;

// Re-export main types for convenience
pub use constant::Constant;
pub use error::{ParseError, ParseResult};
pub use kind::{FloatClass, IntClass, NumericKind};
pub use suffix::Suffix;
