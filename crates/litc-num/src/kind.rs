//! Numeric kind classification.
//!
//! A parsed value is either integral (with a width and signedness class) or
//! floating (with a precision class). The kind only ever moves from integral
//! to floating during a parse, never back.

use std::fmt;

/// Width and signedness class of an integral constant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntClass {
    /// 32-bit signed.
    I32,
    /// 64-bit signed.
    I64,
    /// 32-bit unsigned.
    U32,
    /// 64-bit unsigned.
    U64,
}

/// Precision class of a floating constant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FloatClass {
    /// Single precision (`f` suffix).
    Single,
    /// Double precision, the default for floating literals.
    Double,
    /// Extended precision (`l` suffix).
    Extended,
}

/// Kind of a parsed numeric value.
///
/// # Example
///
/// ```
/// use litc_num::{IntClass, NumericKind};
///
/// let kind = NumericKind::Integral(IntClass::I32);
/// assert!(kind.is_integral());
/// assert!(!kind.is_floating());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericKind {
    /// An integer value.
    Integral(IntClass),
    /// A floating-point value.
    Floating(FloatClass),
}

impl NumericKind {
    /// Returns true for integral kinds.
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Integral(_))
    }

    /// Returns true for floating kinds.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating(_))
    }
}

impl fmt::Display for NumericKind {
    /// Renders the kind's category name as it appears in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integral(_) => "integral type",
            Self::Floating(_) => "floating point",
        })
    }
}
