//! Type-conversion advice for mismatch diagnostics.
//!
//! A fixed table of conversions the formatter can explain to the user.
//! Pairs not in the table get no advice.

use fe_ir::FeType;

/// Advice for converting `from` into `to`, when the pair is explainable.
pub(crate) fn conversion_advice(from: &FeType, to: &FeType) -> Option<&'static str> {
    match (from, to) {
        (FeType::Integer, FeType::String) => {
            Some("use string interpolation to build a string from the integer")
        }
        (FeType::Real, FeType::Integer) => {
            Some("use explicit casting; the fractional part is truncated")
        }
        (FeType::Integer, FeType::Real) => {
            Some("the integer is automatically converted to real")
        }
        (FeType::Character, FeType::String) => {
            Some("the character is automatically converted to string")
        }
        _ => None,
    }
}
