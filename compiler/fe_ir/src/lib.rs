//! Shared value types for the Fe compiler front end.
//!
//! Everything downstream of the parser speaks in terms of these types:
//! [`SourcePosition`] locates a finding in the source text and [`FeType`]
//! describes the surface type of an expression or declaration. Both are
//! immutable values with structural equality.

mod position;
mod types;

pub use position::SourcePosition;
pub use types::FeType;
