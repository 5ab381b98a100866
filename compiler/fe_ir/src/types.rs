//! Surface type descriptors.
//!
//! [`FeType`] is the closed set of types semantic analysis can observe.
//! It is a description, not a checker: downstream code compares values
//! structurally and renders them with `Display`.

use std::fmt;

/// A Fe surface type.
///
/// Two function types are equal iff their parameter lists and return
/// types are equal element-wise.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum FeType {
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Real,
    /// Text values.
    String,
    /// Truth values.
    Boolean,
    /// A single character.
    Character,
    /// A function with ordered parameters and a return type.
    Function {
        /// Parameter types, in declaration order.
        params: Vec<FeType>,
        /// The return type.
        ret: Box<FeType>,
    },
}

impl FeType {
    /// Convenience constructor for function types.
    pub fn function(params: Vec<FeType>, ret: FeType) -> Self {
        FeType::Function {
            params,
            ret: Box::new(ret),
        }
    }
}

impl fmt::Display for FeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeType::Integer => write!(f, "integer"),
            FeType::Real => write!(f, "real"),
            FeType::String => write!(f, "string"),
            FeType::Boolean => write!(f, "boolean"),
            FeType::Character => write!(f, "character"),
            FeType::Function { params, ret } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {ret}")
            }
        }
    }
}
