// Symbol definitions for the Fe front end.
//
// A symbol is a named, typed declaration owned by the scope frame that
// declared it.

use fe_ir::{FeType, SourcePosition};

/// The kind of entity a symbol represents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    /// A mutable binding.
    Variable,
    /// An immutable binding.
    Constant,
    /// A function declaration.
    Function,
    /// A function parameter.
    Parameter,
}

impl SymbolKind {
    /// Get the kind name for display.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
            SymbolKind::Function => "function",
            SymbolKind::Parameter => "parameter",
        }
    }
}

/// A named, typed declaration recorded in a scope.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// The declared name.
    pub name: String,
    /// The declared type.
    pub ty: FeType,
    /// What kind of entity the name refers to.
    pub kind: SymbolKind,
    /// Where the declaration appeared.
    pub declared_at: SourcePosition,
    /// Monotonic declaration sequence number across the whole table.
    /// Breaks suggestion ties in declaration order.
    pub(crate) index: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kind_name() {
        assert_eq!(SymbolKind::Variable.kind_name(), "variable");
        assert_eq!(SymbolKind::Constant.kind_name(), "constant");
        assert_eq!(SymbolKind::Function.kind_name(), "function");
        assert_eq!(SymbolKind::Parameter.kind_name(), "parameter");
    }
}
