//! Core diagnostic types for semantic analysis.
//!
//! Defines [`SemanticError`] and [`SemanticWarning`] — the closed set of
//! findings the analysis passes can report. Variants compare by value;
//! the reporter deliberately does *not* use that equality for
//! deduplication (acceptance is keyed on source position alone).

use fe_ir::{FeType, SourcePosition};

/// Broad category of a semantic error, used for the reporter's
/// categorized views.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCategory {
    /// Type and array-index mismatches.
    Type,
    /// Name visibility and assignment-target problems.
    Scope,
    /// Function declaration and arity problems.
    Function,
    /// Control-flow findings and the overflow sentinel.
    Flow,
}

/// A semantic error discovered during analysis.
///
/// Every variant carries the position it points at, except the
/// [`TooManyErrors`](SemanticError::TooManyErrors) sentinel the reporter
/// synthesizes when its error limit is reached.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SemanticError {
    /// An expression's type does not match what the context expects.
    TypeMismatch {
        /// The type the context expects.
        expected: FeType,
        /// The type the expression actually has.
        actual: FeType,
        /// Where the mismatch occurred.
        at: SourcePosition,
    },
    /// An array subscript has a non-integer type.
    ArrayIndexTypeMismatch {
        /// The index type arrays require.
        expected: FeType,
        /// The type the subscript actually has.
        actual: FeType,
        /// Where the subscript occurred.
        at: SourcePosition,
    },
    /// A variable was used with no visible declaration.
    UndeclaredVariable {
        /// The unresolved name.
        name: String,
        /// Where the use occurred.
        at: SourcePosition,
    },
    /// A function was called with no visible declaration.
    UndeclaredFunction {
        /// The unresolved name.
        name: String,
        /// Where the call occurred.
        at: SourcePosition,
    },
    /// A call passes the wrong number of arguments.
    IncorrectArgumentCount {
        /// The function being called.
        function: String,
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments the call supplies.
        actual: usize,
        /// Where the call occurred.
        at: SourcePosition,
    },
    /// A function name was declared twice in one scope.
    FunctionAlreadyDeclared {
        /// The redeclared name.
        name: String,
        /// Where the redeclaration occurred.
        at: SourcePosition,
    },
    /// A constant appears as an assignment target.
    ConstantReassignment {
        /// The constant's name.
        name: String,
        /// Where the assignment occurred.
        at: SourcePosition,
    },
    /// The left side of an assignment is not assignable.
    InvalidAssignmentTarget {
        /// Where the assignment occurred.
        at: SourcePosition,
    },
    /// A `break` statement outside any loop.
    BreakOutsideLoop {
        /// Where the statement occurred.
        at: SourcePosition,
    },
    /// Declarations form a dependency cycle.
    CyclicDependency {
        /// The names along the cycle, in discovery order.
        chain: Vec<String>,
        /// Where the cycle was detected.
        at: SourcePosition,
    },
    /// Sentinel synthesized by the reporter when the error limit is hit.
    /// Carries the configured limit, not the attempted count.
    TooManyErrors {
        /// The limit that was reached.
        count: usize,
    },
}

impl SemanticError {
    /// The position this error points at, if it has one.
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            SemanticError::TypeMismatch { at, .. }
            | SemanticError::ArrayIndexTypeMismatch { at, .. }
            | SemanticError::UndeclaredVariable { at, .. }
            | SemanticError::UndeclaredFunction { at, .. }
            | SemanticError::IncorrectArgumentCount { at, .. }
            | SemanticError::FunctionAlreadyDeclared { at, .. }
            | SemanticError::ConstantReassignment { at, .. }
            | SemanticError::InvalidAssignmentTarget { at }
            | SemanticError::BreakOutsideLoop { at }
            | SemanticError::CyclicDependency { at, .. } => Some(*at),
            SemanticError::TooManyErrors { .. } => None,
        }
    }

    /// Sort key: positioned errors sort by position, the sentinel last.
    pub fn sort_position(&self) -> SourcePosition {
        self.position().unwrap_or(SourcePosition::MAX)
    }

    /// The broad category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SemanticError::TypeMismatch { .. } | SemanticError::ArrayIndexTypeMismatch { .. } => {
                ErrorCategory::Type
            }
            SemanticError::UndeclaredVariable { .. }
            | SemanticError::UndeclaredFunction { .. }
            | SemanticError::ConstantReassignment { .. }
            | SemanticError::InvalidAssignmentTarget { .. } => ErrorCategory::Scope,
            SemanticError::IncorrectArgumentCount { .. }
            | SemanticError::FunctionAlreadyDeclared { .. } => ErrorCategory::Function,
            SemanticError::BreakOutsideLoop { .. }
            | SemanticError::CyclicDependency { .. }
            | SemanticError::TooManyErrors { .. } => ErrorCategory::Flow,
        }
    }
}

/// A non-fatal finding.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SemanticWarning {
    /// A variable is declared but never read.
    UnusedVariable {
        /// The unused name.
        name: String,
        /// Where the declaration appeared.
        at: SourcePosition,
    },
    /// A function is declared but never called.
    UnusedFunction {
        /// The unused name.
        name: String,
        /// Where the declaration appeared.
        at: SourcePosition,
    },
    /// A value is converted between types without an explicit cast.
    ImplicitTypeConversion {
        /// The value's original type.
        from: FeType,
        /// The type it is converted to.
        to: FeType,
        /// Where the conversion occurred.
        at: SourcePosition,
    },
}

impl SemanticWarning {
    /// The position this warning points at.
    pub fn position(&self) -> SourcePosition {
        match self {
            SemanticWarning::UnusedVariable { at, .. }
            | SemanticWarning::UnusedFunction { at, .. }
            | SemanticWarning::ImplicitTypeConversion { at, .. } => *at,
        }
    }
}
