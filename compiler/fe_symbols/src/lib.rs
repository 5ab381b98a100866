//! Symbol infrastructure for the Fe compiler front end.
//!
//! This crate provides:
//! - A scope arena for lexical name resolution
//! - The [`SymbolTable`] the semantic passes declare into and resolve from
//! - Name-similarity lookup for "did you mean" suggestions
//! - A fixed table of type-conversion advice for mismatch notes
//!
//! The table is built for single-threaded mutation: scope entry/exit and
//! declaration happen on one analysis thread. Read-only lookups against a
//! table that is no longer being mutated are safe from any thread.

mod convert;
mod scope;
mod suggest;
mod symbol;
mod table;

pub use scope::{Scope, ScopeId};
pub use symbol::{Symbol, SymbolKind};
pub use table::{DeclareError, SymbolTable};
