//! The symbol table: scope stack, declaration, and resolution.
//!
//! The table owns an arena of scope frames. Entering a scope pushes a new
//! frame parented on the current one; exiting returns to the parent.
//! Resolution walks from the innermost frame outward, so inner
//! declarations shadow outer ones.
//!
//! Declaring a name that already exists in the current frame is reported
//! back to the caller as a [`DeclareError`]; the table itself never talks
//! to the error reporter.

use fe_ir::{FeType, SourcePosition};
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::convert;
use crate::scope::{Scope, ScopeId};
use crate::suggest;
use crate::symbol::{Symbol, SymbolKind};

/// Maximum number of candidates returned by [`SymbolTable::find_similar_names`].
const MAX_SUGGESTIONS: usize = 3;

/// Failure to declare a name.
#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum DeclareError {
    /// The name is already bound in the current scope.
    #[error("`{name}` is already declared as a {} in this scope (first declared at {previous})", .kind.kind_name())]
    AlreadyDeclared {
        /// The name that collided.
        name: String,
        /// Kind of the existing declaration.
        kind: SymbolKind,
        /// Where the existing declaration appeared.
        previous: SourcePosition,
    },
}

/// A scope-chain registry of declared names.
///
/// Lives for one analysis run: created at analysis start, mutated by one
/// analysis thread, then optionally retained read-only for reporting.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    /// Arena of every frame ever entered. Exited frames stay in the
    /// arena but drop out of the active chain.
    scopes: Vec<Scope>,
    /// The innermost active frame.
    current: ScopeId,
    /// Next declaration sequence number.
    next_index: u32,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding only the root scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new("global".to_string(), None, 0)],
            current: ScopeId::ROOT,
            next_index: 0,
        }
    }

    /// Enter a new scope parented on the current one.
    pub fn enter_scope(&mut self, label: impl Into<String>) -> ScopeId {
        let label = label.into();
        let depth = self.current_scope().depth + 1;
        let id = ScopeId::new(self.scopes.len() as u32);
        tracing::trace!(scope = %label, depth, "entering scope");
        self.scopes.push(Scope::new(label, Some(self.current), depth));
        self.current = id;
        id
    }

    /// Exit the current scope, returning to its parent.
    ///
    /// # Panics
    ///
    /// Panics when called with no open scope beyond the root. Unbalanced
    /// enter/exit is a caller bug, not a recoverable condition.
    pub fn exit_scope(&mut self) {
        let Some(parent) = self.current_scope().parent else {
            panic!("exit_scope called with no open scope beyond the root");
        };
        tracing::trace!(scope = %self.current_scope().label, "exiting scope");
        self.current = parent;
    }

    /// Declare `name` in the current scope.
    ///
    /// Fails when the name is already bound in the current frame; the
    /// caller decides whether that becomes a reported error. Shadowing an
    /// outer frame's binding is allowed.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        ty: FeType,
        kind: SymbolKind,
        at: SourcePosition,
    ) -> Result<(), DeclareError> {
        let name = name.into();
        let index = self.next_index;
        let current = self.current.index();
        if let Some(existing) = self.scopes[current].bindings.get(&name) {
            return Err(DeclareError::AlreadyDeclared {
                name,
                kind: existing.kind,
                previous: existing.declared_at,
            });
        }
        self.scopes[current].bindings.insert(
            name.clone(),
            Symbol {
                name,
                ty,
                kind,
                declared_at: at,
                index,
            },
        );
        self.next_index += 1;
        Ok(())
    }

    /// Resolve a name, searching from the current scope outward.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        let mut id = self.current;
        loop {
            let scope = &self.scopes[id.index()];
            if let Some(symbol) = scope.bindings.get(name) {
                return Some(symbol);
            }
            id = scope.parent?;
        }
    }

    /// Resolve a name in the current scope only.
    pub fn resolve_local(&self, name: &str) -> Option<&Symbol> {
        self.current_scope().bindings.get(name)
    }

    /// Every symbol of `kind` visible from the current scope, with inner
    /// declarations shadowing outer ones of the same name.
    pub fn visible_symbols(&self, kind: SymbolKind) -> Vec<&Symbol> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut visible = Vec::new();
        let mut id = Some(self.current);
        while let Some(current) = id {
            let scope = &self.scopes[current.index()];
            for symbol in scope.bindings.values() {
                if symbol.kind == kind && seen.insert(symbol.name.as_str()) {
                    visible.push(symbol);
                }
            }
            id = scope.parent;
        }
        visible
    }

    /// Find declared names similar to `to`, for "did you mean" suggestions.
    ///
    /// Candidates are every name of `kind` visible from the current scope.
    /// Matches within the length-scaled edit-distance threshold come back
    /// ordered by closeness, then declaration order, capped at three.
    pub fn find_similar_names(&self, to: &str, kind: SymbolKind) -> Vec<String> {
        let input_len = to.chars().count();
        let threshold = suggest::distance_threshold(input_len);

        let mut matches: Vec<(usize, u32, &str)> = self
            .visible_symbols(kind)
            .into_iter()
            .filter_map(|symbol| {
                let candidate_len = symbol.name.chars().count();
                if input_len.abs_diff(candidate_len) > threshold {
                    return None;
                }
                let distance = suggest::edit_distance(to, &symbol.name);
                (distance <= threshold).then_some((distance, symbol.index, symbol.name.as_str()))
            })
            .collect();

        matches.sort_by_key(|&(distance, index, _)| (distance, index));
        matches
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, _, name)| name.to_string())
            .collect()
    }

    /// Advice for converting `from` into `to`, when a known-safe or
    /// explainable conversion exists.
    pub fn suggest_type_conversion(&self, from: &FeType, to: &FeType) -> Option<&'static str> {
        convert::conversion_advice(from, to)
    }

    /// Depth of the current scope (0 = root).
    pub fn depth(&self) -> u32 {
        self.current_scope().depth
    }

    /// The current scope's ID.
    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Label of the current scope.
    pub fn current_scope_label(&self) -> &str {
        &self.current_scope().label
    }

    /// Get a scope frame by ID.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    /// Total number of symbols declared across the whole table.
    pub fn symbol_count(&self) -> usize {
        self.scopes.iter().map(Scope::len).sum()
    }

    fn current_scope(&self) -> &Scope {
        &self.scopes[self.current.index()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pos(line: u32, column: u32) -> SourcePosition {
        SourcePosition::new(line, column)
    }

    #[test]
    fn test_declare_and_resolve() {
        let mut table = SymbolTable::new();
        assert!(table
            .declare("total", FeType::Integer, SymbolKind::Variable, pos(1, 1))
            .is_ok());

        let symbol = table.resolve("total");
        assert!(symbol.is_some_and(|s| s.ty == FeType::Integer));
        assert!(table.resolve("missing").is_none());
        assert_eq!(table.symbol_count(), 1);
    }

    #[test]
    fn test_redeclare_in_same_scope_fails() {
        let mut table = SymbolTable::new();
        table
            .declare(
                "draw",
                FeType::function(vec![], FeType::Integer),
                SymbolKind::Function,
                pos(1, 1),
            )
            .ok();

        let err = table.declare(
            "draw",
            FeType::function(vec![], FeType::Integer),
            SymbolKind::Function,
            pos(4, 1),
        );
        assert_eq!(
            err,
            Err(DeclareError::AlreadyDeclared {
                name: "draw".to_string(),
                kind: SymbolKind::Function,
                previous: pos(1, 1),
            })
        );
    }

    #[test]
    fn test_shadowing_in_inner_scope() {
        let mut table = SymbolTable::new();
        table
            .declare("x", FeType::Integer, SymbolKind::Variable, pos(1, 1))
            .ok();

        table.enter_scope("block");
        assert!(table
            .declare("x", FeType::Real, SymbolKind::Variable, pos(2, 3))
            .is_ok());
        assert!(table.resolve("x").is_some_and(|s| s.ty == FeType::Real));
        assert!(table.resolve_local("x").is_some());

        table.exit_scope();
        assert!(table.resolve("x").is_some_and(|s| s.ty == FeType::Integer));
    }

    #[test]
    fn test_exited_scope_is_no_longer_visible() {
        let mut table = SymbolTable::new();
        table.enter_scope("function body");
        table
            .declare("local", FeType::Boolean, SymbolKind::Variable, pos(3, 5))
            .ok();
        table.exit_scope();

        assert!(table.resolve("local").is_none());
        assert_eq!(table.depth(), 0);
        assert_eq!(table.current_scope_label(), "global");
    }

    #[test]
    fn test_scope_depth_and_ids() {
        let mut table = SymbolTable::new();
        assert_eq!(table.current(), ScopeId::ROOT);

        let body = table.enter_scope("function body");
        let block = table.enter_scope("loop body");
        assert_eq!(table.depth(), 2);
        assert_eq!(table.current(), block);
        assert!(table.scope(body).is_some_and(|s| s.label == "function body"));

        table.exit_scope();
        assert_eq!(table.current(), body);
    }

    #[test]
    #[should_panic(expected = "no open scope beyond the root")]
    fn test_exit_scope_at_root_panics() {
        let mut table = SymbolTable::new();
        table.exit_scope();
    }

    #[test]
    fn test_find_similar_names_typo() {
        let mut table = SymbolTable::new();
        table
            .declare("userName", FeType::String, SymbolKind::Variable, pos(1, 1))
            .ok();
        table
            .declare("itemCount", FeType::Integer, SymbolKind::Variable, pos(2, 1))
            .ok();

        let similar = table.find_similar_names("userNam", SymbolKind::Variable);
        assert_eq!(similar, vec!["userName".to_string()]);
    }

    #[test]
    fn test_find_similar_names_filters_by_kind() {
        let mut table = SymbolTable::new();
        table
            .declare(
                "total",
                FeType::function(vec![], FeType::Integer),
                SymbolKind::Function,
                pos(1, 1),
            )
            .ok();

        assert!(table
            .find_similar_names("totl", SymbolKind::Variable)
            .is_empty());
        assert_eq!(
            table.find_similar_names("totl", SymbolKind::Function),
            vec!["total".to_string()]
        );
    }

    #[test]
    fn test_find_similar_names_orders_by_closeness_then_declaration() {
        let mut table = SymbolTable::new();
        table
            .declare("count", FeType::Integer, SymbolKind::Variable, pos(1, 1))
            .ok();
        table
            .declare("counts", FeType::Integer, SymbolKind::Variable, pos(2, 1))
            .ok();
        table
            .declare("mount", FeType::Integer, SymbolKind::Variable, pos(3, 1))
            .ok();

        // "coun" is distance 1 from "count", 2 from "counts" and "mount";
        // the distance-2 pair falls back to declaration order.
        let similar = table.find_similar_names("coun", SymbolKind::Variable);
        assert_eq!(
            similar,
            vec![
                "count".to_string(),
                "counts".to_string(),
                "mount".to_string()
            ]
        );
    }

    #[test]
    fn test_find_similar_names_caps_results() {
        let mut table = SymbolTable::new();
        for (i, name) in ["val1", "val2", "val3", "val4", "val5"].iter().enumerate() {
            table
                .declare(
                    *name,
                    FeType::Integer,
                    SymbolKind::Variable,
                    pos(i as u32 + 1, 1),
                )
                .ok();
        }

        let similar = table.find_similar_names("val", SymbolKind::Variable);
        assert_eq!(similar.len(), 3);
    }

    #[test]
    fn test_find_similar_names_respects_shadowing() {
        let mut table = SymbolTable::new();
        table
            .declare("value", FeType::Integer, SymbolKind::Variable, pos(1, 1))
            .ok();
        table.enter_scope("block");
        table
            .declare("value", FeType::Real, SymbolKind::Variable, pos(5, 3))
            .ok();

        // Only one "value" is visible, the inner one.
        let similar = table.find_similar_names("vale", SymbolKind::Variable);
        assert_eq!(similar, vec!["value".to_string()]);
    }

    #[test]
    fn test_visible_symbols_walks_the_chain() {
        let mut table = SymbolTable::new();
        table
            .declare("outer", FeType::Integer, SymbolKind::Variable, pos(1, 1))
            .ok();
        table.enter_scope("block");
        table
            .declare("inner", FeType::Integer, SymbolKind::Variable, pos(2, 1))
            .ok();

        let mut names: Vec<&str> = table
            .visible_symbols(SymbolKind::Variable)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        names.sort_unstable();
        assert_eq!(names, vec!["inner", "outer"]);
    }

    #[test]
    fn test_suggest_type_conversion_delegates_to_table() {
        let table = SymbolTable::new();
        assert!(table
            .suggest_type_conversion(&FeType::Integer, &FeType::String)
            .is_some());
        assert!(table
            .suggest_type_conversion(&FeType::Boolean, &FeType::Real)
            .is_none());
    }
}
