//! Property-based tests for the error reporter.
//!
//! These tests use proptest to generate arbitrary reporting sequences and
//! verify the reporter's structural guarantees hold on every interleaving
//! of positions:
//! 1. Sorted snapshots are ordered by (line, column)
//! 2. No two accepted errors share a position
//! 3. The accepted count equals the number of distinct reported positions

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::HashSet;

use fe_diagnostic::{SemanticError, SemanticErrorReporter};
use fe_ir::SourcePosition;
use proptest::prelude::*;

/// Generate an arbitrary in-range position.
fn position_strategy() -> impl Strategy<Value = SourcePosition> {
    (1u32..40, 1u32..40).prop_map(|(line, column)| SourcePosition::new(line, column))
}

fn break_at(at: SourcePosition) -> SemanticError {
    SemanticError::BreakOutsideLoop { at }
}

proptest! {
    #[test]
    fn sorted_snapshot_is_ordered_and_position_unique(
        positions in prop::collection::vec(position_strategy(), 0..60)
    ) {
        let reporter = SemanticErrorReporter::new();
        for at in &positions {
            reporter.report(break_at(*at));
        }

        let sorted = reporter.errors_sorted();
        let keys: Vec<SourcePosition> = sorted.iter().map(|e| e.sort_position()).collect();

        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn accepted_count_matches_distinct_positions(
        positions in prop::collection::vec(position_strategy(), 0..60)
    ) {
        let reporter = SemanticErrorReporter::new();
        let mut accepted = 0usize;
        for at in &positions {
            if reporter.report(break_at(*at)) {
                accepted += 1;
            }
        }

        let distinct: HashSet<SourcePosition> = positions.iter().copied().collect();
        prop_assert_eq!(accepted, distinct.len());
        prop_assert_eq!(reporter.error_count(), distinct.len());
    }

    #[test]
    fn clear_always_restores_a_fresh_reporter(
        positions in prop::collection::vec(position_strategy(), 1..40)
    ) {
        let reporter = SemanticErrorReporter::new();
        for at in &positions {
            reporter.report(break_at(*at));
        }

        reporter.clear();
        prop_assert_eq!(reporter.error_count(), 0);
        prop_assert!(reporter.report(break_at(positions[0])));
    }
}
