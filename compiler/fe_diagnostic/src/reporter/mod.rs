//! Concurrency-safe collection of semantic findings.
//!
//! The reporter deduplicates by source position (first writer wins,
//! regardless of variant), enforces configurable limits, and keeps the
//! dedup/limit/sentinel decision atomic under one lock so analysis
//! passes can report from any number of threads.

use fe_ir::SourcePosition;
use fe_symbols::SymbolTable;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::plural_s;
use crate::result::AnalysisResult;
use crate::semantic_error::{ErrorCategory, SemanticError, SemanticWarning};

/// Default cap on accepted errors. Generous enough not to interfere with
/// normal runs.
pub const DEFAULT_ERROR_LIMIT: usize = 100;

/// Default cap on accepted warnings.
pub const DEFAULT_WARNING_LIMIT: usize = 100;

/// State guarded by the reporter's lock.
///
/// The dedup, limit, and sentinel transitions must be atomic as a unit,
/// so everything mutable lives behind a single mutex rather than
/// per-field locks.
#[derive(Debug)]
struct ReporterState {
    errors: Vec<SemanticError>,
    warnings: Vec<SemanticWarning>,
    error_positions: FxHashSet<SourcePosition>,
    warning_positions: FxHashSet<SourcePosition>,
    stopped: bool,
}

/// Thread-safe collector for semantic errors and warnings.
///
/// All reporting methods take `&self`; share one reporter by reference
/// across analysis threads. `report` returns whether the finding was
/// accepted — rejects are duplicates (another finding already holds that
/// position) or overflow (the configured limit was reached).
#[derive(Debug)]
pub struct SemanticErrorReporter {
    error_limit: usize,
    warning_limit: usize,
    state: Mutex<ReporterState>,
}

impl Default for SemanticErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticErrorReporter {
    /// Create a reporter with the default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_ERROR_LIMIT, DEFAULT_WARNING_LIMIT)
    }

    /// Create a reporter with explicit error and warning limits.
    pub fn with_limits(error_limit: usize, warning_limit: usize) -> Self {
        SemanticErrorReporter {
            error_limit,
            warning_limit,
            state: Mutex::new(ReporterState {
                errors: Vec::new(),
                warnings: Vec::new(),
                error_positions: FxHashSet::default(),
                warning_positions: FxHashSet::default(),
                stopped: false,
            }),
        }
    }

    /// Report an error.
    ///
    /// Returns `true` when the error was accepted. First writer wins a
    /// position: a later error at the same position is rejected no
    /// matter its variant. Crossing the error limit synthesizes a single
    /// [`SemanticError::TooManyErrors`], stops further collection, and
    /// drops the triggering error.
    pub fn report(&self, error: SemanticError) -> bool {
        let mut state = self.state.lock();
        if state.stopped {
            return false;
        }
        if let Some(at) = error.position() {
            if state.error_positions.contains(&at) {
                return false;
            }
        }
        if state.errors.len() >= self.error_limit {
            tracing::debug!(
                limit = self.error_limit,
                "error limit reached, stopping collection"
            );
            state.errors.push(SemanticError::TooManyErrors {
                count: self.error_limit,
            });
            state.stopped = true;
            return false;
        }
        if let Some(at) = error.position() {
            state.error_positions.insert(at);
        }
        state.errors.push(error);
        true
    }

    /// Report a warning.
    ///
    /// Same shape as [`report`](Self::report) with an independent
    /// position set and limit, but no sentinel: past the limit, warnings
    /// are silently dropped.
    pub fn report_warning(&self, warning: SemanticWarning) -> bool {
        let mut state = self.state.lock();
        if state.warnings.len() >= self.warning_limit {
            return false;
        }
        let at = warning.position();
        if state.warning_positions.contains(&at) {
            return false;
        }
        state.warning_positions.insert(at);
        state.warnings.push(warning);
        true
    }

    /// Number of accepted errors, including the sentinel once present.
    pub fn error_count(&self) -> usize {
        self.state.lock().errors.len()
    }

    /// Number of accepted warnings.
    pub fn warning_count(&self) -> usize {
        self.state.lock().warnings.len()
    }

    /// Check whether any error was accepted.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Check whether any warning was accepted.
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Whether collection was stopped by the error limit.
    pub fn has_reached_error_limit(&self) -> bool {
        self.state.lock().stopped
    }

    /// Snapshot of accepted errors in source order.
    ///
    /// The positionless sentinel sorts after every positioned error. The
    /// lock is released before sorting the copy.
    pub fn errors_sorted(&self) -> Vec<SemanticError> {
        let mut errors = self.state.lock().errors.clone();
        errors.sort_by_key(SemanticError::sort_position);
        errors
    }

    /// Snapshot of accepted warnings in source order.
    pub fn warnings_sorted(&self) -> Vec<SemanticWarning> {
        let mut warnings = self.state.lock().warnings.clone();
        warnings.sort_by_key(SemanticWarning::position);
        warnings
    }

    /// Reset every list, position set, and the stopped flag.
    ///
    /// Lets one reporter instance serve independent analysis runs.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.errors.clear();
        state.warnings.clear();
        state.error_positions.clear();
        state.warning_positions.clear();
        state.stopped = false;
    }

    /// Accepted type-category errors, in acceptance order.
    pub fn type_errors(&self) -> Vec<SemanticError> {
        self.errors_in(ErrorCategory::Type)
    }

    /// Accepted scope-category errors, in acceptance order.
    pub fn scope_errors(&self) -> Vec<SemanticError> {
        self.errors_in(ErrorCategory::Scope)
    }

    /// Accepted function-category errors, in acceptance order.
    pub fn function_errors(&self) -> Vec<SemanticError> {
        self.errors_in(ErrorCategory::Function)
    }

    fn errors_in(&self, category: ErrorCategory) -> Vec<SemanticError> {
        self.state
            .lock()
            .errors
            .iter()
            .filter(|error| error.category() == category)
            .cloned()
            .collect()
    }

    /// Snapshot the current findings into an immutable result.
    ///
    /// Does not clear the reporter; the symbol table is cloned into the
    /// result so later mutation of the live table cannot affect it.
    pub fn create_result(&self, symbols: &SymbolTable) -> AnalysisResult {
        AnalysisResult::new(self.errors_sorted(), self.warnings_sorted(), symbols.clone())
    }

    /// A one-line human summary, e.g. `2 errors, 1 warning`.
    pub fn create_summary(&self) -> String {
        let (errors, warnings) = {
            let state = self.state.lock();
            (state.errors.len(), state.warnings.len())
        };
        format!(
            "{errors} error{}, {warnings} warning{}",
            plural_s(errors),
            plural_s(warnings)
        )
    }
}
