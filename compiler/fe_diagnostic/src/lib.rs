//! Semantic diagnostics for the Fe compiler front end.
//!
//! Analysis passes record findings through [`SemanticErrorReporter`],
//! which deduplicates by source position, enforces configurable limits
//! with a "too many errors" sentinel, and stays consistent under
//! concurrent reporting. The [`format`] module renders accepted findings
//! for humans, and [`AnalysisResult`] is the immutable hand-off the
//! driver inspects after a run.
//!
//! Findings are data, never control flow: reporting returns whether the
//! finding was accepted, and nothing in this crate raises an analysis
//! finding as an error value or panic.

pub mod format;
mod reporter;
mod result;
mod semantic_error;

pub use reporter::{SemanticErrorReporter, DEFAULT_ERROR_LIMIT, DEFAULT_WARNING_LIMIT};
pub use result::AnalysisResult;
pub use semantic_error::{ErrorCategory, SemanticError, SemanticWarning};

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
