//! Rendering of semantic findings into display text.
//!
//! Pure functions over the diagnostic model. Every error renders as a
//! header line, one to four indented detail lines, a position line, and
//! an optional trailing note. The richer entry points append
//! "did you mean" suggestions from a symbol table and a source-context
//! excerpt from an already-loaded source string.

use fe_ir::SourcePosition;
use fe_symbols::{SymbolKind, SymbolTable};

use crate::plural_s;
use crate::semantic_error::{SemanticError, SemanticWarning};

/// Indentation for detail lines.
const INDENT: &str = "  ";

/// Source lines shown either side of the error line in context excerpts.
const CONTEXT_WINDOW: u32 = 1;

/// Render one error with its fixed per-variant template.
pub fn format(error: &SemanticError) -> String {
    lines_for(error).join("\n")
}

/// Render one warning with its fixed per-variant template.
pub fn format_warning(warning: &SemanticWarning) -> String {
    let lines = match warning {
        SemanticWarning::UnusedVariable { name, at } => vec![
            warning_header("Unused variable"),
            detail(format!("Name: {name}")),
            position_line(*at),
        ],
        SemanticWarning::UnusedFunction { name, at } => vec![
            warning_header("Unused function"),
            detail(format!("Name: {name}")),
            position_line(*at),
        ],
        SemanticWarning::ImplicitTypeConversion { from, to, at } => vec![
            warning_header("Implicit type conversion"),
            detail(format!("From: {from}")),
            detail(format!("To: {to}")),
            position_line(*at),
        ],
    };
    lines.join("\n")
}

/// Render one error, enriched with symbol-table-derived suggestions.
///
/// With a table supplied, undeclared names gain a "Did you mean" line
/// when similar declarations are visible, and type mismatches gain a
/// conversion-advice note when the pair is explainable.
pub fn format_semantic_error(error: &SemanticError, symbols: Option<&SymbolTable>) -> String {
    let mut lines = lines_for(error);
    if let Some(table) = symbols {
        append_suggestions(&mut lines, error, table);
    }
    lines.join("\n")
}

/// Render one error with suggestions and a source-context excerpt.
///
/// The excerpt quotes the offending line and one line either side of it,
/// gutter-numbered, with the error line marked.
pub fn format_with_context(
    error: &SemanticError,
    source: Option<&str>,
    symbols: Option<&SymbolTable>,
) -> String {
    let mut lines = lines_for(error);
    if let Some(table) = symbols {
        append_suggestions(&mut lines, error, table);
    }
    if let (Some(source), Some(at)) = (source, error.position()) {
        append_source_context(&mut lines, source, at);
    }
    lines.join("\n")
}

fn lines_for(error: &SemanticError) -> Vec<String> {
    match error {
        SemanticError::TypeMismatch {
            expected,
            actual,
            at,
        } => vec![
            header("Type mismatch"),
            detail(format!("Expected: {expected}")),
            detail(format!("Found: {actual}")),
            position_line(*at),
        ],
        SemanticError::ArrayIndexTypeMismatch {
            expected,
            actual,
            at,
        } => vec![
            header("Array index type mismatch"),
            detail(format!("Expected: {expected}")),
            detail(format!("Found: {actual}")),
            position_line(*at),
            note("Array indices must be integers"),
        ],
        SemanticError::UndeclaredVariable { name, at } => vec![
            header("Undeclared variable"),
            detail(format!("Name: {name}")),
            position_line(*at),
        ],
        SemanticError::UndeclaredFunction { name, at } => vec![
            header("Undeclared function"),
            detail(format!("Name: {name}")),
            position_line(*at),
        ],
        SemanticError::IncorrectArgumentCount {
            function,
            expected,
            actual,
            at,
        } => vec![
            header("Incorrect argument count"),
            detail(format!("Function: {function}")),
            detail(format!(
                "Expected: {expected} argument{}",
                plural_s(*expected)
            )),
            detail(format!("Found: {actual} argument{}", plural_s(*actual))),
            position_line(*at),
        ],
        SemanticError::FunctionAlreadyDeclared { name, at } => vec![
            header("Function already declared"),
            detail(format!("Name: {name}")),
            position_line(*at),
        ],
        SemanticError::ConstantReassignment { name, at } => vec![
            header("Constant reassignment"),
            detail(format!("Name: {name}")),
            position_line(*at),
            note("Constants cannot be reassigned after declaration"),
        ],
        SemanticError::InvalidAssignmentTarget { at } => vec![
            header("Invalid assignment target"),
            detail("The left side of an assignment must be a variable or array element"),
            position_line(*at),
        ],
        SemanticError::BreakOutsideLoop { at } => vec![
            header("Break outside loop"),
            detail("A break statement may only appear inside a loop body"),
            position_line(*at),
        ],
        SemanticError::CyclicDependency { chain, at } => vec![
            header("Cyclic dependency"),
            detail(format!("Chain: {}", chain.join(" -> "))),
            position_line(*at),
        ],
        SemanticError::TooManyErrors { count } => vec![
            header("Too many errors"),
            detail(format!(
                "Analysis stopped after {count} error{}",
                plural_s(*count)
            )),
            detail("Fix some errors and try again"),
        ],
    }
}

fn append_suggestions(lines: &mut Vec<String>, error: &SemanticError, table: &SymbolTable) {
    match error {
        SemanticError::UndeclaredVariable { name, .. } => {
            push_did_you_mean(lines, table.find_similar_names(name, SymbolKind::Variable));
        }
        SemanticError::UndeclaredFunction { name, .. } => {
            push_did_you_mean(lines, table.find_similar_names(name, SymbolKind::Function));
        }
        SemanticError::TypeMismatch {
            expected, actual, ..
        } => {
            if let Some(advice) = table.suggest_type_conversion(actual, expected) {
                lines.push(note(advice));
            }
        }
        _ => {}
    }
}

fn push_did_you_mean(lines: &mut Vec<String>, candidates: Vec<String>) {
    if !candidates.is_empty() {
        lines.push(detail(format!("Did you mean: {}", candidates.join(", "))));
    }
}

fn append_source_context(lines: &mut Vec<String>, source: &str, at: SourcePosition) {
    let source_lines: Vec<&str> = source.lines().collect();
    let total = source_lines.len() as u32;
    if at.line == 0 || at.line > total {
        return;
    }

    let first = at.line.saturating_sub(CONTEXT_WINDOW).max(1);
    let last = (at.line + CONTEXT_WINDOW).min(total);
    let width = last.to_string().len();

    lines.push(detail("Source context:"));
    for number in first..=last {
        let marker = if number == at.line { ">" } else { " " };
        let text = source_lines[(number - 1) as usize];
        lines.push(format!("{INDENT}{marker} {number:>width$} | {text}"));
    }
}

fn header(phrase: &str) -> String {
    format!("SemanticError: {phrase}")
}

fn warning_header(phrase: &str) -> String {
    format!("SemanticWarning: {phrase}")
}

fn detail(text: impl Into<String>) -> String {
    format!("{INDENT}{}", text.into())
}

fn position_line(at: SourcePosition) -> String {
    format!("{INDENT}Position: {at}")
}

fn note(text: &str) -> String {
    format!("{INDENT}Note: {text}")
}
