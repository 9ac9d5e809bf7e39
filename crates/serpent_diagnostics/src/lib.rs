//! serpent_diagnostics: Diagnostic messages and error accumulation.
//!
//! Binding and analysis never abort on bad input. Problems are collected
//! into a [`DiagnosticCollection`] and the pass always runs to completion,
//! so callers get a best-effort result plus everything that went wrong.

use serpent_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
///
/// `Error` marks input that is semantically illegal; the binder reports it
/// and keeps going. `Warning` marks legal but suspicious input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
///
/// Templates may contain `{0}`, `{1}`, ... placeholders filled in when a
/// concrete [`Diagnostic`] is created.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The source span this diagnostic points at, if any.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic pointing at a source span.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    pub fn is_warning(&self) -> bool {
        self.category == DiagnosticCategory::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "{}: ", span)?;
        }
        write!(f, "{} S{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a message template by replacing `{0}`, `{1}`, ... with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a pass.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort diagnostics by source position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by_key(|d| d.span.map(|s| s.start).unwrap_or(0));
    }
}

// ============================================================================
// Diagnostic messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scope and declaration errors (3000-3099)
    // ========================================================================
    pub const PARAMETER_DECLARED_GLOBAL: DiagnosticMessage =
        diag!(3001, Error, "name '{0}' is a function parameter and declared global");
    pub const NONLOCAL_AND_GLOBAL: DiagnosticMessage =
        diag!(3002, Error, "name '{0}' is nonlocal and global");
    pub const PARAMETER_DECLARED_NONLOCAL: DiagnosticMessage =
        diag!(3003, Error, "name '{0}' is a parameter and nonlocal");
    pub const NO_BINDING_FOR_NONLOCAL: DiagnosticMessage =
        diag!(3004, Error, "no binding for nonlocal '{0}' found");
    pub const DELETE_OF_CELL_VARIABLE: DiagnosticMessage =
        diag!(3005, Error, "can not delete variable '{0}' referenced in nested scope");
    pub const IMPORT_STAR_IN_NESTED_FUNCTION: DiagnosticMessage =
        diag!(3006, Error, "import * is not allowed in function '{0}' because it is a nested function");
    pub const IMPORT_STAR_WITH_NESTED_FREE_VARIABLES: DiagnosticMessage =
        diag!(3007, Error, "import * is not allowed in function '{0}' because it contains a nested function with free variables");
    pub const UNQUALIFIED_EXEC_IN_NESTED_FUNCTION: DiagnosticMessage =
        diag!(3008, Error, "unqualified exec is not allowed in function '{0}' because it is a nested function");
    pub const UNQUALIFIED_EXEC_WITH_NESTED_FREE_VARIABLES: DiagnosticMessage =
        diag!(3009, Error, "unqualified exec is not allowed in function '{0}' because it contains a nested function with free variables");

    // ========================================================================
    // Declaration-order warnings (3100-3199)
    // ========================================================================
    pub const ASSIGNED_BEFORE_GLOBAL_DECLARATION: DiagnosticMessage =
        diag!(3101, Warning, "name '{0}' is assigned to before global declaration");
    pub const ASSIGNED_BEFORE_NONLOCAL_DECLARATION: DiagnosticMessage =
        diag!(3102, Warning, "name '{0}' is assigned to before nonlocal declaration");
    pub const USED_BEFORE_GLOBAL_DECLARATION: DiagnosticMessage =
        diag!(3103, Warning, "name '{0}' is used prior to global declaration");
    pub const USED_BEFORE_NONLOCAL_DECLARATION: DiagnosticMessage =
        diag!(3104, Warning, "name '{0}' is used prior to nonlocal declaration");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message("name '{0}' is nonlocal and global", &["x"]),
            "name 'x' is nonlocal and global"
        );
        assert_eq!(format_message("plain", &[]), "plain");
    }

    #[test]
    fn test_collection_counts() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        collection.add(Diagnostic::new(&messages::NONLOCAL_AND_GLOBAL, &["x"]));
        collection.add(Diagnostic::new(
            &messages::USED_BEFORE_GLOBAL_DECLARATION,
            &["y"],
        ));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.warning_count(), 1);
        assert!(collection.has_errors());
    }

    #[test]
    fn test_sort_by_span() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::with_span(
            TextSpan::new(40, 2),
            &messages::NONLOCAL_AND_GLOBAL,
            &["b"],
        ));
        collection.add(Diagnostic::with_span(
            TextSpan::new(4, 2),
            &messages::NONLOCAL_AND_GLOBAL,
            &["a"],
        ));
        collection.sort();
        assert_eq!(collection.diagnostics()[0].span.unwrap().start, 4);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(&messages::NO_BINDING_FOR_NONLOCAL, &["count"]);
        assert_eq!(
            diag.to_string(),
            "error S3004: no binding for nonlocal 'count' found"
        );
    }
}
