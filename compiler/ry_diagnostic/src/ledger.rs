//! Append-only diagnostics store for one compilation unit.

use std::fmt::Write as _;

use crate::{Diagnostic, LineTable, Severity};

/// Diagnostics for one unit, together with the unit's id and source text.
///
/// Entries are kept in insertion order; the lexer and parser append to the
/// same ledger, so their relative order is preserved.
#[derive(Clone, Debug)]
pub struct DiagnosticLedger {
    id: String,
    source: String,
    lines: LineTable,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLedger {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let lines = LineTable::build(&source);
        DiagnosticLedger {
            id: id.into(),
            source,
            lines,
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Render every diagnostic as a four-line block under a source excerpt.
    ///
    /// ```text
    ///  t |
    ///  1 | ab
    ///    | ^~
    ///    | bad
    /// ```
    ///
    /// The gutter is as wide as the longer of the unit id and the line number.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            self.render_one(&mut out, diagnostic);
        }
        out
    }

    fn render_one(&self, out: &mut String, diagnostic: &Diagnostic) {
        let span = diagnostic.span;
        let line_number = span.start_line.to_string();
        let width = self.id.len().max(line_number.len());
        let line = self
            .lines
            .line_text(&self.source, span.start_line)
            .unwrap_or_default();
        let indent = " ".repeat(span.start_column.saturating_sub(1) as usize);
        let tildes = if span.end_line == span.start_line {
            span.end_column.saturating_sub(span.start_column) as usize
        } else {
            0
        };

        // Writing into a String cannot fail.
        let _ = writeln!(out, " {:>width$} |", self.id);
        let _ = writeln!(out, " {line_number:>width$} | {line}");
        let _ = writeln!(out, " {:>width$} | {indent}^{}", "", "~".repeat(tildes));
        let _ = writeln!(out, " {:>width$} | {indent}{}", "", diagnostic.message);
    }
}
