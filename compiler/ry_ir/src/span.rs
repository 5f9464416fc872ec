//! Source location spans.
//!
//! Spans are line/column based: both are 1-based and the end position is
//! inclusive, so a one-character token has `end == start`.

use std::fmt;

/// A 1-based line/column position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        SourcePosition::new(1, 1)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span.
///
/// Invariant: `end >= start`, compared lexicographically by (line, column).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourceSpan {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceSpan {
    /// Create a span from its four coordinates.
    #[inline]
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        SourceSpan {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A single-point span.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        SourceSpan::new(line, column, line, column)
    }

    /// Span between two positions, both inclusive.
    #[inline]
    pub const fn between(start: SourcePosition, end: SourcePosition) -> Self {
        SourceSpan::new(start.line, start.column, end.line, end.column)
    }

    #[inline]
    pub const fn start(&self) -> SourcePosition {
        SourcePosition::new(self.start_line, self.start_column)
    }

    #[inline]
    pub const fn end(&self) -> SourcePosition {
        SourcePosition::new(self.end_line, self.end_column)
    }
}

impl fmt::Debug for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}
