use std::fmt;

use ry_ir::SourceSpan;

/// Diagnostic severity level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A leveled message anchored to a source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: SourceSpan,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, span: SourceSpan) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            span,
        }
    }

    pub fn info(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Info, message, span)
    }

    #[cold]
    pub fn warning(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    #[cold]
    pub fn error(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Error, message, span)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.span)
    }
}
