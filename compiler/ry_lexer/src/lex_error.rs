//! Lexer error kinds.
//!
//! Every lexical problem is recoverable: the lexer records the error in the
//! ledger and keeps scanning.

use ry_diagnostic::Severity;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    // === Numeric Errors ===
    #[error("malformed integer literal")]
    MalformedInteger,
    #[error("invalid digit '{digit}' in {base} integer literal")]
    InvalidDigit { digit: char, base: &'static str },
    #[error("trailing separator in numeric literal")]
    TrailingSeparator,
    #[error("integer literal is too large")]
    IntegerOverflow,
    #[error("float literal is out of range")]
    FloatOutOfRange,
    #[error("unfinished exponent in float literal")]
    UnfinishedExponent,
    #[error("malformed numeric literal")]
    MalformedNumber,

    // === String/Char Errors ===
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected new line in single-line string literal")]
    NewlineInString,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("escape sequence out of bounds <1,127>")]
    EscapeOutOfBounds,
    #[error("empty character literal")]
    EmptyChar,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("character literal must contain exactly one character")]
    MultiCharLiteral,
    #[error("character literal must be a single-byte character")]
    WideChar,

    // === Layout ===
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("line feed followed by carriage return")]
    LineFeedCarriageReturn,
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),
}

impl LexErrorKind {
    pub fn severity(&self) -> Severity {
        match self {
            LexErrorKind::UnterminatedBlockComment
            | LexErrorKind::LineFeedCarriageReturn
            | LexErrorKind::UnrecognizedCharacter(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
