//! Token types for the ry lexer.
//!
//! Keywords and operators carry a [`TokenCode`]; names and literals carry
//! their payload directly in the [`TokenKind`].

mod code;
mod list;

pub use code::{TokenCode, TokenSet};
pub use list::TokenList;

use std::fmt;

use super::SourceSpan;

/// Token kind with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Name(String),
    IntLiteral(u128),
    FloatLiteral(f64),
    StringLiteral(String),
    CharLiteral(u8),
    BoolLiteral(bool),
    Keyword(TokenCode),
    Operator(TokenCode),
}

impl TokenKind {
    /// Build the kind for a code, placing it in the keyword or operator group.
    pub const fn from_code(code: TokenCode) -> Self {
        if code.is_keyword() {
            TokenKind::Keyword(code)
        } else {
            TokenKind::Operator(code)
        }
    }

    /// The numeric code of a keyword or operator.
    #[inline]
    pub const fn code(&self) -> Option<TokenCode> {
        match self {
            TokenKind::Keyword(code) | TokenKind::Operator(code) => Some(*code),
            _ => None,
        }
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Name(name) => format!("name '{name}'"),
            TokenKind::IntLiteral(v) => format!("integer literal {v}"),
            TokenKind::FloatLiteral(v) => format!("float literal {v:?}"),
            TokenKind::StringLiteral(s) => format!("string literal {s:?}"),
            TokenKind::CharLiteral(c) => format!("character literal {:?}", char::from(*c)),
            TokenKind::BoolLiteral(b) => format!("boolean literal {b}"),
            TokenKind::Keyword(code) => format!("keyword '{}'", code.spelling()),
            TokenKind::Operator(code) => format!("'{}'", code.spelling()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "NAME({name})"),
            TokenKind::IntLiteral(v) => write!(f, "INT_LIT({v})"),
            TokenKind::FloatLiteral(v) => write!(f, "FLOAT_LIT({v:?})"),
            TokenKind::StringLiteral(s) => write!(f, "STRING_LIT({s:?})"),
            TokenKind::CharLiteral(c) => write!(f, "CHAR_LIT({:?})", char::from(*c)),
            TokenKind::BoolLiteral(b) => write!(f, "BOOL_LIT({b})"),
            TokenKind::Keyword(code) => write!(f, "KEYWORD({})", code.spelling()),
            TokenKind::Operator(code) => write!(f, "OPERATOR({})", code.spelling()),
        }
    }
}

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: SourceSpan,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: SourceSpan) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub const fn code(&self) -> Option<TokenCode> {
        self.kind.code()
    }

    /// Check whether this token is the given keyword or operator.
    #[inline]
    pub fn is(&self, code: TokenCode) -> bool {
        self.kind.code() == Some(code)
    }

    /// Check whether this token's code is a member of `set`.
    #[inline]
    pub fn is_in(&self, set: TokenSet) -> bool {
        self.kind.code().is_some_and(|code| set.contains(code))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.kind)
    }
}
