//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! The token slice carries no end marker; every accessor returns `None`
//! past the last token.

use ry_ir::{SourceSpan, Token, TokenCode, TokenKind, TokenSet};
use tracing::trace;

/// Cursor over a borrowed token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor, used to roll back after a failed attempt.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos.min(self.tokens.len());
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// Keyword or operator code of the current token.
    #[inline]
    pub fn current_code(&self) -> Option<TokenCode> {
        self.current().and_then(Token::code)
    }

    /// Token `n` positions ahead of the current one.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    #[inline]
    pub fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }

    /// Span of the last token, or the first column when there are none.
    pub fn last_span(&self) -> SourceSpan {
        self.tokens
            .last()
            .map_or(SourceSpan::point(1, 1), |t| t.span)
    }

    /// Check if the current token is the given keyword or operator.
    #[inline]
    pub fn check(&self, code: TokenCode) -> bool {
        self.current().is_some_and(|t| t.is(code))
    }

    /// Check if the token `n` ahead is the given keyword or operator.
    #[inline]
    pub fn check_at(&self, n: usize, code: TokenCode) -> bool {
        self.peek(n).is_some_and(|t| t.is(code))
    }

    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        self.current().is_some_and(|t| t.is_in(set))
    }

    /// The current token's text if it is a name.
    #[inline]
    pub fn check_name(&self) -> Option<&'a str> {
        match self.current_kind() {
            Some(TokenKind::Name(name)) => Some(name),
            _ => None,
        }
    }

    /// Advance past the current token and return it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, token = %token.kind, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it is `code`.
    #[inline]
    pub fn eat(&mut self, code: TokenCode) -> bool {
        if self.check(code) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a name token, returning its text.
    pub fn eat_name(&mut self) -> Option<&'a str> {
        let name = self.check_name()?;
        self.pos += 1;
        Some(name)
    }
}
