//! Lexer for ry.
//!
//! Turns source text into a [`TokenList`] in a single pass. Malformed input is
//! reported to the [`DiagnosticLedger`] and lexing continues; the lexer never
//! stops early.

mod cursor;
mod keywords;
mod lex_error;
mod literal;
mod number;
mod operators;

pub use lex_error::LexErrorKind;

use ry_diagnostic::{Diagnostic, DiagnosticLedger};
use ry_ir::{SourcePosition, SourceSpan, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use cursor::Cursor;

/// Lex `source`, appending problems to `ledger`.
pub fn lex(source: &str, ledger: &mut DiagnosticLedger) -> TokenList {
    Lexer::new(source).lex(ledger)
}

/// Single-pass lexer over one source text.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: TokenList,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            tokens: TokenList::new(),
        }
    }

    /// Run the lexer to the end of input.
    pub fn lex(mut self, ledger: &mut DiagnosticLedger) -> TokenList {
        let diagnostics_before = ledger.len();
        let mut cx = LexContext { ledger };
        while let Some(byte) = self.cursor.current() {
            let start = self.cursor.position();
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => {
                    self.cursor.bump();
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.lex_name(start),
                b'0'..=b'9' => {
                    let kind = self.lex_number(&mut cx, start);
                    self.push(kind, start);
                }
                b'"' => {
                    let kind = self.lex_string(&mut cx, start);
                    self.push(kind, start);
                }
                b'`' => {
                    let kind = self.lex_raw_string(&mut cx, start);
                    self.push(kind, start);
                }
                b'\'' => {
                    let kind = self.lex_char(&mut cx, start);
                    self.push(kind, start);
                }
                b'/' if self.cursor.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.cursor.peek(1) == Some(b'*') => self.skip_block_comment(&mut cx, start),
                _ => self.lex_operator_or_unknown(&mut cx, start),
            }
            for pos in self.cursor.drain_lf_cr() {
                cx.error(LexErrorKind::LineFeedCarriageReturn, SourceSpan::point(pos.line, pos.column));
            }
        }
        debug!(
            tokens = self.tokens.len(),
            diagnostics = cx.ledger.len() - diagnostics_before,
            "lexed source"
        );
        self.tokens
    }

    /// Push a token spanning from `start` to the last consumed byte.
    fn push(&mut self, kind: TokenKind, start: SourcePosition) {
        let span = SourceSpan::between(start, self.cursor.prev_position());
        let token = Token::new(kind, span);
        trace!(token = %token, "token");
        self.tokens.push(token);
    }

    fn lex_name(&mut self, start: SourcePosition) {
        let offset = self.cursor.offset();
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice(offset, self.cursor.offset());
        let kind = if let Some(value) = keywords::bool_literal(text) {
            TokenKind::BoolLiteral(value)
        } else if let Some(code) = keywords::lookup(text) {
            TokenKind::Keyword(code)
        } else {
            TokenKind::Name(text.to_string())
        };
        self.push(kind, start);
    }

    fn lex_operator_or_unknown(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) {
        if let Some((code, len)) = operators::longest_match(self.cursor.rest()) {
            self.cursor.bump_n(len);
            self.push(TokenKind::Operator(code), start);
            return;
        }
        let c = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.bump_char();
        let span = SourceSpan::between(start, self.cursor.prev_position());
        cx.error(LexErrorKind::UnrecognizedCharacter(c), span);
    }

    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|b| b != b'\n' && b != b'\r');
    }

    fn skip_block_comment(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) {
        self.cursor.bump_n(2);
        loop {
            if self.cursor.is_eof() {
                cx.error(
                    LexErrorKind::UnterminatedBlockComment,
                    SourceSpan::new(start.line, start.column, start.line, start.column + 1),
                );
                return;
            }
            if self.cursor.starts_with(b"*/") {
                self.cursor.bump_n(2);
                return;
            }
            self.cursor.bump();
        }
    }
}

/// Mutable state shared by the lexing routines.
struct LexContext<'l> {
    ledger: &'l mut DiagnosticLedger,
}

impl LexContext<'_> {
    fn error(&mut self, kind: LexErrorKind, span: SourceSpan) {
        trace!(%span, error = %kind, "lex error");
        self.ledger
            .push(Diagnostic::new(kind.severity(), kind.to_string(), span));
    }
}

#[cfg(test)]
mod tests;
