//! String and character literals.
//!
//! Strings are `"..."` (single line, escapes) or `"""..."""` (multi-line,
//! escapes, a backslash before a line break removes it). Raw strings use
//! backticks the same way, single or tripled, and take no escapes. Every
//! malformed literal still yields a token holding whatever content was read.

use ry_ir::{SourcePosition, SourceSpan, TokenKind};

use crate::{LexContext, LexErrorKind, Lexer};

impl Lexer<'_> {
    pub(crate) fn lex_string(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        if self.cursor.starts_with(b"\"\"\"") {
            return self.lex_multiline_string(cx, start);
        }
        self.cursor.bump();
        let mut content = Vec::new();
        loop {
            match self.cursor.current() {
                None => {
                    cx.error(LexErrorKind::UnterminatedString, SourceSpan::point(start.line, start.column));
                    break;
                }
                Some(b'"') => {
                    self.cursor.bump();
                    break;
                }
                Some(b'\\') => self.lex_escape(cx, &mut content),
                Some(byte @ (b'\n' | b'\r')) => {
                    let pos = self.cursor.position();
                    cx.error(LexErrorKind::NewlineInString, SourceSpan::point(pos.line, pos.column));
                    self.push_line_break(byte, &mut content);
                }
                Some(byte) => {
                    content.push(byte);
                    self.cursor.bump();
                }
            }
        }
        TokenKind::StringLiteral(into_string(content))
    }

    fn lex_multiline_string(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        self.cursor.bump_n(3);
        let mut content = Vec::new();
        loop {
            if self.cursor.starts_with(b"\"\"\"") {
                self.cursor.bump_n(3);
                break;
            }
            match self.cursor.current() {
                None => {
                    cx.error(
                        LexErrorKind::UnterminatedString,
                        SourceSpan::new(start.line, start.column, start.line, start.column + 2),
                    );
                    break;
                }
                Some(b'\\') if matches!(self.cursor.peek(1), Some(b'\n' | b'\r')) => {
                    // Line continuation: drop the backslash and the break.
                    self.cursor.bump_n(2);
                }
                Some(b'\\') => self.lex_escape(cx, &mut content),
                Some(byte @ (b'\n' | b'\r')) => self.push_line_break(byte, &mut content),
                Some(byte) => {
                    content.push(byte);
                    self.cursor.bump();
                }
            }
        }
        TokenKind::StringLiteral(into_string(content))
    }

    /// `` `...` `` or ```` ```...``` ````: no escapes, line breaks kept.
    pub(crate) fn lex_raw_string(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        let multiline = self.cursor.starts_with(b"```");
        let delimiter: &[u8] = if multiline { b"```" } else { b"`" };
        self.cursor.bump_n(delimiter.len());
        let mut content = Vec::new();
        loop {
            if self.cursor.starts_with(delimiter) {
                self.cursor.bump_n(delimiter.len());
                break;
            }
            match self.cursor.current() {
                None => {
                    let end_column = start.column + u32::from(multiline) * 2;
                    cx.error(
                        LexErrorKind::UnterminatedString,
                        SourceSpan::new(start.line, start.column, start.line, end_column),
                    );
                    break;
                }
                Some(byte @ (b'\n' | b'\r')) => {
                    if !multiline {
                        let pos = self.cursor.position();
                        cx.error(LexErrorKind::NewlineInString, SourceSpan::point(pos.line, pos.column));
                    }
                    self.push_line_break(byte, &mut content);
                }
                Some(byte) => {
                    content.push(byte);
                    self.cursor.bump();
                }
            }
        }
        TokenKind::StringLiteral(into_string(content))
    }

    pub(crate) fn lex_char(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        self.cursor.bump();
        let value = match self.cursor.current() {
            Some(b'\'') => {
                self.cursor.bump();
                cx.error(LexErrorKind::EmptyChar, self.span_from(start));
                return TokenKind::CharLiteral(0);
            }
            None | Some(b'\n' | b'\r') => {
                cx.error(LexErrorKind::UnterminatedChar, SourceSpan::point(start.line, start.column));
                return TokenKind::CharLiteral(0);
            }
            Some(b'\\') => {
                let mut content = Vec::with_capacity(1);
                self.lex_escape(cx, &mut content);
                content.first().copied().unwrap_or(0)
            }
            Some(byte) if byte.is_ascii() => {
                self.cursor.bump();
                byte
            }
            Some(_) => {
                let char_start = self.cursor.position();
                self.cursor.bump_char();
                cx.error(
                    LexErrorKind::WideChar,
                    SourceSpan::between(char_start, self.cursor.prev_position()),
                );
                0
            }
        };

        if self.cursor.current() == Some(b'\'') {
            self.cursor.bump();
            return TokenKind::CharLiteral(value);
        }
        // Too many characters if a closing quote follows on the same line.
        let closing = self
            .cursor
            .rest()
            .iter()
            .take_while(|b| **b != b'\n' && **b != b'\r')
            .position(|b| *b == b'\'');
        match closing {
            Some(distance) => {
                self.cursor.bump_n(distance + 1);
                cx.error(LexErrorKind::MultiCharLiteral, self.span_from(start));
            }
            None => {
                cx.error(LexErrorKind::UnterminatedChar, SourceSpan::point(start.line, start.column));
            }
        }
        TokenKind::CharLiteral(value)
    }

    /// Lex an escape sequence starting at the backslash.
    ///
    /// Valid escapes append their byte to `content`; invalid ones are
    /// reported and dropped.
    fn lex_escape(&mut self, cx: &mut LexContext<'_>, content: &mut Vec<u8>) {
        let start = self.cursor.position();
        self.cursor.bump();
        let Some(byte) = self.cursor.current() else {
            // The caller reports the unterminated literal.
            return;
        };
        let value = match byte {
            b'a' => 0x07,
            b'b' => 0x08,
            b'e' => 0x1b,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'v' => 0x0b,
            b'"' | b'\'' | b'`' | b'\\' => byte,
            b'0'..=b'9' => {
                self.lex_numeric_escape(cx, start, content);
                return;
            }
            _ => {
                let c = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                self.cursor.bump_char();
                cx.error(
                    LexErrorKind::InvalidEscape(c),
                    SourceSpan::between(start, self.cursor.prev_position()),
                );
                return;
            }
        };
        self.cursor.bump();
        content.push(value);
    }

    /// Decimal escape of up to three digits, valid in 1..=127.
    fn lex_numeric_escape(&mut self, cx: &mut LexContext<'_>, start: SourcePosition, content: &mut Vec<u8>) {
        let mut value = 0u32;
        for _ in 0..3 {
            match self.cursor.current() {
                Some(digit @ b'0'..=b'9') => {
                    value = value * 10 + u32::from(digit - b'0');
                    self.cursor.bump();
                }
                _ => break,
            }
        }
        match u8::try_from(value) {
            Ok(byte @ 1..=127) => content.push(byte),
            _ => cx.error(
                LexErrorKind::EscapeOutOfBounds,
                SourceSpan::between(start, self.cursor.prev_position()),
            ),
        }
    }

    /// Append a line break as written in the source, consuming it.
    fn push_line_break(&mut self, byte: u8, content: &mut Vec<u8>) {
        content.push(byte);
        if byte == b'\r' && self.cursor.peek(1) == Some(b'\n') {
            content.push(b'\n');
        }
        self.cursor.bump();
    }
}

/// Literal content is valid UTF-8: source bytes are copied verbatim and
/// escapes only produce ASCII.
fn into_string(content: Vec<u8>) -> String {
    String::from_utf8(content)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
