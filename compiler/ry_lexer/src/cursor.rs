//! Byte cursor with line/column tracking.
//!
//! Columns count bytes. `\r\n` and a lone `\r` are each one newline. A `\n`
//! directly followed by `\r` is two newlines; the cursor records where that
//! happens so the lexer can report it.

use ry_ir::SourcePosition;

pub(crate) struct Cursor<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
    /// Position of the most recently consumed byte.
    prev: SourcePosition,
    /// Positions of `\n\r` pairs seen since the last drain.
    lf_cr: Vec<SourcePosition>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            prev: SourcePosition::default(),
            lf_cr: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Byte `n` positions ahead of the current one.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Check whether the input at the cursor starts with `text`.
    #[inline]
    pub(crate) fn starts_with(&self, text: &[u8]) -> bool {
        self.bytes
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(text))
    }

    /// Remaining input, starting at the cursor.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or_default()
    }

    /// The character starting at the cursor.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Position of the next byte to be consumed.
    #[inline]
    pub(crate) fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    /// Position of the most recently consumed byte.
    #[inline]
    pub(crate) fn prev_position(&self) -> SourcePosition {
        self.prev
    }

    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    /// Consume one byte, updating line and column.
    ///
    /// A `\r\n` pair is consumed as a whole.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.prev = self.position();
        self.pos += 1;
        match byte {
            b'\n' => {
                if self.current() == Some(b'\r') {
                    self.lf_cr.push(self.prev);
                }
                self.newline();
            }
            b'\r' => {
                if self.current() == Some(b'\n') {
                    self.pos += 1;
                }
                self.newline();
            }
            _ => self.column += 1,
        }
        Some(byte)
    }

    /// Consume `n` bytes.
    pub(crate) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume the whole character at the cursor.
    pub(crate) fn bump_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.bump_n(width);
    }

    /// Consume bytes while `pred` holds.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Take the `\n\r` positions recorded so far.
    pub(crate) fn drain_lf_cr(&mut self) -> Vec<SourcePosition> {
        std::mem::take(&mut self.lf_cr)
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}
