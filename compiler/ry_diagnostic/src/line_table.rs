//! Line boundary table.

/// Pre-computed line boundaries for O(1) lookup by line number.
///
/// For every line the table stores the byte offset of its first character
/// and the offset one past its last non-newline character. `\n`, `\r\n` and
/// a lone `\r` each end a line.
///
/// ```
/// use ry_diagnostic::LineTable;
///
/// let source = "ab\r\ncd\n";
/// let table = LineTable::build(source);
///
/// assert_eq!(table.line_count(), 3);
/// assert_eq!(table.line_text(source, 1), Some("ab"));
/// assert_eq!(table.line_text(source, 2), Some("cd"));
/// assert_eq!(table.line_text(source, 3), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineTable {
    /// `(start, end)` byte offsets per line, 0-indexed internally.
    lines: Vec<(usize, usize)>,
}

impl LineTable {
    /// Scan the source once, recording each line's boundaries.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    lines.push((start, i));
                    i += 1;
                    start = i;
                }
                b'\r' => {
                    lines.push((start, i));
                    i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    start = i;
                }
                _ => i += 1,
            }
        }
        lines.push((start, bytes.len()));
        LineTable { lines }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Byte offset of the first character of a 1-based line.
    #[inline]
    pub fn line_start(&self, line: u32) -> Option<usize> {
        self.entry(line).map(|(start, _)| start)
    }

    /// Byte offset one past the last non-newline character of a 1-based line.
    #[inline]
    pub fn line_end(&self, line: u32) -> Option<usize> {
        self.entry(line).map(|(_, end)| end)
    }

    /// Text of a 1-based line without its line break.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let (start, end) = self.entry(line)?;
        source.get(start..end)
    }

    fn entry(&self, line: u32) -> Option<(usize, usize)> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.lines.get(index).copied()
    }
}
