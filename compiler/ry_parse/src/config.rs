//! Parser configuration.

/// Limits applied while parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting of statements, expressions and types accepted before
    /// the parser gives up with "nesting too deep".
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
