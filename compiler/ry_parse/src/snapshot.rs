//! Speculative parsing.
//!
//! Every grammar rule is an attempt: on success the cursor sits past the
//! parsed node, on failure it is back where the rule started. The rollback
//! lives in [`Parser::attempt`] so individual rules never restore by hand.
//!
//! Rules that take a [`MustParse`] report a failure only when asked to.
//! Alternatives tried speculatively always pass [`MustParse::No`]; only the
//! entry points pass [`MustParse::Yes`], so one failed parse produces one
//! "expected X, got Y" diagnostic instead of one per alternative.
//!
//! ```text
//! // Try a labeled block first, fall back to a plain literal.
//! if let Some(block) = self.attempt(MustParse::No, "block", |p| p.parse_block()) {
//!     return Some(block);
//! }
//! self.parse_literal()
//! ```

use tracing::trace;

use crate::Parser;

/// Whether a failed attempt is a syntax error or just "no match".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MustParse {
    Yes,
    No,
}

/// Parser state captured before an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) depth: usize,
}

impl Parser<'_> {
    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            depth: self.depth,
        }
    }

    #[inline]
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.depth = snapshot.depth;
    }

    /// Run `rule`, rolling the cursor back if it fails.
    ///
    /// With [`MustParse::Yes`] a failure also records "expected `what`, got
    /// <token>" at the token where the attempt started.
    pub(crate) fn attempt<T>(
        &mut self,
        must: MustParse,
        what: &str,
        rule: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let snapshot = self.snapshot();
        trace!(pos = snapshot.cursor_pos, what, "attempt");
        if let Some(node) = rule(self) {
            return Some(node);
        }
        trace!(pos = snapshot.cursor_pos, what, "backtrack");
        self.restore(snapshot);
        if must == MustParse::Yes && !self.depth_exceeded {
            self.report_expected(what, snapshot.cursor_pos);
        }
        None
    }

    /// Run a recursive rule one level deeper.
    ///
    /// Grows the stack on demand and fails once the configured depth limit is
    /// reached, reporting "nesting too deep" the first time.
    pub(crate) fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.config.max_depth {
            if !self.depth_exceeded {
                self.depth_exceeded = true;
                let span = self
                    .cursor
                    .current()
                    .map_or_else(|| self.cursor.last_span(), |t| t.span);
                self.error("nesting too deep", span);
            }
            return None;
        }
        self.depth += 1;
        let result = ry_stack::ensure_sufficient_stack(|| rule(self));
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests;
