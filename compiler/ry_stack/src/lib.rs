//! Stack growth for deep recursion.
//!
//! The parser descends once per nested expression, block and type. Wrapping
//! each descent in [`ensure_sufficient_stack`] moves the work onto a fresh
//! stack segment when the current one runs low, so nesting depth is bounded
//! by the parser's own limit rather than by the thread's stack size.
//!
//! On `wasm32` the call is a passthrough.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn parse_operand(&mut self) -> Option<Expression> {
///     ensure_sufficient_stack(|| self.parse_operand_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
