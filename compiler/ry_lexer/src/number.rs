//! Numeric literals.
//!
//! Integers may carry a `0b`, `0o` or `0x` prefix and use `_` as a digit
//! separator. Decimal literals become floats when followed by `.digits`
//! and/or an exponent. Errors are reported and the literal's value falls
//! back to zero.

use ry_ir::{SourcePosition, SourceSpan, TokenKind};

use crate::{LexContext, LexErrorKind, Lexer};

/// Result of scanning a run of digits and separators.
struct DigitRun {
    value: u128,
    digits: usize,
    overflow: bool,
    invalid_digit: bool,
    trailing_separator: bool,
}

impl Lexer<'_> {
    pub(crate) fn lex_number(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        let radix = match (self.cursor.current(), self.cursor.peek(1)) {
            (Some(b'0'), Some(b'b')) => Some((2, "binary")),
            (Some(b'0'), Some(b'o')) => Some((8, "octal")),
            (Some(b'0'), Some(b'x')) => Some((16, "hex")),
            _ => None,
        };
        match radix {
            Some((radix, base)) => {
                self.cursor.bump_n(2);
                self.lex_prefixed_integer(cx, start, radix, base)
            }
            None => self.lex_decimal(cx, start),
        }
    }

    fn lex_prefixed_integer(
        &mut self,
        cx: &mut LexContext<'_>,
        start: SourcePosition,
        radix: u32,
        base: &'static str,
    ) -> TokenKind {
        let run = self.scan_digits(cx, radix, base);
        let mut ok = true;
        if run.digits == 0 {
            if !run.invalid_digit {
                cx.error(LexErrorKind::MalformedInteger, self.span_from(start));
            }
            ok = false;
        }
        ok &= self.check_run(cx, start, &run, true);
        ok &= self.check_glued_letters(cx, start);
        TokenKind::IntLiteral(if ok { run.value } else { 0 })
    }

    fn lex_decimal(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> TokenKind {
        let text_start = self.cursor.offset();
        let run = self.scan_digits(cx, 10, "decimal");
        let mut ok = self.check_run(cx, start, &run, false);

        let has_fraction = self.cursor.current() == Some(b'.')
            && self.cursor.peek(1).is_some_and(|b| b.is_ascii_digit());
        if has_fraction {
            self.cursor.bump();
            let fraction = self.scan_digits(cx, 10, "decimal");
            ok &= self.check_run(cx, start, &fraction, false);
        }

        let has_exponent = matches!(self.cursor.current(), Some(b'e' | b'E'));
        if has_exponent {
            self.cursor.bump();
            if matches!(self.cursor.current(), Some(b'+' | b'-')) {
                self.cursor.bump();
            }
            let exponent = self.scan_digits(cx, 10, "decimal");
            if exponent.digits == 0 {
                cx.error(LexErrorKind::UnfinishedExponent, self.span_from(start));
                ok = false;
            } else {
                ok &= self.check_run(cx, start, &exponent, false);
            }
        }

        ok &= self.check_glued_letters(cx, start);

        if !has_fraction && !has_exponent {
            if ok && run.overflow {
                cx.error(LexErrorKind::IntegerOverflow, self.span_from(start));
                ok = false;
            }
            return TokenKind::IntLiteral(if ok { run.value } else { 0 });
        }
        if !ok {
            return TokenKind::FloatLiteral(0.0);
        }
        let text: String = self
            .cursor
            .slice(text_start, self.cursor.offset())
            .chars()
            .filter(|c| *c != '_')
            .collect();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::FloatLiteral(value),
            _ => {
                cx.error(LexErrorKind::FloatOutOfRange, self.span_from(start));
                TokenKind::FloatLiteral(0.0)
            }
        }
    }

    /// Scan digits of `radix` and `_` separators.
    ///
    /// Decimal digits that are invalid for the radix are consumed and
    /// reported once per run; letters end the run.
    fn scan_digits(&mut self, cx: &mut LexContext<'_>, radix: u32, base: &'static str) -> DigitRun {
        let mut run = DigitRun {
            value: 0,
            digits: 0,
            overflow: false,
            invalid_digit: false,
            trailing_separator: false,
        };
        while let Some(byte) = self.cursor.current() {
            if byte == b'_' {
                run.trailing_separator = true;
                self.cursor.bump();
                continue;
            }
            let c = char::from(byte);
            if let Some(digit) = c.to_digit(radix) {
                run.trailing_separator = false;
                run.digits += 1;
                match run
                    .value
                    .checked_mul(u128::from(radix))
                    .and_then(|v| v.checked_add(u128::from(digit)))
                {
                    Some(v) => run.value = v,
                    None => run.overflow = true,
                }
                self.cursor.bump();
            } else if c.is_ascii_digit() {
                if !run.invalid_digit {
                    let pos = self.cursor.position();
                    cx.error(
                        LexErrorKind::InvalidDigit { digit: c, base },
                        SourceSpan::point(pos.line, pos.column),
                    );
                    run.invalid_digit = true;
                }
                run.trailing_separator = false;
                self.cursor.bump();
            } else {
                break;
            }
        }
        run
    }

    /// Report separator and overflow problems of a digit run.
    ///
    /// Overflow only matters for integer values; float digits are parsed
    /// from the source text instead.
    fn check_run(
        &self,
        cx: &mut LexContext<'_>,
        start: SourcePosition,
        run: &DigitRun,
        check_overflow: bool,
    ) -> bool {
        if run.trailing_separator {
            cx.error(LexErrorKind::TrailingSeparator, self.span_from(start));
            return false;
        }
        if run.invalid_digit {
            return false;
        }
        if check_overflow && run.overflow {
            cx.error(LexErrorKind::IntegerOverflow, self.span_from(start));
            return false;
        }
        true
    }

    /// Letters directly after a number make the whole run malformed.
    fn check_glued_letters(&mut self, cx: &mut LexContext<'_>, start: SourcePosition) -> bool {
        if !self
            .cursor
            .current()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return true;
        }
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        cx.error(LexErrorKind::MalformedNumber, self.span_from(start));
        false
    }

    /// Span from `start` to the last consumed byte.
    pub(crate) fn span_from(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::between(start, self.cursor.prev_position())
    }
}
