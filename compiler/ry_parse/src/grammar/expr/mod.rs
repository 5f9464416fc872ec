//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point, precedence climbing and postfix calls
//! - `primary.rs`: operands, literals, struct literals and unary operations
//! - `control.rs`: blocks, `if` and `loop`

mod control;
mod primary;

use ry_ir::{BinaryOperationKind, ExprKind, Expression, TokenCode};
use tracing::trace;

use crate::{MustParse, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expression_with(&mut self, must: MustParse) -> Option<Expression> {
        self.attempt(must, "expression", |p| p.parse_expression_above(None))
    }

    /// Parse an operand, its postfix calls, then every binary operator that
    /// binds tighter than `enclosing`.
    ///
    /// An operator is taken only if its priority is strictly greater than the
    /// enclosing one, and its right side is parsed with the operator itself
    /// as the new enclosing kind. Equal priorities therefore associate left.
    fn parse_expression_above(
        &mut self,
        enclosing: Option<BinaryOperationKind>,
    ) -> Option<Expression> {
        self.nested(|p| {
            let operand = p.parse_operand()?;
            let operand = p.parse_postfix(operand);
            Some(p.parse_binary_tail(operand, enclosing))
        })
    }

    fn parse_binary_tail(
        &mut self,
        mut left: Expression,
        enclosing: Option<BinaryOperationKind>,
    ) -> Expression {
        while let Some(kind) = self.current_binary_operator() {
            if enclosing.is_some_and(|outer| kind.priority() <= outer.priority()) {
                break;
            }
            let before_operator = self.snapshot();
            self.cursor.advance();
            let Some(right) = self.parse_expression_above(Some(kind)) else {
                // Leave the operator for whoever comes next.
                trace!(
                    pos = before_operator.cursor_pos,
                    op = kind.spelling(),
                    "operator without right operand"
                );
                self.restore(before_operator);
                break;
            };
            left = Expression::binary(kind, left, right);
        }
        left
    }

    #[inline]
    fn current_binary_operator(&self) -> Option<BinaryOperationKind> {
        self.cursor
            .current_code()
            .and_then(BinaryOperationKind::from_code)
    }

    /// Apply struct literals directly after an operand as calls: `f[a, b = 1]`.
    fn parse_postfix(&mut self, mut callee: Expression) -> Expression {
        while self.cursor.check(TokenCode::LBracket) {
            let Some(arguments) =
                self.attempt(MustParse::No, "argument list", Self::parse_struct_literal)
            else {
                break;
            };
            callee = Expression::new(ExprKind::FunctionCall {
                function: Box::new(callee),
                arguments,
            });
        }
        callee
    }
}
