//! Operands: names, literals, groups, struct literals and unary operations.

use ry_ir::{
    Expression, Literal, StructLiteral, StructLiteralField, TokenCode, TokenKind,
    UnaryOperationKind,
};
use tracing::trace;

use crate::{MustParse, Parser};

impl Parser<'_> {
    /// Parse one operand.
    ///
    /// Dispatches on the current token; only a string literal has two
    /// readings (a block label or a plain literal) and tries the block first.
    pub(super) fn parse_operand(&mut self) -> Option<Expression> {
        self.attempt(MustParse::No, "operand", Self::parse_operand_inner)
    }

    fn parse_operand_inner(&mut self) -> Option<Expression> {
        let token = self.cursor.current()?;
        trace!(pos = self.cursor.position(), token = %token.kind, "parse_operand");
        match &token.kind {
            TokenKind::Name(name) => {
                self.cursor.advance();
                Some(Expression::name(name.clone()))
            }
            TokenKind::StringLiteral(_) if self.cursor.check_at(1, TokenCode::LBrace) => self
                .attempt(MustParse::No, "labeled block", Self::parse_block)
                .or_else(|| self.parse_literal()),
            TokenKind::IntLiteral(_)
            | TokenKind::FloatLiteral(_)
            | TokenKind::StringLiteral(_)
            | TokenKind::CharLiteral(_)
            | TokenKind::BoolLiteral(_) => self.parse_literal(),
            TokenKind::Keyword(code) | TokenKind::Operator(code) => match code {
                TokenCode::LParen => self.parse_group(),
                TokenCode::LBrace => self.parse_block(),
                TokenCode::Null | TokenCode::LBracket => self.parse_literal(),
                TokenCode::If => self.parse_if(),
                TokenCode::Loop => self.parse_loop(),
                _ if UnaryOperationKind::TOKEN_SET.contains(*code) => self.parse_unary(),
                _ => None,
            },
        }
    }

    /// `'(' Expression ')'`; the inner expression ignores any enclosing
    /// operator.
    fn parse_group(&mut self) -> Option<Expression> {
        self.cursor.advance();
        let inner = self.parse_expression_above(None)?;
        if !self.cursor.eat(TokenCode::RParen) {
            return None;
        }
        Some(inner.grouped())
    }

    fn parse_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.current()?;
        let literal = match &token.kind {
            TokenKind::IntLiteral(value) => Literal::Int(*value),
            TokenKind::FloatLiteral(value) => Literal::Float(*value),
            TokenKind::StringLiteral(value) => Literal::String(value.clone()),
            TokenKind::CharLiteral(value) => Literal::Char(*value),
            TokenKind::BoolLiteral(value) => Literal::Bool(*value),
            TokenKind::Keyword(TokenCode::Null) => Literal::Null,
            TokenKind::Operator(TokenCode::LBracket) => {
                let fields = self.parse_struct_literal()?;
                return Some(Expression::literal(Literal::Struct(fields)));
            }
            _ => return None,
        };
        self.cursor.advance();
        Some(Expression::literal(literal))
    }

    /// `'[' (Field (',' Field)* ','?)? ']'` with `Field := (Name '=')? Expression`.
    pub(super) fn parse_struct_literal(&mut self) -> Option<StructLiteral> {
        if !self.cursor.eat(TokenCode::LBracket) {
            return None;
        }
        let mut fields = Vec::new();
        while !self.cursor.eat(TokenCode::RBracket) {
            let name = if self.cursor.check_name().is_some() && self.cursor.check_at(1, TokenCode::Eq) {
                let name = self.cursor.eat_name().map(str::to_string);
                self.cursor.advance();
                name
            } else {
                None
            };
            let value = self.parse_expression_with(MustParse::No)?;
            fields.push(StructLiteralField {
                name,
                value: Box::new(value),
            });
            if !self.cursor.eat(TokenCode::Comma) && !self.cursor.check(TokenCode::RBracket) {
                return None;
            }
        }
        Some(StructLiteral { fields })
    }

    /// `UnaryToken Operand Postfix*`; binds tighter than any binary operator.
    fn parse_unary(&mut self) -> Option<Expression> {
        let kind = self
            .cursor
            .current_code()
            .and_then(UnaryOperationKind::from_code)?;
        self.cursor.advance();
        let operand = self.nested(Self::parse_operand)?;
        let operand = self.parse_postfix(operand);
        Some(Expression::unary(kind, operand))
    }
}
