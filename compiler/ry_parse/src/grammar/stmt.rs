//! Statement parsing.

use ry_ir::{CompoundAssignmentKind, Statement, TokenCode, TokenKind};
use tracing::trace;

use crate::{MustParse, Parser};

impl Parser<'_> {
    /// Parse a statement.
    ///
    /// Alternatives in order: `continue`, `break`, variable definition,
    /// assignment, compound assignment, expression.
    pub(crate) fn parse_statement(&mut self, must: MustParse) -> Option<Statement> {
        self.attempt(must, "statement", |p| p.nested(Self::parse_statement_inner))
    }

    fn parse_statement_inner(&mut self) -> Option<Statement> {
        if self.cursor.eat(TokenCode::Continue) {
            return Some(Statement::Continue);
        }
        if self.cursor.check(TokenCode::Break) {
            return self.parse_break();
        }
        if let Some(definition) = self.attempt(
            MustParse::No,
            "variable definition",
            Self::parse_variable_definition,
        ) {
            return Some(definition);
        }
        self.parse_assignment_or_expression()
    }

    /// `'break' Label? Expression?`, where the label is a string literal.
    fn parse_break(&mut self) -> Option<Statement> {
        self.cursor.advance();
        let label = match self.cursor.current_kind() {
            Some(TokenKind::StringLiteral(label)) => {
                self.cursor.advance();
                Some(label.clone())
            }
            _ => None,
        };
        let value = self.parse_expression_with(MustParse::No);
        Some(Statement::Break { label, value })
    }

    /// `name: T`, `name: T = value` or `name := value`.
    fn parse_variable_definition(&mut self) -> Option<Statement> {
        let name = self.cursor.eat_name()?.to_string();
        if self.cursor.eat(TokenCode::ColonEq) {
            let value = self.parse_expression_with(MustParse::No)?;
            return Some(Statement::VariableDefinition {
                name,
                ty: None,
                value: Some(value),
            });
        }
        if !self.cursor.eat(TokenCode::Colon) {
            return None;
        }
        let ty = self.parse_type_with(MustParse::No)?;
        let value = self.parse_initializer();
        Some(Statement::VariableDefinition {
            name,
            ty: Some(ty),
            value,
        })
    }

    /// Assignment, compound assignment or a bare expression.
    ///
    /// All three start with an expression, which is parsed once. An
    /// assignment needs an lvalue-shaped target and a value; when either is
    /// missing the statement is just the expression and the cursor stays
    /// right after it.
    fn parse_assignment_or_expression(&mut self) -> Option<Statement> {
        let target = self.parse_expression_with(MustParse::No)?;
        if !target.is_lvalue() {
            return Some(Statement::Expression(target));
        }

        let after_target = self.snapshot();
        if self.cursor.eat(TokenCode::Eq) {
            if let Some(value) = self.parse_expression_with(MustParse::No) {
                self.assignment_target_end = after_target.cursor_pos;
                return Some(Statement::Assignment { target, value });
            }
        } else if let Some(kind) = self
            .cursor
            .current_code()
            .and_then(CompoundAssignmentKind::from_code)
        {
            self.cursor.advance();
            if let Some(value) = self.parse_expression_with(MustParse::No) {
                self.assignment_target_end = after_target.cursor_pos;
                return Some(Statement::CompoundAssignment {
                    kind,
                    target,
                    value,
                });
            }
        }
        trace!(pos = after_target.cursor_pos, "statement is a plain expression");
        self.restore(after_target);
        Some(Statement::Expression(target))
    }
}
