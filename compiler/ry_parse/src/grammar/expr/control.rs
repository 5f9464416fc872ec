//! Blocks, `if` and `loop`.

use ry_ir::{ExprKind, Expression, Statement, TokenCode, TokenKind};

use crate::{MustParse, Parser};

/// Clauses between `loop` and `do`.
struct LoopClauses {
    init: Option<Box<Statement>>,
    condition: Box<Expression>,
    post: Option<Box<Statement>>,
}

impl LoopClauses {
    /// One part is the condition, two are `init; condition`, three are
    /// `init; condition; post`. The condition must be an expression;
    /// otherwise the parts are handed back untouched.
    fn from_parts(mut parts: Vec<Statement>) -> Result<Self, Vec<Statement>> {
        let condition_at = match parts.len() {
            1 => 0,
            2 | 3 => 1,
            _ => return Err(parts),
        };
        if !matches!(parts[condition_at], Statement::Expression(_)) {
            return Err(parts);
        }
        let post = if parts.len() == 3 { parts.pop() } else { None };
        let Some(Statement::Expression(condition)) = parts.pop() else {
            return Err(parts);
        };
        Ok(LoopClauses {
            init: parts.pop().map(Box::new),
            condition: Box::new(condition),
            post: post.map(Box::new),
        })
    }
}

impl Parser<'_> {
    /// `StringLiteral? '{' (Statement (';' Statement)* ';'?)? '}'`.
    pub(super) fn parse_block(&mut self) -> Option<Expression> {
        let label = match self.cursor.current_kind() {
            Some(TokenKind::StringLiteral(label)) => {
                self.cursor.advance();
                Some(label.clone())
            }
            _ => None,
        };
        if !self.cursor.eat(TokenCode::LBrace) {
            return None;
        }
        let mut statements = Vec::new();
        while !self.cursor.eat(TokenCode::RBrace) {
            statements.push(self.parse_statement(MustParse::No)?);
            if !self.cursor.eat(TokenCode::Semicolon) && !self.cursor.check(TokenCode::RBrace) {
                return None;
            }
        }
        Some(Expression::new(ExprKind::Block { label, statements }))
    }

    /// `'if' Expression 'do' Expression ('else' Expression)?`.
    pub(super) fn parse_if(&mut self) -> Option<Expression> {
        self.cursor.advance();
        let condition = self.parse_expression_with(MustParse::No)?;
        if !self.cursor.eat(TokenCode::Do) {
            return None;
        }
        let then_branch = self.parse_expression_with(MustParse::No)?;
        let else_branch = self.attempt(MustParse::No, "else branch", |p| {
            if !p.cursor.eat(TokenCode::Else) {
                return None;
            }
            p.parse_expression_with(MustParse::No)
        });
        Some(Expression::new(ExprKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }))
    }

    /// `'loop' (Clauses 'do')? Expression`.
    ///
    /// Clauses are up to three `;`-separated statements. Without a `do` the
    /// body is the expression the first statement starts with, so nothing
    /// after `loop` is parsed twice. Only a first statement that does not
    /// start with an expression (a definition, `break` or `continue`) makes
    /// the body parse again from right after `loop`, and those give up
    /// within a token or two.
    pub(super) fn parse_loop(&mut self) -> Option<Expression> {
        self.cursor.advance();
        let before_clauses = self.snapshot();

        let mut parts = Vec::with_capacity(3);
        let mut first_end = before_clauses;
        let mut complete = false;
        while let Some(part) = self.parse_statement(MustParse::No) {
            if parts.is_empty() {
                first_end = self.snapshot();
                if matches!(
                    part,
                    Statement::Assignment { .. } | Statement::CompoundAssignment { .. }
                ) {
                    first_end.cursor_pos = self.assignment_target_end;
                }
            }
            parts.push(part);
            if parts.len() == 3 || !self.cursor.eat(TokenCode::Semicolon) {
                complete = true;
                break;
            }
        }

        if complete && self.cursor.check(TokenCode::Do) {
            match LoopClauses::from_parts(parts) {
                Ok(clauses) => {
                    self.cursor.advance();
                    let body = self.parse_expression_with(MustParse::No)?;
                    return Some(Expression::new(ExprKind::Loop {
                        init: clauses.init,
                        condition: Some(clauses.condition),
                        post: clauses.post,
                        body: Box::new(body),
                    }));
                }
                Err(rejected) => parts = rejected,
            }
        }

        match parts.into_iter().next() {
            Some(
                Statement::Expression(body)
                | Statement::Assignment { target: body, .. }
                | Statement::CompoundAssignment { target: body, .. },
            ) => {
                self.restore(first_end);
                Some(bare_loop(body))
            }
            _ => {
                self.restore(before_clauses);
                let body = self.parse_expression_with(MustParse::No)?;
                Some(bare_loop(body))
            }
        }
    }
}

fn bare_loop(body: Expression) -> Expression {
    Expression::new(ExprKind::Loop {
        init: None,
        condition: None,
        post: None,
        body: Box::new(body),
    })
}
