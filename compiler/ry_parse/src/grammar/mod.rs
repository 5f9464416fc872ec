//! Grammar rules.
//!
//! - `stmt.rs`: statements, variable definitions and assignments
//! - `expr/`: expressions, operands and control flow
//! - `ty.rs`: types and struct fields

mod expr;
mod stmt;
mod ty;

use ry_ir::{Expression, TokenCode};

use crate::{MustParse, Parser};

impl Parser<'_> {
    /// `'=' Expression`, shared by definitions and struct field defaults.
    fn parse_initializer(&mut self) -> Option<Expression> {
        self.attempt(MustParse::No, "initializer", |p| {
            if !p.cursor.eat(TokenCode::Eq) {
                return None;
            }
            p.parse_expression_with(MustParse::No)
        })
    }
}
