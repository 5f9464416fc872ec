//! Parser tests.
//!
//! - `expr`: operands, precedence climbing, calls and control flow
//! - `stmt`: statements, assignments and `parse()` diagnostics
//! - `ty`: types and struct fields
//! - `unit`: whole units, recovery and nesting limits


use ry_diagnostic::DiagnosticLedger;
use ry_ir::{
    AstNode, BinaryOperationKind, Expression, Literal, Statement, Type, UnaryOperationKind,
};

use crate::Parser;

/// Lex `source` and run `f` on a parser over the tokens.
pub(super) fn parse_with(
    source: &str,
    f: impl FnOnce(&mut Parser<'_>) -> Option<AstNode>,
) -> (Option<AstNode>, DiagnosticLedger) {
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    let root = f(&mut Parser::new(&tokens, &mut ledger));
    (root, ledger)
}

pub(super) fn messages(ledger: &DiagnosticLedger) -> Vec<String> {
    ledger
        .diagnostics()
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

fn assert_clean(source: &str, ledger: &DiagnosticLedger) {
    assert!(
        ledger.is_empty(),
        "unexpected diagnostics for {source:?}:\n{}",
        ledger.render()
    );
}

/// Parse an expression that must be free of diagnostics.
pub(super) fn expr(source: &str) -> Expression {
    let (root, ledger) = parse_with(source, |p| p.parse_expression());
    assert_clean(source, &ledger);
    match root {
        Some(AstNode::Expression(e)) => e,
        other => panic!("expected an expression for {source:?}, got {other:?}"),
    }
}

/// Parse a statement that must be free of diagnostics.
pub(super) fn stmt(source: &str) -> Statement {
    let (root, ledger) = parse_with(source, |p| p.parse());
    assert_clean(source, &ledger);
    match root {
        Some(AstNode::Statement(s)) => s,
        other => panic!("expected a statement for {source:?}, got {other:?}"),
    }
}

/// Parse a type that must be free of diagnostics.
pub(super) fn ty(source: &str) -> Type {
    let (root, ledger) = parse_with(source, |p| p.parse_type());
    assert_clean(source, &ledger);
    match root {
        Some(AstNode::Type(t)) => t,
        other => panic!("expected a type for {source:?}, got {other:?}"),
    }
}

// Tree builders

pub(super) fn name(s: &str) -> Expression {
    Expression::name(s)
}

pub(super) fn int(v: u128) -> Expression {
    Expression::literal(Literal::Int(v))
}

pub(super) fn bin(kind: BinaryOperationKind, left: Expression, right: Expression) -> Expression {
    Expression::binary(kind, left, right)
}

pub(super) fn un(kind: UnaryOperationKind, operand: Expression) -> Expression {
    Expression::unary(kind, operand)
}
