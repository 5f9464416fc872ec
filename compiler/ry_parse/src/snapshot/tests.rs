use pretty_assertions::assert_eq;
use ry_diagnostic::DiagnosticLedger;
use ry_ir::TokenCode;

use crate::{MustParse, Parser, ParserConfig};

fn with_parser<R>(source: &str, f: impl FnOnce(&mut Parser<'_>) -> R) -> (R, DiagnosticLedger) {
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    let result = {
        let mut parser = Parser::new(&tokens, &mut ledger);
        f(&mut parser)
    };
    (result, ledger)
}

#[test]
fn test_snapshot_is_small() {
    assert!(std::mem::size_of::<super::ParserSnapshot>() <= 16);
}

#[test]
fn test_failed_attempt_restores_cursor() {
    let ((found, pos), ledger) = with_parser("a b", |p| {
        let found = p.attempt(MustParse::No, "two names then ';'", |p| {
            p.cursor.eat_name()?;
            p.cursor.eat_name()?;
            p.cursor.eat(TokenCode::Semicolon).then_some(())
        });
        (found, p.cursor.position())
    });
    assert_eq!(found, None);
    assert_eq!(pos, 0);
    assert!(ledger.is_empty());
}

#[test]
fn test_successful_attempt_keeps_position() {
    let ((found, pos), _) = with_parser("a b", |p| {
        let found = p.attempt(MustParse::No, "name", |p| p.cursor.eat_name().map(str::to_string));
        (found, p.cursor.position())
    });
    assert_eq!(found.as_deref(), Some("a"));
    assert_eq!(pos, 1);
}

#[test]
fn test_must_parse_reports_at_start_token() {
    let (_, ledger) = with_parser("a 1", |p| {
        p.cursor.advance();
        p.attempt(MustParse::Yes, "name", |p| p.cursor.eat_name().map(str::to_string))
    });
    assert_eq!(ledger.len(), 1);
    let diag = &ledger.diagnostics()[0];
    assert_eq!(diag.message, "expected name, got integer literal 1");
    assert_eq!(diag.span, ry_ir::SourceSpan::point(1, 3));
}

#[test]
fn test_must_parse_at_end_of_input() {
    let (_, ledger) = with_parser("ab", |p| {
        p.cursor.advance();
        p.attempt(MustParse::Yes, "expression", |_| None::<()>)
    });
    assert_eq!(ledger.diagnostics()[0].message, "expected expression, got end of input");
    assert_eq!(ledger.diagnostics()[0].span, ry_ir::SourceSpan::new(1, 1, 1, 2));
}

#[test]
fn test_depth_limit_reports_once() {
    let source = "a";
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    {
        let mut parser =
            Parser::new(&tokens, &mut ledger).with_config(ParserConfig::default().with_max_depth(2));
        fn descend(p: &mut Parser<'_>, n: usize) -> Option<()> {
            if n == 0 {
                return Some(());
            }
            p.nested(|p| descend(p, n - 1))
        }
        assert_eq!(descend(&mut parser, 2), Some(()));
        assert_eq!(descend(&mut parser, 3), None);
        assert_eq!(descend(&mut parser, 3), None);
        assert_eq!(parser.depth, 0);
    }
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.diagnostics()[0].message, "nesting too deep");
}
