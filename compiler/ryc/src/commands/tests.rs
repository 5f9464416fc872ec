#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::{check_source, lex_source, parse_source, read_source};
use crate::args::TreeFormat;
use crate::CliError;

#[test]
fn test_lex_lists_tokens() {
    let outcome = lex_source("t", "x := 1");
    let kinds: Vec<&str> = outcome
        .output
        .lines()
        .map(|line| line.split_once(' ').map_or(line, |(_, kind)| kind))
        .collect();
    assert_eq!(kinds, vec!["NAME(x)", "OPERATOR(:=)", "INT_LIT(1)"]);
    assert!(outcome.diagnostics.is_empty());
    assert!(!outcome.has_errors);
}

#[test]
fn test_lex_warning_is_not_failure() {
    let outcome = lex_source("t", "a $ b");
    assert_eq!(outcome.output.lines().count(), 2);
    assert!(outcome.diagnostics.contains("unrecognized character '$'"));
    assert!(!outcome.has_errors);
}

#[test]
fn test_parse_pretty_unit() {
    let outcome = parse_source("t", "x := 1;\ny = (x + 2) * 3", TreeFormat::Pretty, false);
    assert_eq!(outcome.output, "{x := 1; y = (x + 2) * 3}\n");
    assert!(!outcome.has_errors);
}

#[test]
fn test_parse_statement_tree() {
    let outcome = parse_source("t", "a + 1", TreeFormat::Tree, true);
    assert_eq!(
        outcome.output,
        "ExpressionStatement\n  BinaryOperation Add\n    Name a\n    Literal Int 1\n"
    );
}

#[test]
fn test_parse_statement_reports_leftovers() {
    let outcome = parse_source("t", "a; b", TreeFormat::Pretty, true);
    assert_eq!(outcome.output, "a\n");
    assert!(outcome.has_errors);
    assert!(outcome
        .diagnostics
        .contains("expected end of input, got ';'"));
}

#[test]
fn test_check_summary() {
    let clean = check_source("t", "x := 1");
    assert_eq!(clean.output, "0 error(s), 0 warning(s)\n");
    assert!(!clean.has_errors);

    let broken = check_source("t", "x := $1; ]");
    assert_eq!(broken.output, "1 error(s), 1 warning(s)\n");
    assert!(broken.has_errors);
}

#[test]
fn test_missing_file() {
    let path = std::path::Path::new("definitely/not/here.ry");
    let err = read_source(path).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read 'definitely/not/here.ry'"));
}
