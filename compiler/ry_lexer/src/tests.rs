use pretty_assertions::assert_eq;
use ry_diagnostic::{DiagnosticLedger, Severity};
use ry_ir::{SourceSpan, TokenCode, TokenKind};

use super::*;

fn lex_source(source: &str) -> (Vec<TokenKind>, DiagnosticLedger) {
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = lex(source, &mut ledger);
    (tokens.iter().map(|t| t.kind.clone()).collect(), ledger)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    let (kinds, ledger) = lex_source(source);
    assert!(ledger.is_empty(), "unexpected diagnostics:\n{}", ledger.render());
    kinds
}

fn messages(ledger: &DiagnosticLedger) -> Vec<String> {
    ledger.diagnostics().iter().map(|d| d.message.clone()).collect()
}

fn name(s: &str) -> TokenKind {
    TokenKind::Name(s.to_string())
}

fn op(code: TokenCode) -> TokenKind {
    TokenKind::Operator(code)
}

fn kw(code: TokenCode) -> TokenKind {
    TokenKind::Keyword(code)
}

// Names, keywords, operators

#[test]
fn test_names_and_keywords() {
    assert_eq!(
        kinds("if x do y else loop_ continue"),
        vec![
            kw(TokenCode::If),
            name("x"),
            kw(TokenCode::Do),
            name("y"),
            kw(TokenCode::Else),
            name("loop_"),
            kw(TokenCode::Continue),
        ]
    );
}

#[test]
fn test_primitive_keywords() {
    assert_eq!(
        kinds("i8 u128 f64 bool char i256"),
        vec![
            kw(TokenCode::I8),
            kw(TokenCode::U128),
            kw(TokenCode::F64),
            kw(TokenCode::Bool),
            kw(TokenCode::Char),
            name("i256"),
        ]
    );
}

#[test]
fn test_bool_literals() {
    assert_eq!(
        kinds("true false truthy"),
        vec![
            TokenKind::BoolLiteral(true),
            TokenKind::BoolLiteral(false),
            name("truthy"),
        ]
    );
}

#[test]
fn test_operators_longest_match() {
    assert_eq!(
        kinds("a<<=b<<c<d:=e=>f"),
        vec![
            name("a"),
            op(TokenCode::ShlEq),
            name("b"),
            op(TokenCode::Shl),
            name("c"),
            op(TokenCode::Lt),
            name("d"),
            op(TokenCode::ColonEq),
            name("e"),
            op(TokenCode::FatArrow),
            name("f"),
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("f[a, b]; {x} (y) ?~*&."),
        vec![
            name("f"),
            op(TokenCode::LBracket),
            name("a"),
            op(TokenCode::Comma),
            name("b"),
            op(TokenCode::RBracket),
            op(TokenCode::Semicolon),
            op(TokenCode::LBrace),
            name("x"),
            op(TokenCode::RBrace),
            op(TokenCode::LParen),
            name("y"),
            op(TokenCode::RParen),
            op(TokenCode::Question),
            op(TokenCode::Tilde),
            op(TokenCode::Star),
            op(TokenCode::Amp),
            op(TokenCode::Dot),
        ]
    );
}

// Spans

#[test]
fn test_spans_are_inclusive() {
    let source = "ab +=\n  c";
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = lex(source, &mut ledger);
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            SourceSpan::new(1, 1, 1, 2),
            SourceSpan::new(1, 4, 1, 5),
            SourceSpan::point(2, 3),
        ]
    );
}

#[test]
fn test_crlf_line_counting() {
    let source = "a\r\nb\rc";
    let mut ledger = DiagnosticLedger::new("test", source);
    let tokens = lex(source, &mut ledger);
    let lines: Vec<_> = tokens.iter().map(|t| t.span.start_line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert!(ledger.is_empty());
}

#[test]
fn test_lf_cr_is_flagged() {
    let (tokens, ledger) = lex_source("a\n\rb");
    assert_eq!(tokens, vec![name("a"), name("b")]);
    assert_eq!(messages(&ledger), vec!["line feed followed by carriage return"]);
    assert_eq!(ledger.diagnostics()[0].severity, Severity::Warning);
}

// Comments

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a // line\nb /* block\n */ c / d"),
        vec![name("a"), name("b"), name("c"), op(TokenCode::Slash), name("d")]
    );
}

#[test]
fn test_unterminated_block_comment_warns() {
    let (tokens, ledger) = lex_source("a /* never closed");
    assert_eq!(tokens, vec![name("a")]);
    assert_eq!(messages(&ledger), vec!["unterminated block comment"]);
    let diag = &ledger.diagnostics()[0];
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.span, SourceSpan::new(1, 3, 1, 4));
}

#[test]
fn test_block_comments_do_not_nest() {
    assert_eq!(
        kinds("/* a /* b */ c */"),
        vec![name("c"), op(TokenCode::Star), op(TokenCode::Slash)]
    );
}

// Numbers

#[test]
fn test_integer_literals() {
    assert_eq!(
        kinds("0 42 1_000 0x1F 0b1010 0o17 0x_ff"),
        vec![
            TokenKind::IntLiteral(0),
            TokenKind::IntLiteral(42),
            TokenKind::IntLiteral(1000),
            TokenKind::IntLiteral(31),
            TokenKind::IntLiteral(10),
            TokenKind::IntLiteral(15),
            TokenKind::IntLiteral(255),
        ]
    );
}

#[test]
fn test_float_literals() {
    assert_eq!(
        kinds("1.5 0.25 1e3 2.5e-1 1_0.0_1"),
        vec![
            TokenKind::FloatLiteral(1.5),
            TokenKind::FloatLiteral(0.25),
            TokenKind::FloatLiteral(1000.0),
            TokenKind::FloatLiteral(0.25),
            TokenKind::FloatLiteral(10.01),
        ]
    );
}

#[test]
fn test_dot_without_digit_is_member_access() {
    assert_eq!(
        kinds("1.x"),
        vec![TokenKind::IntLiteral(1), op(TokenCode::Dot), name("x")]
    );
}

#[test]
fn test_u128_max_fits() {
    let source = u128::MAX.to_string();
    assert_eq!(kinds(&source), vec![TokenKind::IntLiteral(u128::MAX)]);
}

#[test]
fn test_number_errors() {
    let cases = [
        ("100_", "trailing separator in numeric literal"),
        ("0x", "malformed integer literal"),
        ("0b102", "invalid digit '2' in binary integer literal"),
        ("0o78", "invalid digit '8' in octal integer literal"),
        ("1e", "unfinished exponent in float literal"),
        ("1.5e+", "unfinished exponent in float literal"),
        ("12ab", "malformed numeric literal"),
        ("340282366920938463463374607431768211456", "integer literal is too large"),
        ("1e999", "float literal is out of range"),
    ];
    for (source, expected) in cases {
        let (tokens, ledger) = lex_source(source);
        assert_eq!(messages(&ledger), vec![expected], "source {source:?}");
        assert_eq!(tokens.len(), 1, "source {source:?}");
        match &tokens[0] {
            TokenKind::IntLiteral(v) => assert_eq!(*v, 0, "source {source:?}"),
            TokenKind::FloatLiteral(v) => assert_eq!(*v, 0.0, "source {source:?}"),
            other => panic!("unexpected token {other:?} for {source:?}"),
        }
    }
}

#[test]
fn test_invalid_digit_reported_once_per_literal() {
    let (_, ledger) = lex_source("0b1234 0b9");
    assert_eq!(
        messages(&ledger),
        vec![
            "invalid digit '2' in binary integer literal",
            "invalid digit '9' in binary integer literal",
        ]
    );
}

// Strings and characters

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r#""a\tb\n\"q\" \\ \e\065\`""#),
        vec![TokenKind::StringLiteral("a\tb\n\"q\" \\ \x1bA`".to_string())]
    );
}

#[test]
fn test_raw_string_keeps_text() {
    assert_eq!(
        kinds("`a\\n\"b`"),
        vec![TokenKind::StringLiteral("a\\n\"b".to_string())]
    );
}

#[test]
fn test_multiline_raw_string() {
    let (tokens, ledger) = lex_source("```a\nb \\\nc```;");
    assert!(ledger.is_empty(), "{}", ledger.render());
    assert_eq!(
        tokens,
        vec![
            TokenKind::StringLiteral("a\nb \\\nc".to_string()),
            op(TokenCode::Semicolon),
        ]
    );
    assert_eq!(kinds("``````"), vec![TokenKind::StringLiteral(String::new())]);
    assert_eq!(kinds("``"), vec![TokenKind::StringLiteral(String::new())]);
}

#[test]
fn test_newline_in_single_line_raw_string() {
    let (tokens, ledger) = lex_source("`a\nb`");
    assert_eq!(tokens, vec![TokenKind::StringLiteral("a\nb".to_string())]);
    assert_eq!(
        messages(&ledger),
        vec!["unexpected new line in single-line string literal"]
    );
    assert_eq!(ledger.diagnostics()[0].span, SourceSpan::point(1, 3));
}

#[test]
fn test_unterminated_multiline_raw_string() {
    let (tokens, ledger) = lex_source("```abc\n`");
    assert_eq!(tokens, vec![TokenKind::StringLiteral("abc\n`".to_string())]);
    assert_eq!(messages(&ledger), vec!["unterminated string literal"]);
    assert_eq!(ledger.diagnostics()[0].span, SourceSpan::new(1, 1, 1, 3));
}

#[test]
fn test_multiline_string() {
    assert_eq!(
        kinds("\"\"\"one\ntwo \\\nthree\"\"\""),
        vec![TokenKind::StringLiteral("one\ntwo three".to_string())]
    );
}

#[test]
fn test_unterminated_string_still_yields_token() {
    let (tokens, ledger) = lex_source("x \"abc");
    assert_eq!(
        tokens,
        vec![name("x"), TokenKind::StringLiteral("abc".to_string())]
    );
    assert_eq!(messages(&ledger), vec!["unterminated string literal"]);
    assert_eq!(ledger.diagnostics()[0].span, SourceSpan::point(1, 3));
}

#[test]
fn test_newline_in_single_line_string() {
    let (tokens, ledger) = lex_source("\"a\nb\"");
    assert_eq!(tokens, vec![TokenKind::StringLiteral("a\nb".to_string())]);
    assert_eq!(
        messages(&ledger),
        vec!["unexpected new line in single-line string literal"]
    );
}

#[test]
fn test_invalid_escapes() {
    let (tokens, ledger) = lex_source(r#""a\qb\0c\200""#);
    assert_eq!(tokens, vec![TokenKind::StringLiteral("abc".to_string())]);
    assert_eq!(
        messages(&ledger),
        vec![
            "invalid escape sequence '\\q'",
            "escape sequence out of bounds <1,127>",
            "escape sequence out of bounds <1,127>",
        ]
    );
}

#[test]
fn test_char_literals() {
    assert_eq!(
        kinds(r"'a' '\n' '\'' '\065'"),
        vec![
            TokenKind::CharLiteral(b'a'),
            TokenKind::CharLiteral(b'\n'),
            TokenKind::CharLiteral(b'\''),
            TokenKind::CharLiteral(b'A'),
        ]
    );
}

#[test]
fn test_char_errors() {
    let (tokens, ledger) = lex_source("'' 'ab' 'x");
    assert_eq!(
        tokens,
        vec![
            TokenKind::CharLiteral(0),
            TokenKind::CharLiteral(b'a'),
            TokenKind::CharLiteral(b'x'),
        ]
    );
    assert_eq!(
        messages(&ledger),
        vec![
            "empty character literal",
            "character literal must contain exactly one character",
            "unterminated character literal",
        ]
    );
}

// Recovery

#[test]
fn test_unrecognized_characters_are_reported_and_skipped() {
    let (tokens, ledger) = lex_source("a $ b ! é");
    assert_eq!(tokens, vec![name("a"), name("b")]);
    assert_eq!(
        messages(&ledger),
        vec![
            "unrecognized character '$'",
            "unrecognized character '!'",
            "unrecognized character 'é'",
        ]
    );
    assert!(ledger
        .diagnostics()
        .iter()
        .all(|d| d.severity == Severity::Warning));
    assert_eq!(ledger.diagnostics()[2].span, SourceSpan::new(1, 9, 1, 10));
}

#[test]
fn test_lexer_always_finishes() {
    let (tokens, ledger) = lex_source("x = 0b2 \"open");
    assert_eq!(tokens.len(), 4);
    assert_eq!(
        messages(&ledger),
        vec!["invalid digit '2' in binary integer literal", "unterminated string literal"]
    );
}
