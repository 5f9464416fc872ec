//! Property-based tests for the parser.
//!
//! Generates well-formed expression and unit sources and checks that
//! parsing is clean, that pretty printing a parsed tree parses back to the
//! same tree, and that the parser finishes on arbitrary input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use ry_diagnostic::DiagnosticLedger;
use ry_ir::{AstNode, DebugTree, Expression};
use ry_parse::Parser;

fn parse_expression(source: &str) -> (Option<AstNode>, DiagnosticLedger) {
    let mut ledger = DiagnosticLedger::new("prop", source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    let root = Parser::new(&tokens, &mut ledger).parse_expression();
    (root, ledger)
}

fn clean_expression(source: &str) -> Result<Expression, TestCaseError> {
    let (root, ledger) = parse_expression(source);
    prop_assert!(ledger.is_empty(), "{source:?}:\n{}", ledger.render());
    match root {
        Some(AstNode::Expression(e)) => Ok(e),
        other => Err(TestCaseError::fail(format!("{source:?} gave {other:?}"))),
    }
}

const NAMES: [&str; 5] = ["a", "b", "x", "y", "count"];
const BINARY: [&str; 18] = [
    "+", "-", "*", "/", "%", "|", "^", "&", "<<", ">>", "==", "!=", "<", "<=", ">", ">=", "or",
    "and",
];
const UNARY: [&str; 6] = ["-", "~", "*", "&", "not ", "comp "];
const CONSTANTS: [&str; 9] = [
    "1.5", "0.25", "null", "true", "false", "\"s\"", "\"a\\tb\"", "'c'", "'\\n'",
];
const COMPOUND: [&str; 10] = ["+=", "-=", "*=", "/=", "%=", "|=", "^=", "&=", "<<=", ">>="];
const PRIMITIVES: [&str; 6] = ["i8", "u32", "f64", "bool", "char", "u128"];
const ATTRIBUTES: [&str; 4] = ["", "~", "?", "~?"];
const LABELS: [&str; 2] = ["\"outer\"", "\"l\""];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        name(),
        (0u32..1000).prop_map(|n| n.to_string()),
        prop::sample::select(CONSTANTS.to_vec()).prop_map(str::to_string),
        (name(), name()).prop_map(|(a, b)| format!("{a}.{b}")),
        (name(), 0u32..10, 0u32..10).prop_map(|(a, i, j)| format!("{a}.{i} .{j}")),
    ]
}

/// Sources that form exactly one expression.
fn expression_source() -> impl Strategy<Value = String> + Clone {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY.to_vec()), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (prop::sample::select(UNARY.to_vec()), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            (
                prop::sample::select(NAMES.to_vec()),
                prop::collection::vec(inner, 0..3)
            )
                .prop_map(|(f, args)| format!("{f}[{}]", args.join(", "))),
        ]
    })
}

fn type_source() -> impl Strategy<Value = String> {
    let primitive = prop::sample::select(PRIMITIVES.to_vec()).prop_map(str::to_string);
    let base = primitive.clone().prop_recursive(3, 16, 3, move |inner| {
        let attributed = (prop::sample::select(ATTRIBUTES.to_vec()), inner.clone())
            .prop_map(|(attr, t)| format!("{attr}{t}"));
        let field = prop_oneof![
            (prop::collection::vec(name(), 1..3), attributed.clone())
                .prop_map(|(names, t)| format!("{}: {t}", names.join(", "))),
            (prop::collection::vec(name(), 1..2), attributed.clone(), leaf())
                .prop_map(|(names, t, v)| format!("{}: {t} = {v}", names.join(", "))),
            attributed.clone(),
            (1u32..5, primitive.clone()).prop_map(|(n, t)| format!("{n} * {t}")),
        ];
        let fields =
            prop::collection::vec(field, 0..3).prop_map(|f| format!("[{}]", f.join(", ")));
        prop_oneof![
            attributed.clone().prop_map(|t| format!("*{t}")),
            fields.clone(),
            (fields, attributed).prop_map(|(args, ret)| format!("{args} => {ret}")),
        ]
    });
    (prop::sample::select(ATTRIBUTES.to_vec()), base)
        .prop_map(|(attr, t)| format!("{attr}{t}"))
}

/// A value: an expression or a struct literal.
fn value_source() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => expression_source(),
        1 => prop::collection::vec(
            prop_oneof![
                (name(), expression_source()).prop_map(|(n, e)| format!("{n} = {e}")),
                expression_source(),
            ],
            0..3
        )
        .prop_map(|fields| format!("[{}]", fields.join(", "))),
    ]
}

fn target_source() -> impl Strategy<Value = String> {
    prop_oneof![
        name(),
        (name(), name()).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn simple_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        expression_source(),
        (name(), value_source()).prop_map(|(n, v)| format!("{n} := {v}")),
        (name(), type_source()).prop_map(|(n, t)| format!("{n}: {t}")),
        (name(), type_source(), value_source()).prop_map(|(n, t, v)| format!("{n}: {t} = {v}")),
        (target_source(), value_source()).prop_map(|(t, v)| format!("{t} = {v}")),
        (target_source(), prop::sample::select(COMPOUND.to_vec()), expression_source())
            .prop_map(|(t, op, v)| format!("{t} {op} {v}")),
        Just("continue".to_string()),
        Just("break".to_string()),
        name().prop_map(|n| format!("break {n}")),
        (prop::sample::select(LABELS.to_vec()), prop::option::of(expression_source())).prop_map(
            |(label, value)| match value {
                Some(value) => format!("break {label} {value}"),
                None => format!("break {label}"),
            }
        ),
    ]
}

/// Statements, including blocks and control flow nested inside each other.
fn statement_source() -> impl Strategy<Value = String> {
    simple_statement().prop_recursive(3, 24, 4, |inner| {
        let block =
            prop::collection::vec(inner, 0..4).prop_map(|s| format!("{{{}}}", s.join("; ")));
        let condition = expression_source();
        prop_oneof![
            block.clone(),
            (prop::sample::select(LABELS.to_vec()), block.clone())
                .prop_map(|(label, b)| format!("{label} {b}")),
            (name(), block.clone()).prop_map(|(n, b)| format!("{n} := {b}")),
            (condition.clone(), block.clone()).prop_map(|(c, b)| format!("if {c} do {b}")),
            (condition.clone(), block.clone(), block.clone())
                .prop_map(|(c, t, e)| format!("if {c} do {t} else {e}")),
            (condition.clone(), block.clone(), condition.clone(), block.clone())
                .prop_map(|(c, t, c2, e)| format!("if {c} do {t} else if {c2} do {e}")),
            block.clone().prop_map(|b| format!("loop {b}")),
            (condition.clone(), block.clone()).prop_map(|(c, b)| format!("loop {c} do {b}")),
            (name(), condition, target_source(), block)
                .prop_map(|(i, c, t, b)| format!("loop {i} := 0; {c}; {t} += 1 do {b}")),
        ]
    })
}

fn unit_source() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_source(), 0..5).prop_map(|s| s.join(";\n"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Generated expressions parse without diagnostics.
    #[test]
    fn prop_generated_expressions_parse(source in expression_source()) {
        clean_expression(&source)?;
    }

    /// Printing a parsed tree and parsing the text again gives the same tree.
    #[test]
    fn prop_pretty_round_trips(source in expression_source()) {
        let tree = clean_expression(&source)?;
        let printed = tree.to_string();
        let reparsed = clean_expression(&printed)?;
        prop_assert_eq!(&reparsed, &tree, "printed as {:?}", printed);
        prop_assert_eq!(reparsed.debug_tree(), tree.debug_tree());
    }

    /// Units with statements, types and control flow print back to the same
    /// tree.
    #[test]
    fn prop_unit_pretty_round_trips(source in unit_source()) {
        let output = ry_parse::parse_source("prop", &source);
        prop_assert!(output.ledger.is_empty(), "{source:?}:\n{}", output.ledger.render());
        let root = output.root.expect("a unit always has a root");
        let printed = root.pretty();
        let (again, ledger) = parse_expression(&printed);
        prop_assert!(ledger.is_empty(), "{printed:?}:\n{}", ledger.render());
        prop_assert_eq!(again.as_ref(), Some(&root), "printed as {:?}", printed);
        prop_assert_eq!(again.map(|a| a.debug_tree()), Some(root.debug_tree()));
    }

    /// Folding follows operator priority and grouping.
    #[test]
    fn prop_folding_follows_priority(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let (fa, fb, fc) = (f64::from(a), f64::from(b), f64::from(c));
        let flat = clean_expression(&format!("{a} + {b} * {c}"))?;
        prop_assert_eq!(flat.try_number_value(), Some(fa + fb * fc));
        let grouped = clean_expression(&format!("({a} + {b}) * {c}"))?;
        prop_assert_eq!(grouped.try_number_value(), Some((fa + fb) * fc));
        let chained = clean_expression(&format!("{a} - {b} - {c}"))?;
        prop_assert_eq!(chained.try_number_value(), Some(fa - fb - fc));
    }

    /// Parsing finishes on arbitrary input and only reports lines that exist.
    #[test]
    fn prop_parser_total(source in any::<String>()) {
        let output = ry_parse::parse_source("prop", &source);
        prop_assert!(output.root.is_some());
        let lines = u32::try_from(output.ledger.lines().line_count()).unwrap();
        for diag in output.ledger.diagnostics() {
            prop_assert!(diag.span.start_line >= 1);
            prop_assert!(diag.span.end_line <= lines.max(1));
        }
    }

    /// A statement parse over token soup reports at most one syntax error,
    /// and always one when it yields no statement.
    #[test]
    fn prop_statement_parse_total(
        source in prop::string::string_regex(
            "([a-z]{1,3}|[0-9]{1,3}|:=|[-+*/=;:,.\\[\\](){}~?&|^<>]| |if|do|else|loop|break|continue){0,30}"
        ).expect("valid regex")
    ) {
        let mut ledger = DiagnosticLedger::new("prop", &source);
        let tokens = ry_lexer::lex(&source, &mut ledger);
        let lexed = ledger.len();
        let root = ry_parse::parse(&tokens, &mut ledger);
        let reported = ledger.len() - lexed;
        prop_assert!(reported <= 1, "{}", ledger.render());
        if root.is_none() {
            prop_assert_eq!(reported, 1);
        }
    }
}
