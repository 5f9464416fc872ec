//! `lex` and `parse`: print what the front end sees.

use std::fmt::Write as _;

use ry_diagnostic::DiagnosticLedger;
use ry_ir::{AstNode, DebugTree};
use ry_parse::Parser;
use tracing::debug;

use super::Outcome;
use crate::args::TreeFormat;

/// Lex `source` and list one token per line.
pub fn lex_source(id: &str, source: &str) -> Outcome {
    let mut ledger = DiagnosticLedger::new(id, source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    debug!(id, tokens = tokens.len(), "lexed");

    let mut output = String::new();
    for token in &tokens {
        // Writing into a String cannot fail.
        let _ = writeln!(output, "{token}");
    }
    Outcome::new(output, &ledger)
}

/// Parse `source` as a unit, or as one statement, and print the tree.
pub fn parse_source(id: &str, source: &str, format: TreeFormat, statement: bool) -> Outcome {
    let mut ledger = DiagnosticLedger::new(id, source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    let root = {
        let mut parser = Parser::new(&tokens, &mut ledger);
        if statement {
            parser.parse()
        } else {
            parser.parse_unit()
        }
    };

    let output = root.map_or_else(String::new, |root| render(&root, format));
    Outcome::new(output, &ledger)
}

fn render(root: &AstNode, format: TreeFormat) -> String {
    match format {
        TreeFormat::Pretty => format!("{}\n", root.pretty()),
        TreeFormat::Tree => root.debug_tree(),
    }
}
