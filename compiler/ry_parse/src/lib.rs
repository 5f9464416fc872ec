//! Recursive descent parser for ry.
//!
//! Works over a borrowed token slice with an explicit cursor. Grammar rules
//! are speculative: they either return a node with the cursor past it, or
//! return `None` with the cursor untouched (see [`MustParse`]). Binary
//! operators are parsed by precedence climbing over
//! [`BinaryOperationKind::priority`](ry_ir::BinaryOperationKind::priority).
//!
//! Syntax errors go to the shared [`DiagnosticLedger`]; the parser never
//! panics on malformed input.

mod config;
mod cursor;
mod grammar;
mod recovery;
mod snapshot;

pub use config::ParserConfig;
pub use cursor::Cursor;
pub use snapshot::MustParse;

use ry_diagnostic::{Diagnostic, DiagnosticLedger};
use ry_ir::{AstNode, ExprKind, Expression, SourceSpan, TokenCode, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    ledger: &'a mut DiagnosticLedger,
    config: ParserConfig,
    depth: usize,
    depth_exceeded: bool,
    /// Token index just past the target of the last assignment parsed.
    assignment_target_end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, ledger: &'a mut DiagnosticLedger) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
            ledger,
            config: ParserConfig::default(),
            depth: 0,
            depth_exceeded: false,
            assignment_target_end: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse one statement.
    ///
    /// Tokens left over after the statement are reported, but the statement
    /// is still returned.
    pub fn parse(&mut self) -> Option<AstNode> {
        let root = self
            .parse_statement(MustParse::Yes)
            .map(AstNode::Statement);
        self.finish(root)
    }

    /// Parse a single type.
    pub fn parse_type(&mut self) -> Option<AstNode> {
        let root = self.parse_type_with(MustParse::Yes).map(AstNode::Type);
        self.finish(root)
    }

    /// Parse a single expression.
    pub fn parse_expression(&mut self) -> Option<AstNode> {
        let root = self
            .parse_expression_with(MustParse::Yes)
            .map(AstNode::Expression);
        self.finish(root)
    }

    /// Parse every `;`-separated statement up to the end of input as one
    /// unlabeled block.
    ///
    /// A statement that fails to parse is reported and skipped up to the
    /// next `;`, so a unit always yields a root.
    pub fn parse_unit(&mut self) -> Option<AstNode> {
        let mut statements = Vec::new();
        loop {
            while self.cursor.eat(TokenCode::Semicolon) {}
            if self.cursor.is_at_end() {
                break;
            }
            self.depth_exceeded = false;
            match self.parse_statement(MustParse::Yes) {
                Some(statement) => statements.push(statement),
                None => {
                    recovery::synchronize(&mut self.cursor, recovery::STATEMENT_BOUNDARY);
                    continue;
                }
            }
            if !self.cursor.is_at_end() && !self.cursor.check(TokenCode::Semicolon) {
                self.report_expected("';'", self.cursor.position());
                recovery::synchronize(&mut self.cursor, recovery::STATEMENT_BOUNDARY);
            }
        }
        let root = AstNode::Expression(Expression::new(ExprKind::Block {
            label: None,
            statements,
        }));
        debug!(
            root = root.kind_name(),
            diagnostics = self.ledger.len(),
            "parsed unit"
        );
        Some(root)
    }

    /// Report leftover tokens after a single-root parse.
    fn finish(&mut self, root: Option<AstNode>) -> Option<AstNode> {
        if root.is_some() && !self.cursor.is_at_end() {
            self.report_expected("end of input", self.cursor.position());
        }
        debug!(
            root = root.as_ref().map_or("none", AstNode::kind_name),
            consumed = self.cursor.position(),
            tokens = self.cursor.token_count(),
            "parsed"
        );
        root
    }

    /// Record "expected `what`, got <token at pos>".
    pub(crate) fn report_expected(&mut self, what: &str, pos: usize) {
        let (got, span) = match self.cursor.token_at(pos) {
            Some(token) => (token.kind.describe(), token.span),
            None => ("end of input".to_string(), self.cursor.last_span()),
        };
        self.error(format!("expected {what}, got {got}"), span);
    }

    pub(crate) fn error(&mut self, message: impl Into<String>, span: SourceSpan) {
        let diagnostic = Diagnostic::error(message, span);
        debug!(%diagnostic, "syntax error");
        self.ledger.push(diagnostic);
    }
}

/// Parse one statement from `tokens`.
pub fn parse(tokens: &TokenList, ledger: &mut DiagnosticLedger) -> Option<AstNode> {
    Parser::new(tokens, ledger).parse()
}

/// Result of [`parse_source`].
#[derive(Debug)]
pub struct ParseOutput {
    pub root: Option<AstNode>,
    pub ledger: DiagnosticLedger,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.ledger.has_errors()
    }
}

/// Lex and parse a whole unit, collecting diagnostics from both phases in
/// one ledger.
pub fn parse_source(id: &str, source: &str) -> ParseOutput {
    let mut ledger = DiagnosticLedger::new(id, source);
    let tokens = ry_lexer::lex(source, &mut ledger);
    let root = Parser::new(&tokens, &mut ledger).parse_unit();
    ParseOutput { root, ledger }
}

#[cfg(test)]
mod tests;
