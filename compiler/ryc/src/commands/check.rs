use super::Outcome;

/// Lex and parse `source`, printing only a diagnostic summary.
pub fn check_source(id: &str, source: &str) -> Outcome {
    let parsed = ry_parse::parse_source(id, source);
    let ledger = &parsed.ledger;
    let output = format!(
        "{} error(s), {} warning(s)\n",
        ledger.error_count(),
        ledger.warning_count()
    );
    Outcome::new(output, ledger)
}
