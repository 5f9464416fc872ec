//! Diagnostics for the ry front end.
//!
//! A [`DiagnosticLedger`] owns the source text of one unit, records leveled
//! [`Diagnostic`]s anchored to line/column spans, and renders them under a
//! source excerpt with a caret/tilde underline.

mod diagnostic;
mod ledger;
mod line_table;

pub use diagnostic::{Diagnostic, Severity};
pub use ledger::DiagnosticLedger;
pub use line_table::LineTable;
