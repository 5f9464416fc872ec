//! Command handlers.
//!
//! Each handler takes source text and returns an [`Outcome`]; reading the
//! file and printing happen in [`run`] and the binary.

use std::path::Path;

use ry_diagnostic::DiagnosticLedger;

use crate::args::RycCommand;
use crate::CliError;

mod check;
mod debug;

pub use check::check_source;
pub use debug::{lex_source, parse_source};

/// What a command prints and whether it failed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub output: String,
    /// Rendered diagnostics for stderr.
    pub diagnostics: String,
    pub has_errors: bool,
}

impl Outcome {
    fn new(output: String, ledger: &DiagnosticLedger) -> Self {
        Outcome {
            output,
            diagnostics: ledger.render(),
            has_errors: ledger.has_errors(),
        }
    }
}

/// Read the file named by `command` and run it.
pub fn run(command: &RycCommand) -> Result<Outcome, CliError> {
    match command {
        RycCommand::Lex(args) => {
            let source = read_source(&args.file)?;
            Ok(lex_source(&args.display_id(), &source))
        }
        RycCommand::Parse {
            source: args,
            format,
            statement,
        } => {
            let source = read_source(&args.file)?;
            Ok(parse_source(&args.display_id(), &source, *format, *statement))
        }
        RycCommand::Check(args) => {
            let source = read_source(&args.file)?;
            Ok(check_source(&args.display_id(), &source))
        }
    }
}

pub fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| CliError::Utf8 {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests;
