use std::path::PathBuf;

/// Failures outside the source text itself. Problems inside the source are
/// diagnostics, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    Utf8 { path: PathBuf },
}
