use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ryc runs the ry front end over a source file
#[derive(Debug, Parser)]
#[command(name = "ryc", author, version)]
pub struct RycArgs {
    #[command(subcommand)]
    pub command: RycCommand,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum RycCommand {
    /// Print the token stream
    #[command(name = "lex")]
    Lex(SourceArgs),

    /// Print the syntax tree
    #[command(name = "parse")]
    Parse {
        #[command(flatten)]
        source: SourceArgs,

        /// How to print the tree
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Pretty)]
        format: TreeFormat,

        /// Parse a single statement instead of a whole unit
        #[arg(long)]
        statement: bool,
    },

    /// Report diagnostics only
    #[command(name = "check")]
    Check(SourceArgs),
}

#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// Path to the source file
    #[arg()]
    pub file: PathBuf,

    /// Name shown in diagnostics instead of the path
    #[arg(long)]
    pub id: Option<String>,
}

impl SourceArgs {
    /// The identifier diagnostics are rendered under.
    pub fn display_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Source-like text
    Pretty,
    /// Indented structural dump
    Tree,
}
