//! ry front end CLI.

use std::process::ExitCode;

use clap::Parser;
use ryc::args::RycArgs;
use ryc::commands;

fn main() -> ExitCode {
    let args = RycArgs::parse();
    ryc::init_tracing(args.verbose);

    match commands::run(&args.command) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            eprint!("{}", outcome.diagnostics);
            if outcome.has_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
