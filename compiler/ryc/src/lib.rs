//! Command-line driver for the ry front end.
//!
//! The binary in `main.rs` only parses arguments and prints; everything it
//! runs lives here so the commands can be tested on in-memory sources.

pub mod args;
pub mod commands;
mod error;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
