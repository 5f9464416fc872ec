use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// `-v` raises the level to `debug` and `-vv` to `trace`. Without flags the
/// filter comes from `RY_LOG`, then `RUST_LOG`, then defaults to `warn`.
/// Safe to call more than once.
pub fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        let filter = match verbose {
            0 => EnvFilter::try_from_env("RY_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
