//! Logging setup for the gate binary.
//!
//! Events go to stderr so stdout stays reserved for report output. The
//! default level keeps a clean run completely silent; `RUST_LOG` wins
//! over the verbosity flag when set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("postgate={level}")));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
