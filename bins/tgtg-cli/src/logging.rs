//! Tracing setup
//!
//! Logs go to stderr so stdout stays parseable JSON.

use anyhow::anyhow;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output for
/// this tool and the client library.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        "tgtg=debug,tgtg_api_client=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {e}"))
}
