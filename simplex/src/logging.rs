//! Global log subscriber setup.

use std::error::Error;
use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs the global `tracing` subscriber described by `config`.
///
/// Logs go to stderr so they never interleave with sampled output on stdout.
/// `log` records are forwarded to the same subscriber.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    if !config.enabled {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.color)
        .with_thread_names(config.threads)
        .with_target(true);

    if config.timestamp {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    }
}
