//! Tracing initialization.
//!
//! Logs go to stderr so they never interleave with the item table on stdout.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing for the process.
///
/// Verbosity is controlled through `RUST_LOG`, e.g. `RUST_LOG=freezer=debug`
/// shows every store transaction. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
