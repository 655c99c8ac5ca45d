//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the desktop process.
///
/// Compact human-readable output on stderr; `RUST_LOG` overrides the
/// default `info` level. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
