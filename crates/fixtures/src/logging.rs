//! Logging setup for the `cbor-fixtures` binary.
//!
//! Log output goes to stderr; stdout is reserved for fixture announcements.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs a global fmt subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // already installed
}
