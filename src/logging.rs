//! Tracing subscriber setup for binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's call. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber. Returns false if one was already set.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
