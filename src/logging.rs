//! Tracing setup
//!
//! Log output goes to stderr so command output on stdout stays clean.
//! `RUST_LOG` overrides the default `fintrack=info` filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "fintrack=info";

/// Initializes the global tracing subscriber once per process
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
