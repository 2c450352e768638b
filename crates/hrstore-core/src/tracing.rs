//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; the embedding binary (console
//! front end, tests) decides whether to install a subscriber by calling
//! [`init_tracing`].

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a global subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_level()));

    let result = if config.effective_json() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    match result {
        Ok(()) => {
            ::tracing::debug!(level = config.effective_level(), "tracing initialized");
            true
        }
        Err(_) => false,
    }
}
