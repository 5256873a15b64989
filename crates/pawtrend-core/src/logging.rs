//! Tracing subscriber setup.
//!
//! The filter comes from `PAWTREND_LOG` when set, otherwise from
//! `[logging] level`. Safe to call more than once; later calls are no-ops.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

/// Build the filter: env var first, configured level second, `info` last.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}
