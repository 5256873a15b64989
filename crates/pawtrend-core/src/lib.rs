//! # pawtrend-core
//!
//! Foundation crate for the Pawtrend wellness estimator.
//! Holds the observation record types, emotion labels, lenient decoding
//! helpers, configuration, error enums, tracing setup and default constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::PawtrendConfig;
pub use errors::{ConfigError, InputError, PawtrendErrorCode};
