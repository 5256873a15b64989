//! # pawtrend-napi
//!
//! NAPI-RS v3 bindings for the Pawtrend wellness estimator.
//! Provides the TypeScript/JavaScript bridge layer.
//!
//! Architecture:
//! - `runtime`: `PawtrendRuntime` singleton via `OnceLock` (lock-free after init)
//! - `conversions`: error code mapping onto `napi::Error`
//! - `bindings`: NAPI-exported functions (lifecycle, estimator)

pub mod bindings;
pub mod conversions;
pub mod runtime;
