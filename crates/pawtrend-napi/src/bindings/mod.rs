//! NAPI-exported functions.

pub mod estimator;
pub mod lifecycle;
