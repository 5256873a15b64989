//! Stable error codes shared with the JavaScript bridge.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";

/// Every error enum exposes a stable, upper-snake error code.
pub trait PawtrendErrorCode {
    fn error_code(&self) -> &'static str;
}
