//! Error codes surfaced to JavaScript as a `[CODE] message` prefix.

use pawtrend_core::errors::PawtrendErrorCode;

pub use pawtrend_core::errors::error_code::{
    ALREADY_INITIALIZED, CONFIG_ERROR, INPUT_ERROR, RUNTIME_NOT_INITIALIZED,
};

/// Build a `napi::Error` carrying a code prefix the TS layer can match on.
pub fn reason(code: &str, message: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("[{code}] {message}"))
}

/// Map any coded error into a `napi::Error`.
pub fn to_napi_error<E>(err: E) -> napi::Error
where
    E: PawtrendErrorCode + std::fmt::Display,
{
    reason(err.error_code(), err)
}
