use thiserror::Error;

use super::error_code::{self, PawtrendErrorCode};

/// Failures while loading or validating `pawtrend.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    FileReadFailed { path: String, message: String },

    #[error("failed to parse config: {message}")]
    ParseFailed { message: String },

    #[error("invalid config value for `{field}`: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl PawtrendErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
