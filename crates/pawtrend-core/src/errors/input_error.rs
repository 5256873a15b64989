use thiserror::Error;

use super::error_code::{self, PawtrendErrorCode};

/// Failures while decoding observation streams handed in by a caller.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed observation JSON: {message}")]
    MalformedJson { message: String },

    #[error("stream `{stream}` has an unexpected shape: {message}")]
    UnexpectedShape { stream: String, message: String },
}

impl PawtrendErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedJson {
            message: e.to_string(),
        }
    }
}
