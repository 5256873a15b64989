//! Error enums for the edges of the system.
//!
//! The estimator itself is total and never fails; errors only arise while
//! loading configuration or decoding observation streams.

pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::PawtrendErrorCode;
pub use input_error::InputError;
