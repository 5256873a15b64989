use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `PAWTREND_LOG` is unset.
    pub level: String,
    /// Emit ANSI colours.
    pub ansi: bool,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "must not be empty"));
        }
        Ok(())
    }
}
