//! Layered configuration: `pawtrend.toml` in the project root, then an
//! optional user file, then compiled-in defaults.

pub mod estimator_config;
pub mod logging_config;

pub use estimator_config::{
    ClassificationThresholds, ConfidencePolicy, EstimatorConfig, MinSamples, PredictionPolicy,
    RiskPolicy, SignalScales, SourceWeights,
};
pub use logging_config::LoggingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawtrendConfig {
    pub estimator: EstimatorConfig,
    pub logging: LoggingConfig,
}

impl PawtrendConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for a project.
    ///
    /// `<project_root>/pawtrend.toml` wins over `user_config`; with neither
    /// present the defaults are returned.
    pub fn load(project_root: &Path, user_config: Option<&Path>) -> Result<Self, ConfigError> {
        let project_file = project_root.join(CONFIG_FILE_NAME);
        let candidate = if project_file.is_file() {
            Some(project_file.as_path())
        } else {
            user_config.filter(|p| p.is_file())
        };

        match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    ConfigError::FileReadFailed {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    }
                })?;
                Self::from_toml(&raw)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimator.validate()?;
        self.logging.validate()
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed {
            message: e.to_string(),
        })
    }
}
