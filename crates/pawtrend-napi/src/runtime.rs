//! PawtrendRuntime: singleton via `OnceLock`, lock-free after initialization.
//!
//! The runtime owns an estimator built from the resolved configuration. It is
//! initialized once via `initialize()` and accessed via `get()` for the
//! lifetime of the process. The estimator is stateless, so no locking.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use pawtrend_analysis::TrendEstimator;
use pawtrend_core::config::PawtrendConfig;
use pawtrend_core::logging;

use crate::conversions::error_codes;

static RUNTIME: OnceLock<Arc<PawtrendRuntime>> = OnceLock::new();

pub struct PawtrendRuntime {
    pub estimator: TrendEstimator,
    /// Where `pawtrend.toml` was looked up, if anywhere.
    pub project_root: Option<PathBuf>,
}

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Project root searched for `pawtrend.toml`.
    pub project_root: Option<PathBuf>,
    /// TOML configuration string. Overrides any file.
    pub config_toml: Option<String>,
}

impl PawtrendRuntime {
    fn new(opts: RuntimeOptions) -> napi::Result<Self> {
        let config = match (&opts.config_toml, &opts.project_root) {
            (Some(toml_str), _) => {
                PawtrendConfig::from_toml(toml_str).map_err(error_codes::to_napi_error)?
            }
            (None, Some(root)) => {
                PawtrendConfig::load(root, None).map_err(error_codes::to_napi_error)?
            }
            (None, None) => PawtrendConfig::default(),
        };

        logging::init_tracing(&config.logging);
        tracing::info!(
            project_root = ?opts.project_root,
            timeframe = %config.estimator.prediction.timeframe,
            "pawtrend runtime initialized"
        );

        Ok(Self {
            estimator: TrendEstimator::new(config.estimator),
            project_root: opts.project_root,
        })
    }
}

/// Initialize the global runtime.
///
/// Returns an error if already initialized or if the configuration is invalid.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    let runtime = PawtrendRuntime::new(opts)?;
    RUNTIME.set(Arc::new(runtime)).map_err(|_| {
        error_codes::reason(
            error_codes::ALREADY_INITIALIZED,
            "PawtrendRuntime already initialized",
        )
    })
}

/// Get the global runtime. Lock-free after init.
pub fn get() -> napi::Result<Arc<PawtrendRuntime>> {
    RUNTIME.get().cloned().ok_or_else(|| {
        error_codes::reason(
            error_codes::RUNTIME_NOT_INITIALIZED,
            "PawtrendRuntime not initialized. Call pawtrendInitialize() first.",
        )
    })
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
