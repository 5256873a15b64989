//! Lifecycle bindings: `pawtrendInitialize()`, `pawtrendIsInitialized()` and
//! `pawtrendResolvedConfig()`.

use std::path::PathBuf;

use napi_derive::napi;
use serde_json::json;

use crate::conversions::error_codes;
use crate::runtime::{self, RuntimeOptions};

/// Initialize the Pawtrend runtime.
///
/// Resolves configuration (inline TOML, else `<projectRoot>/pawtrend.toml`,
/// else defaults), installs the tracing subscriber and builds the estimator.
/// Subsequent calls return an ALREADY_INITIALIZED error.
///
/// @param project_root - Optional project root for config resolution.
/// @param config_toml - Optional TOML configuration string. Overrides file-based config.
#[napi(js_name = "pawtrendInitialize")]
pub fn pawtrend_initialize(
    project_root: Option<String>,
    config_toml: Option<String>,
) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions {
        project_root: project_root.map(PathBuf::from),
        config_toml,
    })
}

#[napi(js_name = "pawtrendIsInitialized")]
pub fn pawtrend_is_initialized() -> bool {
    runtime::is_initialized()
}

/// The estimator configuration the runtime resolved at init, with the
/// project root it was resolved from. Errors with RUNTIME_NOT_INITIALIZED
/// before `pawtrendInitialize()`.
#[napi(js_name = "pawtrendResolvedConfig")]
pub fn pawtrend_resolved_config() -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let estimator = serde_json::to_value(rt.estimator.config())
        .map_err(|e| error_codes::reason(error_codes::CONFIG_ERROR, e))?;
    Ok(json!({
        "project_root": rt.project_root.as_ref().map(|p| p.display().to_string()),
        "estimator": estimator,
    }))
}
