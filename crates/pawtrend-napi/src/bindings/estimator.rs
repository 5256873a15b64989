//! Estimator bindings: `pawtrendEstimate()` and `pawtrendEmotionKind()`.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use pawtrend_analysis::ObservationStreams;
use pawtrend_core::types::EmotionKind;

use crate::conversions::error_codes;
use crate::runtime;

/// Estimate the wellness trend for one pet.
///
/// `streams` is an object with `analyses`, `diary_entries`, `health_metrics`
/// and `wellness_scores` arrays of store rows (camelCase keys accepted).
/// `health_metrics` must be ordered most recent first. Uses the runtime's
/// estimator when initialized, the defaults otherwise.
#[napi(js_name = "pawtrendEstimate")]
pub fn pawtrend_estimate(streams: serde_json::Value) -> Result<serde_json::Value> {
    let streams = ObservationStreams::from_value(streams).map_err(error_codes::to_napi_error)?;

    let result = match runtime::get() {
        Ok(rt) => streams.estimate(&rt.estimator),
        Err(_) => {
            tracing::debug!("runtime not initialized, estimating with defaults");
            streams.estimate(&Default::default())
        }
    };

    if result.is_insufficient() {
        tracing::debug!(risks = result.risk_factors.len(), "no analyses supplied");
    }

    serde_json::to_value(&result)
        .map_err(|e| error_codes::reason(error_codes::INPUT_ERROR, e))
}

/// Resolve a free-text emotion label to its canonical kind, if recognised.
#[napi(js_name = "pawtrendEmotionKind")]
pub fn pawtrend_emotion_kind(label: String) -> Option<String> {
    EmotionKind::from_alias(&label).map(|k| k.as_str().to_string())
}
