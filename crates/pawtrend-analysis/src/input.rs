//! Decoding the four observation streams from store rows.
//!
//! The web app hands over one JSON object with up to four arrays, each
//! holding rows exactly as selected from the store. Missing or null streams
//! are empty; anything else that is not an array of objects is rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pawtrend_core::errors::InputError;
use pawtrend_core::types::{
    DiaryEntry, EmotionAnalysisRecord, HealthMetricRecord, WellnessScoreRecord,
};

use crate::trend::{PredictionResult, TrendEstimator};

/// Everything the estimator reads for one pet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationStreams {
    pub analyses: Vec<EmotionAnalysisRecord>,
    #[serde(alias = "diaryEntries")]
    pub diary_entries: Vec<DiaryEntry>,
    /// Most recent first.
    #[serde(alias = "healthMetrics")]
    pub health_metrics: Vec<HealthMetricRecord>,
    #[serde(alias = "wellnessScores")]
    pub wellness_scores: Vec<WellnessScoreRecord>,
}

impl ObservationStreams {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, InputError> {
        let mut root = match value {
            Value::Object(map) => map,
            other => {
                return Err(InputError::UnexpectedShape {
                    stream: "root".to_string(),
                    message: format!("expected an object, found {}", kind_of(&other)),
                })
            }
        };

        let streams = Self {
            analyses: take_stream(&mut root, "analyses", None)?,
            diary_entries: take_stream(&mut root, "diary_entries", Some("diaryEntries"))?,
            health_metrics: take_stream(&mut root, "health_metrics", Some("healthMetrics"))?,
            wellness_scores: take_stream(&mut root, "wellness_scores", Some("wellnessScores"))?,
        };
        tracing::debug!(
            analyses = streams.analyses.len(),
            diary_entries = streams.diary_entries.len(),
            health_metrics = streams.health_metrics.len(),
            wellness_scores = streams.wellness_scores.len(),
            "observation streams decoded"
        );
        Ok(streams)
    }

    pub fn estimate(&self, estimator: &TrendEstimator) -> PredictionResult {
        estimator.estimate(
            &self.analyses,
            &self.diary_entries,
            &self.health_metrics,
            &self.wellness_scores,
        )
    }
}

fn take_stream<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    key: &str,
    alias: Option<&str>,
) -> Result<Vec<T>, InputError> {
    let primary = root.remove(key).filter(|v| !v.is_null());
    let raw = primary
        .or_else(|| alias.and_then(|a| root.remove(a)))
        .unwrap_or(Value::Null);

    let rows = match raw {
        Value::Null => return Ok(Vec::new()),
        Value::Array(rows) => rows,
        other => {
            return Err(InputError::UnexpectedShape {
                stream: key.to_string(),
                message: format!("expected an array, found {}", kind_of(&other)),
            })
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.is_object() {
                return Err(InputError::UnexpectedShape {
                    stream: key.to_string(),
                    message: format!("row {i} is {}, expected an object", kind_of(&row)),
                });
            }
            serde_json::from_value(row).map_err(|e| InputError::UnexpectedShape {
                stream: key.to_string(),
                message: format!("row {i}: {e}"),
            })
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
