//! Observation records, one per store table row.
//!
//! Every column is optional on the wire. Numeric columns decode leniently
//! (see [`super::lenient`]) so a half-filled form row never fails a decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::emotion::EmotionLabel;
use super::lenient;

/// One emotion analysis of an uploaded photo, video, audio clip or text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionAnalysisRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub pet_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub file_type: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub file_size: f64,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub storage_path: Option<String>,
    #[serde(deserialize_with = "lenient::emotion_label")]
    pub primary_emotion: EmotionLabel,
    /// Detection confidence, 0-100.
    #[serde(deserialize_with = "lenient::number")]
    pub primary_confidence: f64,
    #[serde(deserialize_with = "lenient::number_map")]
    pub secondary_emotions: BTreeMap<String, f64>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub behavioral_insights: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub recommendations: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub triggers: Vec<String>,
    /// Opaque interval as stored; never interpreted.
    pub analysis_duration: Option<Value>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EmotionAnalysisRecord {
    pub fn new(
        primary_emotion: impl Into<EmotionLabel>,
        primary_confidence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            primary_emotion: primary_emotion.into(),
            primary_confidence,
            created_at: Some(created_at),
            ..Self::default()
        }
    }

    pub fn confidence(&self) -> f64 {
        lenient::finite_or_zero(self.primary_confidence)
    }
}

/// A behavioural diary entry written by the owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryEntry {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub pet_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub entry_date: Option<DateTime<Utc>>,
    /// Owner-rated mood, 1-10. Absent when the owner skipped the field.
    #[serde(deserialize_with = "lenient::optional_number")]
    pub mood_score: Option<f64>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub behavior_tags: Vec<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DiaryEntry {
    pub fn new(entry_date: DateTime<Utc>, mood_score: Option<f64>) -> Self {
        Self {
            entry_date: Some(entry_date),
            mood_score,
            ..Self::default()
        }
    }

    pub fn mood(&self) -> Option<f64> {
        self.mood_score.map(lenient::finite_or_zero)
    }
}

/// A health measurement (weight, temperature, heart rate, ...).
///
/// Health rows carry no timestamp the estimator trusts; streams of these are
/// ordered most recent first, as the store returns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthMetricRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub pet_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub metric_type: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub value: f64,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl HealthMetricRecord {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn numeric_value(&self) -> f64 {
        lenient::finite_or_zero(self.value)
    }
}

/// A computed overall wellness score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessScoreRecord {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub pet_id: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub overall_score: f64,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub score_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WellnessScoreRecord {
    pub fn new(overall_score: f64, score_date: DateTime<Utc>) -> Self {
        Self {
            overall_score,
            score_date: Some(score_date),
            ..Self::default()
        }
    }

    /// `score_date` when present, otherwise the row's creation time.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.score_date.or(self.created_at)
    }

    pub fn score(&self) -> f64 {
        lenient::finite_or_zero(self.overall_score)
    }
}
