//! Result types for the trend estimator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

use super::messages;

/// Six-way wellbeing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendClassification {
    SignificantImprovement,
    SlightImprovement,
    Stable,
    SlightDecline,
    SignificantDecline,
    /// No emotion analyses at all. A result state, not an error.
    InsufficientData,
}

impl TrendClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignificantImprovement => "significant_improvement",
            Self::SlightImprovement => "slight_improvement",
            Self::Stable => "stable",
            Self::SlightDecline => "slight_decline",
            Self::SignificantDecline => "significant_decline",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The observation stream a component was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendSource {
    EmotionAnalyses,
    DiaryMood,
    HealthMetrics,
    WellnessScores,
}

impl TrendSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmotionAnalyses => "emotion_analyses",
            Self::DiaryMood => "diary_mood",
            Self::HealthMetrics => "health_metrics",
            Self::WellnessScores => "wellness_scores",
        }
    }

    /// Label shown in the app's breakdown panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EmotionAnalyses => "Analisi Emotive",
            Self::DiaryMood => "Umore Diario",
            Self::HealthMetrics => "Metriche Salute",
            Self::WellnessScores => "Punteggi Benessere",
        }
    }
}

impl fmt::Display for TrendSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source's contribution to the overall trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendComponent {
    pub source: TrendSource,
    pub name: String,
    /// Signed magnitude, roughly on the 0-100 confidence scale.
    pub trend: f64,
    pub weight: f64,
    /// Observations that backed this component.
    pub samples: usize,
}

impl TrendComponent {
    pub fn new(source: TrendSource, trend: f64, weight: f64, samples: usize) -> Self {
        Self {
            source,
            name: source.display_name().to_string(),
            trend,
            weight,
            samples,
        }
    }

    pub fn weighted(&self) -> f64 {
        self.trend * self.weight
    }
}

/// Short-horizon forecast of the detection confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Forecast confidence, clamped to [0, 100].
    pub predicted_confidence: f64,
    /// Mean confidence of the most recent analyses.
    pub current_confidence: f64,
    pub description: String,
    pub timeframe: String,
    /// 0-100.
    pub reliability: f64,
}

/// Full estimator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub trend: TrendClassification,
    /// Heuristic 0-100 score of how much data backed the classification.
    pub confidence: f64,
    /// Raw weighted sum the classification was derived from.
    pub overall_trend: f64,
    pub components: SmallVec<[TrendComponent; 4]>,
    /// Label -> rounded percentage. Not renormalized; may sum to 99 or 101.
    pub emotion_distribution: BTreeMap<String, u32>,
    pub confidence_trend: f64,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub prediction: Option<Prediction>,
}

impl PredictionResult {
    /// The base result when there are no emotion analyses. The estimator may
    /// still attach diary-derived risk factors to it.
    pub fn insufficient_data() -> Self {
        Self {
            trend: TrendClassification::InsufficientData,
            confidence: 0.0,
            overall_trend: 0.0,
            components: SmallVec::new(),
            emotion_distribution: BTreeMap::new(),
            confidence_trend: 0.0,
            risk_factors: Vec::new(),
            recommendations: vec![messages::REC_MORE_DATA.to_string()],
            prediction: None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.trend == TrendClassification::InsufficientData
    }

    pub fn component(&self, source: TrendSource) -> Option<&TrendComponent> {
        self.components.iter().find(|c| c.source == source)
    }
}
