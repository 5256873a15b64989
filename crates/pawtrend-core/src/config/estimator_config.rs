//! `[estimator]` section: every tunable of the trend estimator.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::EmotionKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub weights: SourceWeights,
    pub min_samples: MinSamples,
    pub scales: SignalScales,
    pub thresholds: ClassificationThresholds,
    pub confidence: ConfidencePolicy,
    pub risk: RiskPolicy,
    pub prediction: PredictionPolicy,
    /// Overall trend above `+x` earns positive advice, below `-x` corrective advice.
    pub recommendation_threshold: f64,
    pub max_recommendations: usize,
    /// Records compared at each end for the confidence trend.
    pub confidence_trend_window: usize,
    /// Most recent analyses scanned for emotion-specific advice.
    pub recent_emotion_window: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            weights: SourceWeights::default(),
            min_samples: MinSamples::default(),
            scales: SignalScales::default(),
            thresholds: ClassificationThresholds::default(),
            confidence: ConfidencePolicy::default(),
            risk: RiskPolicy::default(),
            prediction: PredictionPolicy::default(),
            recommendation_threshold: constants::RECOMMENDATION_THRESHOLD,
            max_recommendations: constants::MAX_RECOMMENDATIONS,
            confidence_trend_window: constants::CONFIDENCE_TREND_WINDOW,
            recent_emotion_window: constants::RECENT_EMOTION_WINDOW,
        }
    }
}

/// Fixed per-source weights. Never renormalized when a source is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceWeights {
    pub emotion: f64,
    pub mood: f64,
    pub health: f64,
    pub wellness: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            emotion: constants::WEIGHT_EMOTION,
            mood: constants::WEIGHT_MOOD,
            health: constants::WEIGHT_HEALTH,
            wellness: constants::WEIGHT_WELLNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinSamples {
    pub emotion: usize,
    pub mood: usize,
    pub health: usize,
    pub wellness: usize,
}

impl Default for MinSamples {
    fn default() -> Self {
        Self {
            emotion: constants::MIN_EMOTION_SAMPLES,
            mood: constants::MIN_MOOD_SAMPLES,
            health: constants::MIN_HEALTH_SAMPLES,
            wellness: constants::MIN_WELLNESS_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalScales {
    pub mood: f64,
    pub health: f64,
    pub wellness: f64,
}

impl Default for SignalScales {
    fn default() -> Self {
        Self {
            mood: constants::MOOD_SCALE,
            health: constants::HEALTH_SCALE,
            wellness: constants::WELLNESS_SCALE,
        }
    }
}

/// Strict bucket edges: `> significant`, `> slight`, `< -slight`, `< -significant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    pub significant: f64,
    pub slight: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            significant: constants::SIGNIFICANT_THRESHOLD,
            slight: constants::SLIGHT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidencePolicy {
    pub per_analysis: f64,
    pub analysis_cap: f64,
    pub per_component: f64,
    pub max: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            per_analysis: constants::CONFIDENCE_PER_ANALYSIS,
            analysis_cap: constants::CONFIDENCE_ANALYSIS_CAP,
            per_component: constants::CONFIDENCE_PER_COMPONENT,
            max: constants::CONFIDENCE_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    /// Most recent analyses inspected for negative emotions and low confidence.
    pub recent_window: usize,
    /// Flag when strictly more than this many recent analyses are negative.
    pub max_negative: usize,
    /// Flag when strictly more than this many recent analyses are unreliable.
    pub max_low_confidence: usize,
    pub low_confidence_below: f64,
    /// Most recent rated diary entries inspected for low mood.
    pub diary_window: usize,
    /// Low mood is only flagged with strictly more rated entries than this.
    pub min_diary_entries: usize,
    pub low_mood_below: f64,
    pub negative_emotions: Vec<EmotionKind>,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            recent_window: constants::RISK_RECENT_WINDOW,
            max_negative: constants::RISK_MAX_NEGATIVE,
            max_low_confidence: constants::RISK_MAX_LOW_CONFIDENCE,
            low_confidence_below: constants::RISK_LOW_CONFIDENCE_BELOW,
            diary_window: constants::RISK_DIARY_WINDOW,
            min_diary_entries: constants::RISK_MIN_DIARY_ENTRIES,
            low_mood_below: constants::RISK_LOW_MOOD_BELOW,
            negative_emotions: vec![EmotionKind::Anxious, EmotionKind::Sad, EmotionKind::Aggressive],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionPolicy {
    pub recent_window: usize,
    pub trend_factor: f64,
    pub change_margin: f64,
    pub timeframe: String,
    pub reliability_per_analysis: f64,
    pub reliability_cap: f64,
}

impl Default for PredictionPolicy {
    fn default() -> Self {
        Self {
            recent_window: constants::PREDICTION_RECENT_WINDOW,
            trend_factor: constants::PREDICTION_TREND_FACTOR,
            change_margin: constants::PREDICTION_CHANGE_MARGIN,
            timeframe: constants::PREDICTION_TIMEFRAME.to_string(),
            reliability_per_analysis: constants::RELIABILITY_PER_ANALYSIS,
            reliability_cap: constants::RELIABILITY_CAP,
        }
    }
}

impl EstimatorConfig {
    /// Reject values the estimator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("estimator.weights.emotion", self.weights.emotion),
            ("estimator.weights.mood", self.weights.mood),
            ("estimator.weights.health", self.weights.health),
            ("estimator.weights.wellness", self.weights.wellness),
        ];
        for (field, weight) in weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::invalid(field, format!("{weight} is outside [0, 1]")));
            }
        }

        let t = &self.thresholds;
        if !t.slight.is_finite() || !t.significant.is_finite() || t.slight < 0.0 {
            return Err(ConfigError::invalid(
                "estimator.thresholds",
                "thresholds must be finite and non-negative",
            ));
        }
        if t.slight >= t.significant {
            return Err(ConfigError::invalid(
                "estimator.thresholds.slight",
                format!("{} must be below significant ({})", t.slight, t.significant),
            ));
        }

        let windows = [
            ("estimator.max_recommendations", self.max_recommendations),
            ("estimator.confidence_trend_window", self.confidence_trend_window),
            ("estimator.recent_emotion_window", self.recent_emotion_window),
            ("estimator.risk.recent_window", self.risk.recent_window),
            ("estimator.risk.diary_window", self.risk.diary_window),
            ("estimator.prediction.recent_window", self.prediction.recent_window),
        ];
        for (field, size) in windows {
            if size == 0 {
                return Err(ConfigError::invalid(field, "must be at least 1"));
            }
        }

        if self.confidence.max <= 0.0 || !self.confidence.max.is_finite() {
            return Err(ConfigError::invalid("estimator.confidence.max", "must be positive"));
        }

        let non_negative = [
            ("estimator.scales.mood", self.scales.mood),
            ("estimator.scales.health", self.scales.health),
            ("estimator.scales.wellness", self.scales.wellness),
            ("estimator.confidence.per_analysis", self.confidence.per_analysis),
            ("estimator.confidence.analysis_cap", self.confidence.analysis_cap),
            ("estimator.confidence.per_component", self.confidence.per_component),
            ("estimator.risk.low_confidence_below", self.risk.low_confidence_below),
            ("estimator.risk.low_mood_below", self.risk.low_mood_below),
            ("estimator.prediction.change_margin", self.prediction.change_margin),
            ("estimator.prediction.reliability_per_analysis", self.prediction.reliability_per_analysis),
            ("estimator.prediction.reliability_cap", self.prediction.reliability_cap),
            ("estimator.recommendation_threshold", self.recommendation_threshold),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} must be finite and non-negative"),
                ));
            }
        }

        if !self.prediction.trend_factor.is_finite() {
            return Err(ConfigError::invalid(
                "estimator.prediction.trend_factor",
                format!("{} must be finite", self.prediction.trend_factor),
            ));
        }

        Ok(())
    }
}
