//! Default tuning constants for the trend estimator.
//!
//! Every value here is overridable through `[estimator]` in `pawtrend.toml`.

/// Source weights. These do not need to sum to 1.0 and are never
/// renormalized when a source is missing.
pub const WEIGHT_EMOTION: f64 = 0.4;
pub const WEIGHT_MOOD: f64 = 0.3;
pub const WEIGHT_HEALTH: f64 = 0.2;
pub const WEIGHT_WELLNESS: f64 = 0.1;

/// Minimum observations before a source contributes a component.
pub const MIN_EMOTION_SAMPLES: usize = 3;
pub const MIN_MOOD_SAMPLES: usize = 3;
pub const MIN_HEALTH_SAMPLES: usize = 2;
pub const MIN_WELLNESS_SAMPLES: usize = 2;

/// Rescaling factors bringing each source roughly onto the 0-100 scale.
pub const MOOD_SCALE: f64 = 10.0;
pub const HEALTH_SCALE: f64 = 5.0;
pub const WELLNESS_SCALE: f64 = 2.0;

/// Classification thresholds (strict comparisons).
pub const SIGNIFICANT_THRESHOLD: f64 = 15.0;
pub const SLIGHT_THRESHOLD: f64 = 5.0;

/// Overall trend magnitude that switches recommendations to positive/corrective.
pub const RECOMMENDATION_THRESHOLD: f64 = 10.0;

/// Estimator confidence: 10 points per analysis up to 70, plus 7.5 per component.
pub const CONFIDENCE_PER_ANALYSIS: f64 = 10.0;
pub const CONFIDENCE_ANALYSIS_CAP: f64 = 70.0;
pub const CONFIDENCE_PER_COMPONENT: f64 = 7.5;
pub const CONFIDENCE_MAX: f64 = 100.0;

/// Risk factor windows and limits.
pub const RISK_RECENT_WINDOW: usize = 5;
pub const RISK_MAX_NEGATIVE: usize = 2;
pub const RISK_MAX_LOW_CONFIDENCE: usize = 2;
pub const RISK_LOW_CONFIDENCE_BELOW: f64 = 60.0;
pub const RISK_DIARY_WINDOW: usize = 7;
pub const RISK_MIN_DIARY_ENTRIES: usize = 3;
pub const RISK_LOW_MOOD_BELOW: f64 = 3.0;

/// Short-horizon prediction.
pub const PREDICTION_RECENT_WINDOW: usize = 5;
pub const PREDICTION_TREND_FACTOR: f64 = 0.5;
pub const PREDICTION_CHANGE_MARGIN: f64 = 5.0;
pub const PREDICTION_TIMEFRAME: &str = "7 days";
pub const RELIABILITY_PER_ANALYSIS: f64 = 10.0;
pub const RELIABILITY_CAP: f64 = 90.0;

/// Window sizes for the confidence trend and recent-emotion scan.
pub const CONFIDENCE_TREND_WINDOW: usize = 3;
pub const RECENT_EMOTION_WINDOW: usize = 3;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "PAWTREND_LOG";

/// Config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "pawtrend.toml";
