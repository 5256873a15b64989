//! # pawtrend-analysis
//!
//! Wellness trend estimation for a single pet.
//! Combines up to four observation streams (emotion analyses, diary moods,
//! health metrics, wellness scores) into a classified trend, a heuristic
//! confidence, risk factors, recommendations and a 7-day prediction.

pub mod input;
pub mod trend;

pub use input::ObservationStreams;
pub use trend::{
    estimate, Prediction, PredictionResult, TrendClassification, TrendComponent, TrendEstimator,
    TrendSource,
};
