//! Trend estimator.
//!
//! Pipeline: per-source components → weighted sum → classification, then
//! confidence, emotion distribution, confidence trend, risk factors,
//! recommendations and prediction. Pure and synchronous; no step can fail.

pub mod classify;
pub mod components;
pub mod estimator;
pub mod messages;
pub mod prediction;
pub mod recommendations;
pub mod risk;
pub mod scoring;
pub mod types;
pub mod window;

pub use estimator::{estimate, TrendEstimator};
pub use risk::RiskFactor;
pub use types::{Prediction, PredictionResult, TrendClassification, TrendComponent, TrendSource};
