//! Top-level TrendEstimator: streams in, `PredictionResult` out.

use pawtrend_core::config::EstimatorConfig;
use pawtrend_core::types::{
    DiaryEntry, EmotionAnalysisRecord, HealthMetricRecord, WellnessScoreRecord,
};

use super::classify::classify;
use super::components;
use super::prediction::predict;
use super::recommendations::recommend;
use super::risk;
use super::scoring;
use super::types::PredictionResult;
use super::window::newest_first;

/// The trend estimator. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct TrendEstimator {
    config: EstimatorConfig,
}

impl TrendEstimator {
    /// Create a new estimator with the given configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Create an estimator with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EstimatorConfig::default())
    }

    /// The configuration this estimator runs with.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the wellness trend from the four observation streams.
    ///
    /// `health` must be ordered most recent first; the other streams are
    /// ordered by their own timestamps. Total: never panics, never fails.
    pub fn estimate(
        &self,
        analyses: &[EmotionAnalysisRecord],
        diary: &[DiaryEntry],
        health: &[HealthMetricRecord],
        wellness: &[WellnessScoreRecord],
    ) -> PredictionResult {
        let config = &self.config;
        if analyses.is_empty() {
            // Only the diary rule can still fire without analyses.
            let risk_factors = risk::assess(&[], diary, &config.risk);
            tracing::debug!(
                risks = risk_factors.len(),
                "no emotion analyses, returning insufficient_data"
            );
            return PredictionResult {
                risk_factors: risk_factors.iter().map(|r| r.message().to_string()).collect(),
                ..PredictionResult::insufficient_data()
            };
        }

        let components = components::collect(analyses, diary, health, wellness, config);
        for c in &components {
            tracing::trace!(
                source = %c.source,
                trend = c.trend,
                weight = c.weight,
                samples = c.samples,
                "trend component"
            );
        }

        // Missing sources drop out; the remaining weights are not rescaled.
        let overall_trend: f64 = components.iter().map(|c| c.weighted()).sum();
        let trend = classify(overall_trend, &config.thresholds);
        let confidence =
            scoring::estimator_confidence(analyses.len(), components.len(), &config.confidence);

        let recent = newest_first(analyses, |a| a.created_at);
        let risk_factors = risk::assess(&recent, diary, &config.risk);
        let recommendations = recommend(overall_trend, !risk_factors.is_empty(), &recent, config);
        let prediction = predict(&recent, overall_trend, &config.prediction);

        tracing::debug!(
            analyses = analyses.len(),
            components = components.len(),
            overall_trend,
            confidence,
            trend = %trend,
            "trend estimated"
        );

        PredictionResult {
            trend,
            confidence,
            overall_trend,
            components,
            emotion_distribution: scoring::emotion_distribution(analyses),
            confidence_trend: scoring::confidence_trend(analyses, config.confidence_trend_window),
            risk_factors: risk_factors.iter().map(|r| r.message().to_string()).collect(),
            recommendations,
            prediction,
        }
    }
}

/// Estimate with the default configuration.
pub fn estimate(
    analyses: &[EmotionAnalysisRecord],
    diary: &[DiaryEntry],
    health: &[HealthMetricRecord],
    wellness: &[WellnessScoreRecord],
) -> PredictionResult {
    TrendEstimator::with_defaults().estimate(analyses, diary, health, wellness)
}
