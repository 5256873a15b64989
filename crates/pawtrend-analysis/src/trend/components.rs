//! Per-source trend signals.
//!
//! Each function returns `None` when its stream has fewer observations than
//! the configured minimum; a missing component contributes nothing.

use pawtrend_core::config::EstimatorConfig;
use pawtrend_core::types::{
    DiaryEntry, EmotionAnalysisRecord, HealthMetricRecord, WellnessScoreRecord,
};

use super::types::{TrendComponent, TrendSource};
use super::window::{self, halves, oldest_first, thirds};

/// Mean `primary_confidence` of the newest third minus the oldest third.
pub fn emotion_trend(
    analyses: &[EmotionAnalysisRecord],
    config: &EstimatorConfig,
) -> Option<TrendComponent> {
    if analyses.len() < config.min_samples.emotion {
        tracing::trace!(samples = analyses.len(), "emotion trend skipped");
        return None;
    }
    let sorted = oldest_first(analyses, |a| a.created_at);
    let (old, recent) = thirds(&sorted)?;
    let signal = window::mean_by(recent, |a| a.confidence()) - window::mean_by(old, |a| a.confidence());

    Some(TrendComponent::new(
        TrendSource::EmotionAnalyses,
        signal,
        config.weights.emotion,
        analyses.len(),
    ))
}

/// Mean diary mood of the newest third minus the oldest third, rescaled.
/// Entries without a mood score are ignored.
pub fn mood_trend(entries: &[DiaryEntry], config: &EstimatorConfig) -> Option<TrendComponent> {
    let rated: Vec<(Option<_>, f64)> = entries
        .iter()
        .filter_map(|e| e.mood().map(|mood| (e.entry_date, mood)))
        .collect();
    if rated.len() < config.min_samples.mood {
        tracing::trace!(samples = rated.len(), "mood trend skipped");
        return None;
    }
    let sorted = oldest_first(&rated, |(date, _)| *date);
    let (old, recent) = thirds(&sorted)?;
    let signal = (window::mean_by(recent, |(_, m)| *m) - window::mean_by(old, |(_, m)| *m))
        * config.scales.mood;

    Some(TrendComponent::new(
        TrendSource::DiaryMood,
        signal,
        config.weights.mood,
        rated.len(),
    ))
}

/// Mean of the recent half minus the older half, rescaled.
///
/// `metrics` must be ordered most recent first. The recent half is the
/// larger one when the length is odd.
pub fn health_trend(
    metrics: &[HealthMetricRecord],
    config: &EstimatorConfig,
) -> Option<TrendComponent> {
    if metrics.len() < config.min_samples.health {
        tracing::trace!(samples = metrics.len(), "health trend skipped");
        return None;
    }
    let (recent, older) = halves(metrics);
    if older.is_empty() {
        return None;
    }
    let signal = (window::mean_by(recent, |m| m.numeric_value())
        - window::mean_by(older, |m| m.numeric_value()))
        * config.scales.health;

    Some(TrendComponent::new(
        TrendSource::HealthMetrics,
        signal,
        config.weights.health,
        metrics.len(),
    ))
}

/// Latest wellness score minus the earliest one, rescaled.
pub fn wellness_trend(
    scores: &[WellnessScoreRecord],
    config: &EstimatorConfig,
) -> Option<TrendComponent> {
    if scores.len() < config.min_samples.wellness || scores.len() < 2 {
        tracing::trace!(samples = scores.len(), "wellness trend skipped");
        return None;
    }
    let sorted = oldest_first(scores, |s| s.timestamp());
    let first = sorted.first()?;
    let last = sorted.last()?;
    let signal = (last.score() - first.score()) * config.scales.wellness;

    Some(TrendComponent::new(
        TrendSource::WellnessScores,
        signal,
        config.weights.wellness,
        scores.len(),
    ))
}

/// All components that have enough data, in fixed source order.
pub fn collect(
    analyses: &[EmotionAnalysisRecord],
    diary: &[DiaryEntry],
    health: &[HealthMetricRecord],
    wellness: &[WellnessScoreRecord],
    config: &EstimatorConfig,
) -> smallvec::SmallVec<[TrendComponent; 4]> {
    [
        emotion_trend(analyses, config),
        mood_trend(diary, config),
        health_trend(health, config),
        wellness_trend(wellness, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}
