//! Estimator confidence, emotion distribution and confidence trend.

use std::collections::BTreeMap;

use pawtrend_core::config::ConfidencePolicy;
use pawtrend_core::types::collections::FxHashMap;
use pawtrend_core::types::EmotionAnalysisRecord;

use super::window::{self, oldest_first};

/// `min(analyses * per_analysis, analysis_cap) + components * per_component`,
/// clamped to `[0, max]`.
pub fn estimator_confidence(
    analysis_count: usize,
    component_count: usize,
    policy: &ConfidencePolicy,
) -> f64 {
    let from_analyses = (analysis_count as f64 * policy.per_analysis).min(policy.analysis_cap);
    let from_components = component_count as f64 * policy.per_component;
    (from_analyses + from_components).clamp(0.0, policy.max)
}

/// Rounded percentage of analyses per raw `primary_emotion` label.
///
/// Percentages are rounded independently and not renormalized.
pub fn emotion_distribution(analyses: &[EmotionAnalysisRecord]) -> BTreeMap<String, u32> {
    if analyses.is_empty() {
        return BTreeMap::new();
    }
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for analysis in analyses {
        *counts.entry(analysis.primary_emotion.as_str()).or_insert(0) += 1;
    }

    let total = analyses.len() as f64;
    counts
        .into_iter()
        .map(|(label, count)| {
            let pct = (count as f64 / total * 100.0).round() as u32;
            (label.to_string(), pct)
        })
        .collect()
}

/// Mean confidence of the newest `window` analyses minus the oldest `window`.
///
/// Zero with fewer than `window` analyses. The two ends overlap when there
/// are fewer than `2 * window` analyses.
pub fn confidence_trend(analyses: &[EmotionAnalysisRecord], window_size: usize) -> f64 {
    if window_size == 0 || analyses.len() < window_size {
        return 0.0;
    }
    let sorted = oldest_first(analyses, |a| a.created_at);
    let (first, last) = window::ends(&sorted, window_size);
    window::mean_by(last, |a| a.confidence()) - window::mean_by(first, |a| a.confidence())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn analysis(label: &str, confidence: f64, day: i64) -> EmotionAnalysisRecord {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        EmotionAnalysisRecord::new(label, confidence, base + Duration::days(day))
    }

    #[test]
    fn test_confidence_caps_analysis_part_at_seventy() {
        let policy = ConfidencePolicy::default();
        assert_eq!(estimator_confidence(10, 1, &policy), 77.5);
        assert_eq!(estimator_confidence(3, 0, &policy), 30.0);
        assert_eq!(estimator_confidence(7, 4, &policy), 100.0);
        assert_eq!(estimator_confidence(0, 0, &policy), 0.0);
    }

    #[test]
    fn test_distribution_rounds_each_label() {
        let analyses = vec![
            analysis("felice", 80.0, 0),
            analysis("felice", 80.0, 1),
            analysis("ansioso", 80.0, 2),
        ];
        let dist = emotion_distribution(&analyses);
        assert_eq!(dist.get("felice"), Some(&67));
        assert_eq!(dist.get("ansioso"), Some(&33));
        assert_eq!(dist.values().sum::<u32>(), 100);
    }

    #[test]
    fn test_distribution_may_drift_from_hundred() {
        let analyses: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .enumerate()
            .map(|(i, l)| analysis(l, 50.0, i as i64))
            .collect();
        // 6 labels at 16.67% each round to 17 -> 102.
        let dist = emotion_distribution(&analyses);
        assert_eq!(dist.values().sum::<u32>(), 102);
    }

    #[test]
    fn test_confidence_trend_needs_three() {
        let analyses = vec![analysis("felice", 10.0, 0), analysis("felice", 90.0, 1)];
        assert_eq!(confidence_trend(&analyses, 3), 0.0);
    }

    #[test]
    fn test_confidence_trend_overlapping_windows() {
        let analyses = vec![
            analysis("felice", 60.0, 3),
            analysis("felice", 50.0, 2),
            analysis("felice", 40.0, 1),
            analysis("felice", 30.0, 0),
        ];
        // first three: 30, 40, 50 -> 40; last three: 40, 50, 60 -> 50
        assert!((confidence_trend(&analyses, 3) - 10.0).abs() < 1e-10);
    }
}
