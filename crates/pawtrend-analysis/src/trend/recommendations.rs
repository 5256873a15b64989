//! Recommendation list, built in a fixed order and truncated.

use pawtrend_core::config::EstimatorConfig;
use pawtrend_core::types::{EmotionAnalysisRecord, EmotionKind};

use super::messages;

/// Build recommendations.
///
/// Order: trend-direction advice, monitoring advice when any risk was raised,
/// then emotion-specific advice from the most recent analyses. The list is
/// cut to `max_recommendations`.
pub fn recommend(
    overall_trend: f64,
    has_risk_factors: bool,
    recent: &[&EmotionAnalysisRecord],
    config: &EstimatorConfig,
) -> Vec<String> {
    let mut out: Vec<&'static str> = Vec::with_capacity(8);

    if overall_trend > config.recommendation_threshold {
        out.extend([messages::REC_KEEP_REINFORCING, messages::REC_REWARD_CALM]);
    } else if overall_trend < -config.recommendation_threshold {
        out.extend([messages::REC_VET_CHECK, messages::REC_CALMING_ACTIVITIES]);
    } else {
        out.push(messages::REC_BALANCED_ROUTINE);
    }

    if has_risk_factors {
        out.extend([messages::REC_MONITOR_CLOSELY, messages::REC_LOG_DIARY]);
    }

    let scan = &recent[..config.recent_emotion_window.min(recent.len())];
    let seen = |kind: EmotionKind| scan.iter().any(|a| a.primary_emotion.is(kind));
    if seen(EmotionKind::Anxious) {
        out.push(messages::REC_REDUCE_STRESS);
    }
    if seen(EmotionKind::Playful) {
        out.push(messages::REC_KEEP_STIMULATING);
    }

    out.truncate(config.max_recommendations);
    out.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(label: &str) -> EmotionAnalysisRecord {
        EmotionAnalysisRecord::new(label, 80.0, Utc::now())
    }

    #[test]
    fn test_positive_trend_gets_two_reinforcements() {
        let config = EstimatorConfig::default();
        let recs = recommend(12.0, false, &[], &config);
        assert_eq!(recs, vec![messages::REC_KEEP_REINFORCING, messages::REC_REWARD_CALM]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let config = EstimatorConfig::default();
        assert_eq!(recommend(10.0, false, &[], &config), vec![messages::REC_BALANCED_ROUTINE]);
        assert_eq!(recommend(-10.0, false, &[], &config), vec![messages::REC_BALANCED_ROUTINE]);
    }

    #[test]
    fn test_everything_fires_and_truncates_to_five() {
        let config = EstimatorConfig::default();
        let a = record("ansioso");
        let p = record("playful");
        let recs = recommend(-20.0, true, &[&a, &p], &config);
        assert_eq!(
            recs,
            vec![
                messages::REC_VET_CHECK,
                messages::REC_CALMING_ACTIVITIES,
                messages::REC_MONITOR_CLOSELY,
                messages::REC_LOG_DIARY,
                messages::REC_REDUCE_STRESS,
            ]
        );
    }

    #[test]
    fn test_only_three_most_recent_are_scanned() {
        let config = EstimatorConfig::default();
        let f = record("felice");
        let p = record("giocoso");
        let recs = recommend(0.0, false, &[&f, &f, &f, &p], &config);
        assert_eq!(recs, vec![messages::REC_BALANCED_ROUTINE]);

        let recs = recommend(0.0, false, &[&f, &p], &config);
        assert_eq!(recs, vec![messages::REC_BALANCED_ROUTINE, messages::REC_KEEP_STIMULATING]);
    }
}
