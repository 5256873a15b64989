//! Short-horizon prediction of the detection confidence.

use pawtrend_core::config::PredictionPolicy;
use pawtrend_core::types::EmotionAnalysisRecord;

use super::messages;
use super::types::Prediction;
use super::window;

/// Project the recent mean confidence forward by a fraction of the overall trend.
///
/// `recent` must be ordered newest first; `None` when it is empty.
pub fn predict(
    recent: &[&EmotionAnalysisRecord],
    overall_trend: f64,
    policy: &PredictionPolicy,
) -> Option<Prediction> {
    if recent.is_empty() {
        return None;
    }
    let window_len = policy.recent_window.min(recent.len());
    let current = window::mean_by(&recent[..window_len], |a| a.confidence());
    let predicted = (current + overall_trend * policy.trend_factor).clamp(0.0, 100.0);

    let description = if predicted > current + policy.change_margin {
        messages::PREDICTION_IMPROVEMENT
    } else if predicted < current - policy.change_margin {
        messages::PREDICTION_DECLINE
    } else {
        messages::PREDICTION_STABLE
    };

    let reliability =
        (recent.len() as f64 * policy.reliability_per_analysis).min(policy.reliability_cap);

    Some(Prediction {
        predicted_confidence: predicted,
        current_confidence: current,
        description: description.to_string(),
        timeframe: policy.timeframe.clone(),
        reliability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn records(confidences: &[f64]) -> Vec<EmotionAnalysisRecord> {
        confidences
            .iter()
            .map(|c| EmotionAnalysisRecord::new("felice", *c, Utc::now()))
            .collect()
    }

    #[test]
    fn test_empty_has_no_prediction() {
        assert!(predict(&[], 10.0, &PredictionPolicy::default()).is_none());
    }

    #[test]
    fn test_uses_five_most_recent() {
        let recs = records(&[80.0, 80.0, 80.0, 80.0, 80.0, 0.0, 0.0]);
        let refs: Vec<&EmotionAnalysisRecord> = recs.iter().collect();
        let p = predict(&refs, 0.0, &PredictionPolicy::default()).unwrap();
        assert_eq!(p.current_confidence, 80.0);
        assert_eq!(p.predicted_confidence, 80.0);
        assert_eq!(p.description, messages::PREDICTION_STABLE);
        assert_eq!(p.timeframe, "7 days");
        assert_eq!(p.reliability, 70.0);
    }

    #[test]
    fn test_clamped_and_described() {
        let recs = records(&[95.0, 95.0]);
        let refs: Vec<&EmotionAnalysisRecord> = recs.iter().collect();
        let up = predict(&refs, 30.0, &PredictionPolicy::default()).unwrap();
        assert_eq!(up.predicted_confidence, 100.0);
        assert_eq!(up.description, messages::PREDICTION_IMPROVEMENT);

        let down = predict(&refs, -40.0, &PredictionPolicy::default()).unwrap();
        assert_eq!(down.predicted_confidence, 75.0);
        assert_eq!(down.description, messages::PREDICTION_DECLINE);
    }

    #[test]
    fn test_margin_is_exclusive() {
        let recs = records(&[50.0]);
        let refs: Vec<&EmotionAnalysisRecord> = recs.iter().collect();
        let p = predict(&refs, 10.0, &PredictionPolicy::default()).unwrap();
        assert_eq!(p.predicted_confidence, 55.0);
        assert_eq!(p.description, messages::PREDICTION_STABLE);
    }

    #[test]
    fn test_reliability_caps_at_ninety() {
        let recs = records(&[60.0; 12]);
        let refs: Vec<&EmotionAnalysisRecord> = recs.iter().collect();
        let p = predict(&refs, 0.0, &PredictionPolicy::default()).unwrap();
        assert_eq!(p.reliability, 90.0);
    }
}
