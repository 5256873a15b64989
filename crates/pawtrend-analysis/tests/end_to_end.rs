//! Whole-pipeline scenarios, from store rows to the final result.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pawtrend_analysis::trend::messages;
use pawtrend_analysis::{
    estimate, ObservationStreams, TrendClassification, TrendEstimator, TrendSource,
};
use pawtrend_core::config::EstimatorConfig;
use pawtrend_core::types::{EmotionAnalysisRecord, WellnessScoreRecord};

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 18, 0, 0).unwrap() + Duration::days(n)
}

/// Ten analyses over ten days with confidence rising 50 -> 95.
fn rising_analyses() -> Vec<EmotionAnalysisRecord> {
    (0..10)
        .map(|i| EmotionAnalysisRecord::new("felice", 50.0 + 5.0 * i as f64, day(i)))
        .collect()
}

#[test]
fn test_rising_confidence_over_ten_days() {
    let result = estimate(&rising_analyses(), &[], &[], &[]);

    assert_eq!(result.components.len(), 1);
    let component = &result.components[0];
    assert_eq!(component.name, "Analisi Emotive");
    assert_eq!(component.weight, 0.4);
    // old third 50,55,60 -> 55; recent third 85,90,95 -> 90
    assert!((component.trend - 35.0).abs() < 1e-9);

    assert!(result.overall_trend > 5.0);
    assert_eq!(result.trend, TrendClassification::SlightImprovement);
    assert_eq!(result.confidence, 77.5);
    assert!((result.confidence_trend - 35.0).abs() < 1e-9);
    assert_eq!(result.emotion_distribution.len(), 1);
    assert_eq!(result.emotion_distribution["felice"], 100);
    assert!(result.risk_factors.is_empty());
    assert_eq!(
        result.recommendations,
        vec![messages::REC_KEEP_REINFORCING, messages::REC_REWARD_CALM]
    );

    let prediction = result.prediction.expect("prediction present");
    // recent five 75..95 -> 85, plus 14 * 0.5
    assert!((prediction.current_confidence - 85.0).abs() < 1e-9);
    assert!((prediction.predicted_confidence - 92.0).abs() < 1e-9);
    assert_eq!(prediction.description, messages::PREDICTION_IMPROVEMENT);
    assert_eq!(prediction.timeframe, "7 days");
    assert_eq!(prediction.reliability, 90.0);
}

#[test]
fn test_input_order_does_not_matter_for_timestamped_streams() {
    let mut shuffled = rising_analyses();
    shuffled.reverse();
    shuffled.swap(2, 7);
    assert_eq!(
        estimate(&shuffled, &[], &[], &[]),
        estimate(&rising_analyses(), &[], &[], &[])
    );
}

#[test]
fn test_classification_on_exact_overall_values() {
    // Unit weight and scale on wellness makes the overall trend exact.
    let mut config = EstimatorConfig::default();
    config.weights.wellness = 1.0;
    config.scales.wellness = 1.0;
    let estimator = TrendEstimator::new(config);
    let analyses = vec![EmotionAnalysisRecord::new("calmo", 70.0, day(0))];

    let run = |delta: f64| {
        let wellness = vec![
            WellnessScoreRecord::new(50.0, day(0)),
            WellnessScoreRecord::new(50.0 + delta, day(1)),
        ];
        estimator.estimate(&analyses, &[], &[], &wellness)
    };

    assert_eq!(run(20.0).trend, TrendClassification::SignificantImprovement);
    assert_eq!(run(5.0).trend, TrendClassification::Stable);
    assert_eq!(run(5.01).trend, TrendClassification::SlightImprovement);
    assert_eq!(run(-5.0).trend, TrendClassification::Stable);
    assert_eq!(run(-16.0).trend, TrendClassification::SignificantDecline);
}

#[test]
fn test_json_rows_with_malformed_fields() {
    let json = r#"{
        "analyses": [
            {"id": "a3", "primary_emotion": "ansioso", "primary_confidence": "55", "created_at": "2024-09-03T10:00:00Z"},
            {"id": "a2", "primary_emotion": "triste", "primary_confidence": null, "created_at": "2024-09-02T10:00:00Z"},
            {"id": "a1", "primary_emotion": "aggressivo", "primary_confidence": "??", "created_at": "2024-09-01T10:00:00Z"}
        ],
        "diary_entries": [
            {"entry_date": "2024-09-03", "mood_score": 2},
            {"entry_date": "2024-09-02", "mood_score": null},
            {"entry_date": "2024-09-01", "mood_score": "bad"}
        ],
        "health_metrics": [{"value": null}, {"value": "4"}],
        "wellness_scores": []
    }"#;
    let streams = ObservationStreams::from_json(json).unwrap();
    let result = streams.estimate(&TrendEstimator::with_defaults());

    // Three analyses: emotion component present, 55 - 0.
    let emotion = result.component(TrendSource::EmotionAnalyses).unwrap();
    assert!((emotion.trend - 55.0).abs() < 1e-9);
    // Only two rated diary entries: no mood component.
    assert!(result.component(TrendSource::DiaryMood).is_none());
    // Health: (0 - 4) * 5 = -20.
    let health = result.component(TrendSource::HealthMetrics).unwrap();
    assert!((health.trend + 20.0).abs() < 1e-9);

    assert_eq!(
        result.risk_factors,
        vec![
            messages::RISK_NEGATIVE_EMOTIONS.to_string(),
            messages::RISK_LOW_RELIABILITY.to_string(),
        ]
    );
    assert!(result.recommendations.contains(&messages::REC_REDUCE_STRESS.to_string()));
    assert_eq!(result.emotion_distribution.len(), 3);
}

#[test]
fn test_result_serializes_for_the_frontend() {
    let result = estimate(&rising_analyses(), &[], &[], &[]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trend"], "slight_improvement");
    assert_eq!(json["components"][0]["source"], "emotion_analyses");
    assert_eq!(json["prediction"]["timeframe"], "7 days");

    let empty = serde_json::to_value(estimate(&[], &[], &[], &[])).unwrap();
    assert_eq!(empty["trend"], "insufficient_data");
    assert!(empty["prediction"].is_null());
}
