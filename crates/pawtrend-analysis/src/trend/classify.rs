//! Six-way bucketing of the overall trend.

use pawtrend_core::config::ClassificationThresholds;

use super::types::TrendClassification;

/// Bucket `overall_trend`. Comparisons are strict, so a value sitting exactly
/// on a threshold falls into the milder bucket.
pub fn classify(overall_trend: f64, thresholds: &ClassificationThresholds) -> TrendClassification {
    if overall_trend > thresholds.significant {
        TrendClassification::SignificantImprovement
    } else if overall_trend > thresholds.slight {
        TrendClassification::SlightImprovement
    } else if overall_trend < -thresholds.significant {
        TrendClassification::SignificantDecline
    } else if overall_trend < -thresholds.slight {
        TrendClassification::SlightDecline
    } else {
        TrendClassification::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(v: f64) -> TrendClassification {
        classify(v, &ClassificationThresholds::default())
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(bucket(20.0), TrendClassification::SignificantImprovement);
        assert_eq!(bucket(15.0), TrendClassification::SlightImprovement);
        assert_eq!(bucket(5.01), TrendClassification::SlightImprovement);
        assert_eq!(bucket(5.0), TrendClassification::Stable);
        assert_eq!(bucket(0.0), TrendClassification::Stable);
        assert_eq!(bucket(-5.0), TrendClassification::Stable);
        assert_eq!(bucket(-5.01), TrendClassification::SlightDecline);
        assert_eq!(bucket(-15.0), TrendClassification::SlightDecline);
        assert_eq!(bucket(-15.5), TrendClassification::SignificantDecline);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = ClassificationThresholds {
            significant: 8.0,
            slight: 2.0,
        };
        assert_eq!(classify(9.0, &t), TrendClassification::SignificantImprovement);
        assert_eq!(classify(-3.0, &t), TrendClassification::SlightDecline);
    }
}
