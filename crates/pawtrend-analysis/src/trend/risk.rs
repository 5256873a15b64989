//! Risk factors drawn from the most recent analyses and diary entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use pawtrend_core::config::RiskPolicy;
use pawtrend_core::types::{DiaryEntry, EmotionAnalysisRecord};

use super::messages;
use super::window::{self, newest_first};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    FrequentNegativeEmotions,
    LowAnalysisReliability,
    LowDiaryMood,
}

impl RiskFactor {
    pub fn message(&self) -> &'static str {
        match self {
            Self::FrequentNegativeEmotions => messages::RISK_NEGATIVE_EMOTIONS,
            Self::LowAnalysisReliability => messages::RISK_LOW_RELIABILITY,
            Self::LowDiaryMood => messages::RISK_LOW_DIARY_MOOD,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every risk rule, in fixed order.
///
/// `recent` must be the analyses ordered newest first.
pub fn assess(
    recent: &[&EmotionAnalysisRecord],
    diary: &[DiaryEntry],
    policy: &RiskPolicy,
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();
    let window_len = policy.recent_window.min(recent.len());
    let window = &recent[..window_len];

    let negative = window
        .iter()
        .filter(|a| {
            a.primary_emotion
                .kind()
                .is_some_and(|kind| policy.negative_emotions.contains(&kind))
        })
        .count();
    if negative > policy.max_negative {
        factors.push(RiskFactor::FrequentNegativeEmotions);
    }

    let unreliable = window
        .iter()
        .filter(|a| a.confidence() < policy.low_confidence_below)
        .count();
    if unreliable > policy.max_low_confidence {
        factors.push(RiskFactor::LowAnalysisReliability);
    }

    if low_diary_mood(diary, policy) {
        factors.push(RiskFactor::LowDiaryMood);
    }

    for factor in &factors {
        tracing::trace!(risk = ?factor, "risk factor raised");
    }
    factors
}

fn low_diary_mood(diary: &[DiaryEntry], policy: &RiskPolicy) -> bool {
    let moods: Vec<f64> = newest_first(diary, |e| e.entry_date)
        .into_iter()
        .filter_map(|e| e.mood())
        .take(policy.diary_window)
        .collect();
    moods.len() > policy.min_diary_entries && window::mean(&moods) < policy.low_mood_below
}
