//! User-facing text produced by the estimator.

pub const REC_MORE_DATA: &str =
    "Run more emotion analyses so the trend can be estimated reliably";

pub const REC_KEEP_REINFORCING: &str =
    "Keep up the activities that are improving your pet's mood";
pub const REC_REWARD_CALM: &str = "Reward calm, positive behaviour consistently to reinforce it";

pub const REC_VET_CHECK: &str = "Book a behavioural check-up with your veterinarian";
pub const REC_CALMING_ACTIVITIES: &str =
    "Introduce calming activities and a quieter daily routine";

pub const REC_BALANCED_ROUTINE: &str = "Maintain a balanced routine of play and rest";

pub const REC_MONITOR_CLOSELY: &str = "Watch your pet's behaviour closely over the next few days";
pub const REC_LOG_DIARY: &str = "Log diary entries regularly to track mood changes";

pub const REC_REDUCE_STRESS: &str =
    "Reduce environmental stressors such as loud noises and unfamiliar visitors";
pub const REC_KEEP_STIMULATING: &str = "Keep up regular play sessions to maintain stimulation";

pub const RISK_NEGATIVE_EMOTIONS: &str = "Frequent negative emotions in recent analyses";
pub const RISK_LOW_RELIABILITY: &str = "Low reliability in recent analyses";
pub const RISK_LOW_DIARY_MOOD: &str = "Low mood recorded in recent diary entries";

pub const PREDICTION_IMPROVEMENT: &str = "Emotional wellbeing is expected to improve";
pub const PREDICTION_DECLINE: &str = "Emotional wellbeing may decline; keep a closer watch";
pub const PREDICTION_STABLE: &str = "Emotional wellbeing is expected to remain stable";
