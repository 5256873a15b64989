//! Domain types shared across Pawtrend crates.

pub mod collections;
pub mod emotion;
pub mod lenient;
pub mod records;

pub use emotion::{EmotionKind, EmotionLabel};
pub use records::{DiaryEntry, EmotionAnalysisRecord, HealthMetricRecord, WellnessScoreRecord};
