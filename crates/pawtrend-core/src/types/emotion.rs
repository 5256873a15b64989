//! Emotion labels: an open string tag plus a closed set of recognized kinds.
//!
//! Analyses arrive with labels in more than one locale ("anxious", "ansioso").
//! The raw label is kept verbatim for the distribution histogram; rules that
//! care about meaning (risk factors, recommendations) go through `kind()`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion kinds the estimator's rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    Happy,
    Calm,
    Playful,
    Excited,
    Anxious,
    Sad,
    Aggressive,
    Fearful,
}

impl EmotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Playful => "playful",
            Self::Excited => "excited",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Aggressive => "aggressive",
            Self::Fearful => "fearful",
        }
    }

    pub fn all() -> &'static [EmotionKind] {
        &[
            Self::Happy,
            Self::Calm,
            Self::Playful,
            Self::Excited,
            Self::Anxious,
            Self::Sad,
            Self::Aggressive,
            Self::Fearful,
        ]
    }

    /// Resolve a label in any supported locale. Case and surrounding
    /// whitespace are ignored.
    pub fn from_alias(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        let kind = match normalized.as_str() {
            "happy" | "happiness" | "felice" | "contento" | "contenta" | "gioioso" | "gioiosa" => {
                Self::Happy
            }
            "calm" | "relaxed" | "calmo" | "calma" | "rilassato" | "rilassata" | "tranquillo" => {
                Self::Calm
            }
            "playful" | "giocoso" | "giocosa" | "giocherellone" => Self::Playful,
            "excited" | "eccitato" | "eccitata" | "entusiasta" => Self::Excited,
            "anxious" | "anxiety" | "nervous" | "ansioso" | "ansiosa" | "nervoso" | "nervosa" => {
                Self::Anxious
            }
            "sad" | "sadness" | "triste" => Self::Sad,
            "aggressive" | "aggression" | "aggressivo" | "aggressiva" => Self::Aggressive,
            "fearful" | "scared" | "afraid" | "pauroso" | "paurosa" | "spaventato" | "spaventata" => {
                Self::Fearful
            }
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primary emotion reported by an analysis, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionLabel(String);

impl EmotionLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The recognized kind behind this label, if any.
    pub fn kind(&self) -> Option<EmotionKind> {
        EmotionKind::from_alias(&self.0)
    }

    pub fn is(&self, kind: EmotionKind) -> bool {
        self.kind() == Some(kind)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmotionLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for EmotionLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italian_and_english_aliases_agree() {
        assert_eq!(EmotionKind::from_alias("ansioso"), Some(EmotionKind::Anxious));
        assert_eq!(EmotionKind::from_alias("anxious"), Some(EmotionKind::Anxious));
        assert_eq!(EmotionKind::from_alias("triste"), Some(EmotionKind::Sad));
        assert_eq!(EmotionKind::from_alias("aggressivo"), Some(EmotionKind::Aggressive));
        assert_eq!(EmotionKind::from_alias("giocoso"), Some(EmotionKind::Playful));
    }

    #[test]
    fn test_alias_ignores_case_and_whitespace() {
        assert_eq!(EmotionKind::from_alias("  Playful "), Some(EmotionKind::Playful));
        assert_eq!(EmotionKind::from_alias("FELICE"), Some(EmotionKind::Happy));
    }

    #[test]
    fn test_unknown_label_has_no_kind() {
        let label = EmotionLabel::new("curioso");
        assert_eq!(label.kind(), None);
        assert_eq!(label.as_str(), "curioso");
    }

    #[test]
    fn test_canonical_names_resolve_to_themselves() {
        for kind in EmotionKind::all() {
            assert_eq!(EmotionKind::from_alias(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_label_serializes_as_plain_string() {
        let json = serde_json::to_string(&EmotionLabel::new("triste")).unwrap();
        assert_eq!(json, "\"triste\"");
    }
}
