// humanizeAI Data Models
// Request/response shapes plus the value types shared by detection and rewriting

use serde::{Deserialize, Serialize};

// ============ Request / Response ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
}

/// Result of one humanize call. Field names are part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResult {
    pub humanized_text: String,
    pub ai_score: i32,
    pub explanation: String,
    pub word_count: i32,
    pub readability_score: f64,
    pub model_used: String,
    #[serde(rename = "ai_assisted")]
    pub ai_assisted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

// ============ Length Tier & Intensity ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthTier {
    Short,
    Long,
    VeryLong,
}

impl LengthTier {
    pub fn from_word_count(word_count: usize) -> Self {
        if word_count > 300 {
            Self::VeryLong
        } else if word_count > 100 {
            Self::Long
        } else {
            Self::Short
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::VeryLong => "very-long",
        }
    }

    /// `long` and `very-long` both count as long text for the rewrite stages.
    pub fn is_long(&self) -> bool {
        !matches!(self, Self::Short)
    }

    pub fn variation_summary(&self) -> &'static str {
        match self {
            Self::Short => "35% word variation, balanced approach",
            Self::Long => "40% word variation, sentence length variation",
            Self::VeryLong => "50% word variation, paragraph breaks, transitions",
        }
    }
}

/// Per-call stochastic rates for the rewrite pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityProfile {
    pub synonym_rate: f64,
    pub contraction_rate: f64,
    pub casual_rate: f64,
    pub filler_rate: f64,
    pub starter_rate: f64,
}

impl IntensityProfile {
    pub fn for_tier(tier: LengthTier) -> Self {
        match tier {
            LengthTier::VeryLong => Self {
                synonym_rate: 0.65,
                contraction_rate: 0.80,
                casual_rate: 0.45,
                filler_rate: 0.35,
                starter_rate: 0.30,
            },
            LengthTier::Long => Self {
                synonym_rate: 0.60,
                contraction_rate: 0.75,
                casual_rate: 0.40,
                filler_rate: 0.30,
                starter_rate: 0.25,
            },
            LengthTier::Short => Self {
                synonym_rate: 0.50,
                contraction_rate: 0.70,
                casual_rate: 0.35,
                filler_rate: 0.25,
                starter_rate: 0.20,
            },
        }
    }
}

// ============ Signals ============

/// Surface signals extracted from one document.
///
/// `None` marks a signal whose sample was too small to compute
/// (e.g. burstiness with three or fewer sentences).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub word_count: usize,
    pub sentence_count: usize,
    pub length_cv: Option<f64>,
    pub similarity_ratio: Option<f64>,
    pub contraction_density: f64,
    pub red_flag_count: usize,
    pub starter_diversity: Option<f64>,
    pub transition_density: f64,
    pub imperfection_score: f64,
    pub casual_density: f64,
    pub punctuation_score: f64,
    pub only_periods: bool,
    pub repetition_ratio: Option<f64>,
    pub exclamation_count: usize,
}

impl FeatureVector {
    /// Word count floored to 1, used as a ratio denominator.
    pub fn words_floor(&self) -> usize {
        self.word_count.max(1)
    }

    /// Sentence count floored to 1, used as a ratio denominator.
    pub fn sentences_floor(&self) -> usize {
        self.sentence_count.max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignalContribution {
    pub signal: String,
    pub delta: f64,
    pub detail: String,
}

// ============ Score Band ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Warning,
    Danger,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        match score.clamp(0, 10) {
            0..=2 => Self::Excellent,
            3..=4 => Self::Good,
            5..=6 => Self::Warning,
            _ => Self::Danger,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }

    pub fn label(&self, score: i32) -> String {
        format!("{} - {}% AI Detection", self.name(), score.clamp(0, 10) * 10)
    }
}

// ============ Word Diff ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiffToken {
    Unchanged { word: String },
    Replaced { word: String },
    Added { word: String, structural: bool },
}

impl DiffToken {
    pub fn word(&self) -> &str {
        match self {
            Self::Unchanged { word } | Self::Replaced { word } | Self::Added { word, .. } => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LengthTier::from_word_count(0), LengthTier::Short);
        assert_eq!(LengthTier::from_word_count(100), LengthTier::Short);
        assert_eq!(LengthTier::from_word_count(101), LengthTier::Long);
        assert_eq!(LengthTier::from_word_count(300), LengthTier::Long);
        assert_eq!(LengthTier::from_word_count(301), LengthTier::VeryLong);
    }

    #[test]
    fn test_profiles_grow_with_length() {
        let short = IntensityProfile::for_tier(LengthTier::Short);
        let long = IntensityProfile::for_tier(LengthTier::Long);
        let very = IntensityProfile::for_tier(LengthTier::VeryLong);
        assert!(short.synonym_rate < long.synonym_rate);
        assert!(long.synonym_rate < very.synonym_rate);
        assert_eq!(very.starter_rate, 0.30);
    }

    #[test]
    fn test_result_wire_keys() {
        let result = TransformationResult {
            humanized_text: "hi".to_string(),
            ai_score: 3,
            explanation: "x".to_string(),
            word_count: 1,
            readability_score: 90.5,
            model_used: "python-smart-short".to_string(),
            ai_assisted: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "humanizedText",
            "aiScore",
            "explanation",
            "wordCount",
            "readabilityScore",
            "modelUsed",
            "ai_assisted",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_score_band_labels() {
        assert_eq!(ScoreBand::from_score(2).label(2), "Excellent - 20% AI Detection");
        assert_eq!(ScoreBand::from_score(4), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(6), ScoreBand::Warning);
        assert_eq!(ScoreBand::from_score(11).label(11), "Danger - 100% AI Detection");
    }
}
