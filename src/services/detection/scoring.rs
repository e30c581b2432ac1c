// Scoring Engine
// Folds the feature vector into a signed confidence and a 0-10 AI-likelihood score
//
// Every band below is fixed: changing a threshold or delta changes observable scores.

use serde::{Deserialize, Serialize};

use super::features::{extract_document_features, extract_features};
use crate::models::{FeatureVector, SignalContribution};
use crate::services::text_processor::TextDocument;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Signed accumulator, roughly -100 (human) to +100 (machine).
    pub confidence: f64,
    /// Confidence mapped onto 0..=100.
    pub percentage: f64,
    pub score: i32,
    pub features: FeatureVector,
    pub contributions: Vec<SignalContribution>,
}

impl ScoreBreakdown {
    pub fn explanations(&self) -> Vec<String> {
        self.contributions
            .iter()
            .map(|c| format!("{} {} contrib={:+}", c.signal, c.detail, c.delta))
            .collect()
    }
}

struct Accumulator {
    confidence: f64,
    contributions: Vec<SignalContribution>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            confidence: 0.0,
            contributions: Vec::new(),
        }
    }

    fn add(&mut self, signal: &str, delta: f64, detail: String) {
        if delta == 0.0 {
            return;
        }
        self.confidence += delta;
        self.contributions.push(SignalContribution {
            signal: signal.to_string(),
            delta,
            detail,
        });
    }
}

/// Score text on the 0-10 AI-likelihood scale.
pub fn calculate_ai_score(text: &str) -> i32 {
    score_features(extract_features(text)).score
}

pub fn score_text(text: &str) -> ScoreBreakdown {
    score_features(extract_features(text))
}

pub fn score_document(doc: &TextDocument<'_>) -> ScoreBreakdown {
    score_features(extract_document_features(doc))
}

pub fn score_features(features: FeatureVector) -> ScoreBreakdown {
    let mut acc = Accumulator::new();
    let words = features.words_floor();
    let sentences = features.sentences_floor();

    // Burstiness: uniform sentence lengths read as generated.
    if let Some(cv) = features.length_cv {
        acc.add("length_cv", length_cv_delta(cv), format!("cv={:.3}", cv));
    }

    if let Some(ratio) = features.similarity_ratio {
        let delta = if ratio > 0.7 {
            20.0
        } else if ratio < 0.3 {
            -15.0
        } else {
            0.0
        };
        acc.add("similarity", delta, format!("ratio={:.3}", ratio));
    }

    let density = features.contraction_density;
    let contraction_delta = if density == 0.0 && words > 30 {
        30.0
    } else if density < 0.01 {
        20.0
    } else if density < 0.02 {
        10.0
    } else if density > 0.05 {
        -20.0
    } else if density > 0.03 {
        -10.0
    } else {
        0.0
    };
    acc.add(
        "contractions",
        contraction_delta,
        format!("density={:.4}", density),
    );

    acc.add(
        "red_flags",
        features.red_flag_count as f64 * 15.0,
        format!("count={}", features.red_flag_count),
    );

    if let Some(variety) = features.starter_diversity {
        let delta = if variety < 0.4 {
            25.0
        } else if variety < 0.6 {
            12.0
        } else if variety > 0.85 {
            -15.0
        } else {
            0.0
        };
        acc.add("starters", delta, format!("variety={:.3}", variety));
    }

    let transitions = features.transition_density;
    let transition_delta = if transitions > 0.4 {
        25.0
    } else if transitions > 0.25 {
        15.0
    } else if transitions > 0.15 {
        8.0
    } else {
        0.0
    };
    acc.add(
        "transitions",
        transition_delta,
        format!("density={:.3}", transitions),
    );

    acc.add(
        "imperfections",
        -features.imperfection_score,
        format!("score={}", features.imperfection_score),
    );

    let casual = features.casual_density;
    let casual_delta = if casual > 0.04 {
        -20.0
    } else if casual > 0.02 {
        -12.0
    } else if casual == 0.0 && words > 50 {
        10.0
    } else {
        0.0
    };
    acc.add("casual", casual_delta, format!("density={:.4}", casual));

    if features.only_periods && sentences > 3 {
        acc.add("punctuation", 15.0, "periods only".to_string());
    } else {
        acc.add(
            "punctuation",
            -features.punctuation_score,
            format!("variety={}", features.punctuation_score),
        );
    }

    if let Some(ratio) = features.repetition_ratio {
        let delta = if ratio < 0.5 {
            18.0
        } else if ratio < 0.65 {
            10.0
        } else if ratio > 0.85 {
            -12.0
        } else {
            0.0
        };
        acc.add("repetition", delta, format!("ratio={:.3}", ratio));
    }

    let exclamations = features.exclamation_count;
    let exclamation_delta = if exclamations == 0 && words > 50 {
        8.0
    } else if exclamations > 5 && sentences < 10 {
        12.0
    } else if (1..=3).contains(&exclamations) {
        -8.0
    } else {
        0.0
    };
    acc.add(
        "exclamations",
        exclamation_delta,
        format!("count={}", exclamations),
    );

    let percentage = (50.0 + acc.confidence / 2.0).clamp(0.0, 100.0);
    let score = to_display_score(percentage);

    ScoreBreakdown {
        confidence: acc.confidence,
        percentage,
        score,
        features,
        contributions: acc.contributions,
    }
}

fn length_cv_delta(cv: f64) -> f64 {
    if cv < 0.15 {
        35.0
    } else if cv < 0.25 {
        25.0
    } else if cv < 0.35 {
        15.0
    } else if cv < 0.45 {
        5.0
    } else if cv > 0.7 {
        -25.0
    } else if cv > 0.55 {
        -15.0
    } else {
        0.0
    }
}

/// Percentage to 0..=10; exact halves go to the even neighbour.
fn to_display_score(percentage: f64) -> i32 {
    ((percentage / 10.0).round_ties_even() as i32).clamp(0, 10)
}
