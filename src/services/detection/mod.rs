// Detection Module
// Heuristic AI-likelihood scoring organized into specialized submodules:
// - lexicon: Compiled word/phrase patterns the signals are counted with
// - features: Extracts the surface feature vector from a document
// - scoring: Folds features into a signed confidence and a 0-10 score

pub mod lexicon;
pub mod features;
pub mod scoring;

// Re-export commonly used functions
pub use features::{extract_document_features, extract_features};
pub use scoring::{
    calculate_ai_score,
    score_document,
    score_features,
    score_text,
    ScoreBreakdown,
};
