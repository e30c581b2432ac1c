// humanizeAI Core Services
// Scoring, readability, rewriting and the orchestration around them

pub mod text_processor;
pub mod readability;
pub mod detection;
pub mod humanizer;
pub mod orchestrator;
pub mod diff;
pub mod config_store;

pub use text_processor::{sentences, syllables, words, TextDocument};
pub use readability::flesch_reading_ease;
pub use config_store::{AppConfig, ConfigStore, HumanizerConfig};
pub use diff::{summarize, word_diff, DiffSummary};
pub use orchestrator::{humanize, humanize_with_rng, humanize_with_seed, HumanizeError};

// Re-export detection module functions
pub use detection::{
    calculate_ai_score,
    score_text,
    ScoreBreakdown,
};
