// Humanize Orchestrator
// Runs the rewrite pipeline once, then measures the rewritten text

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{LengthTier, TransformationResult};
use crate::services::detection::score_document;
use crate::services::humanizer::run_pipeline;
use crate::services::readability::flesch_for_document;
use crate::services::text_processor::TextDocument;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HumanizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Humanize with a fresh OS-seeded generator. Output differs between calls.
pub fn humanize(text: &str) -> Result<TransformationResult, HumanizeError> {
    humanize_with_rng(text, &mut StdRng::from_entropy())
}

/// Reproducible variant: the same seed and input always give the same result.
pub fn humanize_with_seed(text: &str, seed: u64) -> Result<TransformationResult, HumanizeError> {
    humanize_with_rng(text, &mut StdRng::seed_from_u64(seed))
}

pub fn humanize_with_rng<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Result<TransformationResult, HumanizeError> {
    if text.trim().is_empty() {
        return Err(HumanizeError::InvalidInput("text required".to_string()));
    }

    let request_id = Uuid::new_v4();
    let started = Instant::now();
    info!(
        request_id = %request_id,
        input_chars = text.chars().count(),
        "humanize.start"
    );

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let humanized = run_pipeline(text, rng);
        build_result(humanized)
    }));

    match outcome {
        Ok(result) => {
            info!(
                request_id = %request_id,
                word_count = result.word_count,
                ai_score = result.ai_score,
                readability = result.readability_score,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "humanize.done"
            );
            Ok(result)
        }
        Err(panic_info) => {
            let message = panic_message(panic_info.as_ref());
            error!(request_id = %request_id, error = %message, "humanize.failed");
            Err(HumanizeError::InternalError(message))
        }
    }
}

/// Measure already-rewritten text. Every metric and the tier come from
/// `humanized_text` itself, never from the original input.
pub fn build_result(humanized_text: String) -> TransformationResult {
    let (word_count, readability_score, ai_score) = {
        let doc = TextDocument::new(&humanized_text);
        (
            doc.word_count(),
            flesch_for_document(&doc),
            score_document(&doc).score,
        )
    };
    let tier = LengthTier::from_word_count(word_count);

    TransformationResult {
        explanation: explain(word_count, tier, ai_score),
        humanized_text,
        ai_score,
        word_count: word_count as i32,
        readability_score,
        model_used: format!("python-smart-{}", tier.as_str()),
        ai_assisted: false,
    }
}

pub fn explain(word_count: usize, tier: LengthTier, ai_score: i32) -> String {
    format!(
        "Smart humanization ({} words, {}): {}. AI Detection: {}/10 ({}% likely AI-generated).",
        word_count,
        tier.as_str(),
        tier.variation_summary(),
        ai_score,
        ai_score * 10
    )
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
