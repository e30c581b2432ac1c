// Readability Estimator
// Flesch reading ease over the shared segmentation

use super::text_processor::TextDocument;

/// Flesch reading ease, rounded to one decimal.
///
/// Word, sentence and syllable totals are each floored to 1 so empty
/// input still yields a finite score.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let doc = TextDocument::new(text);
    flesch_for_document(&doc)
}

pub fn flesch_for_document(doc: &TextDocument<'_>) -> f64 {
    let word_count = doc.word_count().max(1) as f64;
    let sentence_count = doc.sentence_count().max(1) as f64;
    let syllable_count = doc.syllable_count().max(1) as f64;

    let score =
        206.835 - 1.015 * (word_count / sentence_count) - 84.6 * (syllable_count / word_count);
    round_one_decimal(score)
}

/// Round on the exact binary value with ties to even, so 0.25 -> 0.2 and
/// 0.35 (stored just below) -> 0.3.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
