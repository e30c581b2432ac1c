// Feature Extractor
// Computes the surface signals that scoring weighs and the rewrite stages perturb

use std::collections::HashSet;

use super::lexicon::{
    casual_re, contraction_re, double_space_re, first_word_re, missing_comma_re,
    period_no_space_re, red_flag_res, transition_re, typo_re,
};
use crate::models::FeatureVector;
use crate::services::text_processor::TextDocument;

const TYPO_WEIGHT: f64 = 8.0;
const DOUBLE_SPACE_WEIGHT: f64 = 5.0;
const MISSING_COMMA_WEIGHT: f64 = 6.0;
const PERIOD_NO_SPACE_WEIGHT: f64 = 7.0;

pub fn extract_features(text: &str) -> FeatureVector {
    let doc = TextDocument::new(text);
    extract_document_features(&doc)
}

pub fn extract_document_features(doc: &TextDocument<'_>) -> FeatureVector {
    let text = doc.text();
    let word_count = doc.word_count();
    let sentence_count = doc.sentence_count();
    let words_floor = word_count.max(1) as f64;
    let sentences_floor = sentence_count.max(1) as f64;
    let lengths = doc.sentence_lengths();

    let exclamation_count = text.matches('!').count();

    FeatureVector {
        word_count,
        sentence_count,
        length_cv: length_cv(&lengths),
        similarity_ratio: similarity_ratio(&lengths),
        contraction_density: contraction_re().find_iter(text).count() as f64 / words_floor,
        red_flag_count: red_flag_res()
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum(),
        starter_diversity: starter_diversity(doc),
        transition_density: transition_re().find_iter(text).count() as f64 / sentences_floor,
        imperfection_score: imperfection_score(text),
        casual_density: casual_re().find_iter(text).count() as f64 / words_floor,
        punctuation_score: punctuation_score(text, exclamation_count),
        only_periods: !text.contains(['!', '?', ';', ':', '—']),
        repetition_ratio: repetition_ratio(doc.words()),
        exclamation_count,
    }
}

/// Coefficient of variation of sentence lengths (population stdev / mean).
fn length_cv(lengths: &[usize]) -> Option<f64> {
    if lengths.len() <= 2 {
        return None;
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / n;
    if mean <= 0.0 {
        return Some(0.0);
    }
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(variance.sqrt() / mean)
}

/// Share of adjacent sentence pairs whose lengths differ by fewer than 3 words.
fn similarity_ratio(lengths: &[usize]) -> Option<f64> {
    if lengths.len() <= 3 {
        return None;
    }
    let similar = lengths
        .windows(2)
        .filter(|pair| pair[0].abs_diff(pair[1]) < 3)
        .count();
    Some(similar as f64 / (lengths.len() - 1) as f64)
}

fn starter_diversity(doc: &TextDocument<'_>) -> Option<f64> {
    let first_words: Vec<String> = doc
        .sentences()
        .iter()
        .filter_map(|s| first_word_re().captures(s.text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_lowercase()))
        .collect();
    if first_words.len() <= 3 {
        return None;
    }
    let unique: HashSet<&str> = first_words.iter().map(String::as_str).collect();
    Some(unique.len() as f64 / first_words.len() as f64)
}

fn imperfection_score(text: &str) -> f64 {
    let typos = typo_re().find_iter(text).count() as f64;
    let double_spaces = double_space_re().find_iter(text).count() as f64;
    let missing_commas = missing_comma_re().find_iter(text).count() as f64;
    let period_no_space = period_no_space_re().find_iter(text).count() as f64;

    typos * TYPO_WEIGHT
        + double_spaces * DOUBLE_SPACE_WEIGHT
        + missing_commas * MISSING_COMMA_WEIGHT
        + period_no_space * PERIOD_NO_SPACE_WEIGHT
}

fn punctuation_score(text: &str, exclamation_count: usize) -> f64 {
    let mut score = 0.0;
    if text.contains("...") {
        score += 8.0;
    }
    if text.contains('—') {
        score += 8.0;
    }
    if text.contains(';') {
        score += 6.0;
    }
    if (1..=3).contains(&exclamation_count) {
        score += 7.0;
    }
    if text.contains('?') {
        score += 5.0;
    }
    if text.contains(':') {
        score += 4.0;
    }
    score
}

/// Unique / total over substantial words (letters only, longer than 3).
fn repetition_ratio(words: &[&str]) -> Option<f64> {
    let substantial: Vec<String> = words
        .iter()
        .map(|w| {
            w.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|w| w.len() > 3)
        .collect();
    if substantial.len() <= 10 {
        return None;
    }
    let unique: HashSet<&str> = substantial.iter().map(String::as_str).collect();
    Some(unique.len() as f64 / substantial.len() as f64)
}
