//! End-to-end tests through the public library surface
//!
//! Covers the JSON operation, the orchestrator contract (metrics measured on
//! the rewritten text), and the fixed scoring fixtures.

use humanize_ai_lib::api::{handle_humanize, handle_humanize_seeded, health};
use humanize_ai_lib::models::{DiffToken, ScoreBand};
use humanize_ai_lib::services::detection::{calculate_ai_score, score_text};
use humanize_ai_lib::services::diff::word_diff;
use humanize_ai_lib::services::readability::flesch_reading_ease;
use humanize_ai_lib::{humanize, humanize_with_seed, HumanizeError};
use serde_json::json;

const FORMAL: &str = "In order to finish the work the team must plan. \
    This shows that the team can plan the work well. \
    It is important to note that the plan stays simple. \
    The team will follow the plan and finish the work. \
    The team will review the plan and finish the work.";

const CASUAL: &str = "Can't believe it! \
    Honestly, teh weather was strange and cold all week—we stayed inside on most rainy days. \
    We don't mind that very much now. \
    Thier old dog barked at every single car that drove past the little house on the hill near the edge of town.";

fn long_formal_text(sentences: usize) -> String {
    let pool = [
        "It is important to note that the system demonstrates a major advancement in the field",
        "Furthermore, the results are very useful because they represent a vast improvement",
        "In order to understand the impact, we need a big and careful review of the data",
        "However, the team does not have the time to study every complex detail right now",
        "Therefore, the article will focus on the main findings and leave the rest for later",
        "Overall, the work is good and the plan is simple enough for the team to follow",
    ];
    (0..sentences)
        .map(|i| format!("{}.", pool[i % pool.len()]))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_fixture_scores() {
    assert!(calculate_ai_score(FORMAL) >= 7);
    assert!(calculate_ai_score(CASUAL) <= 3);
    assert_eq!(calculate_ai_score(""), 6);
}

#[test]
fn test_readability_fixture() {
    assert_eq!(flesch_reading_ease("The cat sat on the mat. It was happy."), 108.3);
    assert_eq!(flesch_reading_ease(""), 121.2);
}

#[test]
fn test_api_round_trip() {
    let resp = handle_humanize_seeded(&json!({ "text": FORMAL }), Some(2024));
    assert_eq!(resp.status, 200);

    let humanized = resp.body["humanizedText"].as_str().unwrap();
    assert_eq!(resp.body["aiScore"].as_i64().unwrap(), calculate_ai_score(humanized) as i64);
    assert_eq!(
        resp.body["readabilityScore"].as_f64().unwrap(),
        flesch_reading_ease(humanized)
    );
    assert!(resp.body["explanation"]
        .as_str()
        .unwrap()
        .starts_with("Smart humanization ("));
}

#[test]
fn test_api_rejections() {
    assert_eq!(handle_humanize(&json!({})).status, 400);
    assert_eq!(handle_humanize(&json!({ "text": ["a"] })).status, 400);
    assert_eq!(health().body, json!({ "ok": true }));
}

#[test]
fn test_unseeded_calls_succeed() {
    for _ in 0..5 {
        let result = humanize(FORMAL).unwrap();
        assert!(!result.humanized_text.is_empty());
        assert!((0..=10).contains(&result.ai_score));
    }
    assert!(matches!(humanize("\n"), Err(HumanizeError::InvalidInput(_))));
}

#[test]
fn test_humanizing_lowers_score_on_average() {
    let before = calculate_ai_score(FORMAL);
    let total: i32 = (0..20)
        .map(|seed| humanize_with_seed(FORMAL, seed).unwrap().ai_score)
        .sum();
    assert!(
        (total as f64 / 20.0) < before as f64,
        "average {} not below {}",
        total as f64 / 20.0,
        before
    );
}

#[test]
fn test_very_long_input_gets_paragraphs() {
    let text = long_formal_text(48);
    let mut saw_break = false;
    for seed in 0..5 {
        let result = humanize_with_seed(&text, seed).unwrap();
        assert_eq!(result.model_used, "python-smart-very-long");
        assert!(!result.humanized_text.contains("\n\n\n"));
        saw_break |= result.humanized_text.contains("\n\n");
    }
    assert!(saw_break);
}

#[test]
fn test_long_input_uses_long_tier() {
    let text = long_formal_text(10);
    let result = humanize_with_seed(&text, 8).unwrap();
    assert!(result.word_count > 100, "{}", result.word_count);
    assert!(result.model_used.starts_with("python-smart-"));
}

#[test]
fn test_diff_follows_humanized_words() {
    let result = humanize_with_seed(FORMAL, 5).unwrap();
    let tokens = word_diff(FORMAL, &result.humanized_text);
    assert_eq!(tokens.len(), result.humanized_text.split_whitespace().count());
    assert!(tokens.iter().any(|t| matches!(t, DiffToken::Unchanged { .. })));
}

#[test]
fn test_breakdown_matches_score() {
    let breakdown = score_text(FORMAL);
    assert_eq!(breakdown.score, calculate_ai_score(FORMAL));
    assert!(!breakdown.explanations().is_empty());
    assert_eq!(ScoreBand::from_score(breakdown.score), ScoreBand::Danger);
}
