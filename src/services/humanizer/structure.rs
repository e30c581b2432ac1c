// Structure Stages
// Sentence split/merge for burstiness and paragraph breaks for very long inputs

use rand::Rng;

use super::rules::{MERGE_CONNECTORS, PARAGRAPH_TRANSITIONS, SPLIT_CONJUNCTIONS};
use super::{pick, StageContext};
use crate::models::LengthTier;
use crate::services::text_processor::{lowercase_first, split_keep_delimiters, uppercase_first};

const SPLIT_MIN_WORDS: usize = 30;
const SPLIT_MARGIN: usize = 10;
const SPLIT_PROBABILITY: f64 = 0.30;
const MERGE_MAX_WORDS: usize = 8;
const MERGE_PROBABILITY: f64 = 0.40;

const PARAGRAPH_MIN_CHUNKS: usize = 15;
const PARAGRAPH_FIRST_BREAK: usize = 7;
const TRANSITION_PROBABILITY: f64 = 0.5;

/// Split very long sentences and merge very short ones (long inputs only).
pub fn vary_sentence_length<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    ctx: &StageContext,
) -> String {
    if !ctx.tier.is_long() {
        return text.to_string();
    }

    let parts = split_keep_delimiters(text);
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < parts.len() {
        let part = parts[i];
        if i % 2 == 1 || part.trim().is_empty() {
            out.push_str(part);
            i += 1;
            continue;
        }

        let leading = &part[..part.len() - part.trim_start().len()];
        let sentence = part.trim();
        let delimiter = parts.get(i + 1).copied().unwrap_or("");
        let sentence_words: Vec<&str> = sentence.split_whitespace().collect();

        if sentence_words.len() > SPLIT_MIN_WORDS && rng.gen_bool(SPLIT_PROBABILITY) {
            if let Some(j) = find_split_point(&sentence_words) {
                let first = sentence_words[..j].join(" ");
                let second = sentence_words[j + 1..].join(" ");
                out.push_str(leading);
                out.push_str(&first);
                out.push_str(". ");
                out.push_str(&uppercase_first(&second));
                out.push_str(delimiter);
                i += 2;
                continue;
            }
        } else if sentence_words.len() < MERGE_MAX_WORDS
            && i + 2 < parts.len()
            && rng.gen_bool(MERGE_PROBABILITY)
        {
            let next = parts[i + 2].trim();
            if !next.is_empty() {
                let connector = pick(rng, MERGE_CONNECTORS);
                out.push_str(leading);
                out.push_str(sentence);
                out.push_str(connector);
                out.push(' ');
                out.push_str(&lowercase_first(next));
                out.push_str(parts.get(i + 3).copied().unwrap_or(""));
                i += 4;
                continue;
            }
        }

        out.push_str(leading);
        out.push_str(sentence);
        out.push_str(delimiter);
        i += 2;
    }

    out
}

/// First conjunction at a word index in `[10, len - 10)`.
fn find_split_point(sentence_words: &[&str]) -> Option<usize> {
    let end = sentence_words.len().saturating_sub(SPLIT_MARGIN);
    (SPLIT_MARGIN..end).find(|&j| {
        let word = sentence_words[j].to_lowercase();
        SPLIT_CONJUNCTIONS.contains(&word.as_str())
    })
}

/// Break very long inputs into paragraphs, sometimes opening with a transition.
pub fn insert_paragraphs<R: Rng + ?Sized>(text: &str, rng: &mut R, ctx: &StageContext) -> String {
    if ctx.tier != LengthTier::VeryLong {
        return text.to_string();
    }

    let chunks: Vec<&str> = text.split(". ").collect();
    if chunks.len() <= PARAGRAPH_MIN_CHUNKS {
        return text.to_string();
    }

    let step = rng.gen_range(5..=8usize);
    let mut out = String::with_capacity(text.len() + 64);

    for (idx, chunk) in chunks.iter().enumerate() {
        let is_break = idx >= PARAGRAPH_FIRST_BREAK && (idx - PARAGRAPH_FIRST_BREAK) % step == 0;
        if !is_break {
            if idx > 0 {
                out.push_str(". ");
            }
            out.push_str(chunk);
            continue;
        }

        out.push_str(".\n\n");
        let body = chunk.trim_start();
        if !body.is_empty() && rng.gen_bool(TRANSITION_PROBABILITY) {
            out.push_str(pick(rng, PARAGRAPH_TRANSITIONS));
            out.push_str(", ");
            out.push_str(&lowercase_first(body));
        } else {
            out.push_str(body);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered_sentences(count: usize, words_each: usize) -> String {
        (0..count)
            .map(|n| {
                let mut words = vec![format!("Sentence{}", n)];
                words.extend((1..words_each).map(|w| format!("w{}", w)));
                format!("{}.", words.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_tier_is_untouched() {
        let text = "Tiny. Bits. Here.";
        let mut rng = StdRng::seed_from_u64(0);
        let out = vary_sentence_length(text, &mut rng, &StageContext::for_tier(LengthTier::Short));
        assert_eq!(out, text);
    }

    #[test]
    fn test_find_split_point_respects_margins() {
        let mut words = vec!["x"; 32];
        words[5] = "and";
        assert_eq!(find_split_point(&words), None);
        words[12] = "but";
        assert_eq!(find_split_point(&words), Some(12));
        words[25] = "or";
        assert_eq!(find_split_point(&words), Some(12));
    }

    #[test]
    fn test_find_split_point_on_short_input_does_not_panic() {
        assert_eq!(find_split_point(&["and"; 5]), None);
        assert_eq!(find_split_point(&[]), None);
    }

    #[test]
    fn test_length_variation_keeps_words() {
        let long_sentence = format!(
            "{} because {}.",
            vec!["alpha"; 15].join(" "),
            vec!["omega"; 16].join(" ")
        );
        let text = format!("Short one. Another tiny one. {} Done now.", long_sentence);
        let in_words = text.split_whitespace().count();

        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = vary_sentence_length(&text, &mut rng, &StageContext::for_tier(LengthTier::Long));
            let out_words = out.split_whitespace().count();
            // a split drops the conjunction, a merge adds a connector
            assert!(out_words + 1 >= in_words && out_words <= in_words + 4, "seed {}: {:?}", seed, out);
            assert!(!out.contains(".."), "seed {}: {:?}", seed, out);
            assert!(out.contains("alpha") && out.contains("omega"));
        }
    }

    #[test]
    fn test_last_short_sentence_has_nothing_to_merge_with() {
        let text = "Done.";
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = vary_sentence_length(text, &mut rng, &StageContext::for_tier(LengthTier::Long));
            assert_eq!(out, "Done.");
        }
    }

    #[test]
    fn test_paragraphs_only_for_very_long() {
        let text = numbered_sentences(20, 5);
        let mut rng = StdRng::seed_from_u64(4);
        let out = insert_paragraphs(&text, &mut rng, &StageContext::for_tier(LengthTier::Long));
        assert_eq!(out, text);
    }

    #[test]
    fn test_paragraph_breaks_start_at_eighth_chunk() {
        let text = numbered_sentences(20, 5);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = insert_paragraphs(&text, &mut rng, &StageContext::for_tier(LengthTier::VeryLong));
            let paragraphs: Vec<&str> = out.split("\n\n").collect();
            assert!(paragraphs.len() >= 2, "seed {}: {:?}", seed, out);
            assert!(paragraphs[0].ends_with("Sentence6 w1 w2 w3 w4."));
            assert!(out.contains("sentence7 w1") || out.contains("\n\nSentence7 w1"));
        }
    }

    #[test]
    fn test_paragraphs_need_more_than_fifteen_chunks() {
        let text = numbered_sentences(10, 5);
        let mut rng = StdRng::seed_from_u64(4);
        let out = insert_paragraphs(&text, &mut rng, &StageContext::for_tier(LengthTier::VeryLong));
        assert_eq!(out, text);
    }
}
