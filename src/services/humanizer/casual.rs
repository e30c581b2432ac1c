// Casual Insertion Stage
// Per-sentence fillers, intensifiers and coordinating starters

use rand::Rng;
use regex::Captures;

use super::rules::{
    intensifiable_re, FILLERS_LONG, FILLERS_SHORT, INTENSIFIERS_LONG, INTENSIFIERS_SHORT,
    STARTERS_LONG, STARTERS_SHORT,
};
use super::{pick, StageContext};
use crate::services::text_processor::{lowercase_first, split_keep_delimiters, starts_uppercase};

/// Fillers only go into sentences longer than this many words.
const FILLER_MIN_WORDS: usize = 8;

pub fn insert_casual_language<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    ctx: &StageContext,
) -> String {
    let long = ctx.tier.is_long();
    let fillers = if long { FILLERS_LONG } else { FILLERS_SHORT };
    let intensifiers = if long { INTENSIFIERS_LONG } else { INTENSIFIERS_SHORT };
    let starters = if long { STARTERS_LONG } else { STARTERS_SHORT };

    let parts = split_keep_delimiters(text);
    let mut out = String::with_capacity(text.len() + 64);

    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 || part.trim().is_empty() {
            out.push_str(part);
            continue;
        }

        let leading = &part[..part.len() - part.trim_start().len()];
        let mut body = part.trim_start().to_string();

        if rng.gen_bool(ctx.profile.filler_rate) {
            if let Some(with_filler) = insert_filler(&body, fillers, rng) {
                body = with_filler;
            }
        }

        if rng.gen_bool(ctx.profile.casual_rate) {
            body = intensifiable_re()
                .replacen(&body, 1, |caps: &Captures<'_>| {
                    format!("{} {}", pick(rng, intensifiers), &caps[0])
                })
                .into_owned();
        }

        if i > 0 && rng.gen_bool(ctx.profile.starter_rate) {
            let trimmed = body.trim();
            if starts_uppercase(trimmed) {
                body = format!("{}{}", pick(rng, starters), lowercase_first(trimmed));
            }
        }

        out.push_str(leading);
        out.push_str(&body);
    }

    out
}

/// Put a filler word at position 1 or 2. Words are re-joined with single spaces.
fn insert_filler<R: Rng + ?Sized>(sentence: &str, fillers: &[&str], rng: &mut R) -> Option<String> {
    let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
    if sentence_words.len() <= FILLER_MIN_WORDS {
        return None;
    }
    let pos = rng.gen_range(1..=2usize.min(sentence_words.len() - 1));
    let filler = format!("{},", pick(rng, fillers));

    let mut rebuilt: Vec<&str> = Vec::with_capacity(sentence_words.len() + 1);
    rebuilt.extend_from_slice(&sentence_words[..pos]);
    rebuilt.push(&filler);
    rebuilt.extend_from_slice(&sentence_words[pos..]);
    Some(rebuilt.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LengthTier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx_with(filler: f64, casual: f64, starter: f64, tier: LengthTier) -> StageContext {
        let mut ctx = StageContext::for_tier(tier);
        ctx.profile.filler_rate = filler;
        ctx.profile.casual_rate = casual;
        ctx.profile.starter_rate = starter;
        ctx
    }

    #[test]
    fn test_zero_rates_leave_text_alone() {
        let text = "This is a good plan. It is simple. We like it!";
        let mut rng = StdRng::seed_from_u64(1);
        let out = insert_casual_language(text, &mut rng, &ctx_with(0.0, 0.0, 0.0, LengthTier::Short));
        assert_eq!(out, text);
    }

    #[test]
    fn test_intensifier_prefixes_first_adjective_only() {
        let text = "A good and simple plan.";
        let mut rng = StdRng::seed_from_u64(5);
        let out = insert_casual_language(text, &mut rng, &ctx_with(0.0, 1.0, 0.0, LengthTier::Short));
        let prefixed = ["pretty", "really", "quite"]
            .iter()
            .any(|w| out == format!("A {} good and simple plan.", w));
        assert!(prefixed, "got {:?}", out);
    }

    #[test]
    fn test_starter_skips_first_sentence_and_keeps_spacing() {
        let text = "First one here. Second one here.";
        let mut rng = StdRng::seed_from_u64(9);
        let out = insert_casual_language(text, &mut rng, &ctx_with(0.0, 0.0, 1.0, LengthTier::Short));
        assert!(out.starts_with("First one here. "), "got {:?}", out);
        let second = &out["First one here. ".len()..];
        assert!(
            ["And second", "But second", "So second"]
                .iter()
                .any(|s| second.starts_with(s)),
            "got {:?}",
            out
        );
    }

    #[test]
    fn test_filler_needs_long_sentence() {
        let short = "Only five words are here.";
        let mut rng = StdRng::seed_from_u64(2);
        let out = insert_casual_language(short, &mut rng, &ctx_with(1.0, 0.0, 0.0, LengthTier::Short));
        assert_eq!(out, short);

        let long = "We walked along the river for most of the afternoon.";
        let mut rng = StdRng::seed_from_u64(2);
        let out = insert_casual_language(long, &mut rng, &ctx_with(1.0, 0.0, 0.0, LengthTier::Long));
        let words: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(words.len(), 11);
        assert!(
            ["basically,", "actually,", "honestly,"].contains(&words[1])
                || ["basically,", "actually,", "honestly,"].contains(&words[2]),
            "got {:?}",
            out
        );
    }
}
