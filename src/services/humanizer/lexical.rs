// Lexical Stages
// Word- and phrase-level substitutions: formal phrases, synonyms, contractions,
// Q/A markers and formulaic openers

use rand::Rng;
use regex::Captures;

use super::rules::{
    answer_marker_re, contraction_rules, formal_phrase_rules, overall_re, question_marker_re,
    synonym_rules, the_article_re, ANSWER_MARKERS, ARTICLE_VARIANTS, OVERALL_VARIANTS,
    QUESTION_MARKERS,
};
use super::{pick, StageContext};
use crate::services::text_processor::{starts_uppercase, uppercase_first};

/// Replace every formal phrase with a random informal alternative.
pub fn replace_formal_phrases<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    let mut out = text.to_string();
    for rule in formal_phrase_rules() {
        out = rule
            .pattern
            .replace_all(&out, |_: &Captures<'_>| pick(rng, rule.alternatives).to_string())
            .into_owned();
    }
    out
}

/// Swap words for synonyms at the profile's synonym rate.
pub fn substitute_synonyms<R: Rng + ?Sized>(text: &str, rng: &mut R, ctx: &StageContext) -> String {
    let rate = ctx.profile.synonym_rate;
    let mut out = text.to_string();
    for rule in synonym_rules() {
        out = rule
            .pattern
            .replace_all(&out, |caps: &Captures<'_>| {
                let original = &caps[0];
                if !rng.gen_bool(rate) {
                    return original.to_string();
                }
                let replacement = pick(rng, rule.alternatives);
                if starts_uppercase(original) {
                    uppercase_first(replacement)
                } else {
                    replacement.to_string()
                }
            })
            .into_owned();
    }
    out
}

pub fn insert_contractions<R: Rng + ?Sized>(text: &str, rng: &mut R, ctx: &StageContext) -> String {
    let rate = ctx.profile.contraction_rate;
    let mut out = text.to_string();
    for rule in contraction_rules() {
        out = rule
            .pattern
            .replace_all(&out, |caps: &Captures<'_>| {
                if rng.gen_bool(rate) {
                    rule.contraction.to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
    }
    out
}

/// Vary `Q:` / `A:` markers so interview-style text loses its template look.
pub fn randomize_qa_markers<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    let out = question_marker_re()
        .replace_all(text, |_: &Captures<'_>| format!("{} ", pick(rng, QUESTION_MARKERS)))
        .into_owned();
    answer_marker_re()
        .replace_all(&out, |_: &Captures<'_>| format!("{} ", pick(rng, ANSWER_MARKERS)))
        .into_owned()
}

/// Rotate summary openers ("Overall,") and references to "the article".
pub fn vary_openers<R: Rng + ?Sized>(text: &str, rng: &mut R, _ctx: &StageContext) -> String {
    let out = overall_re()
        .replace_all(text, |_: &Captures<'_>| {
            let variant = pick(rng, OVERALL_VARIANTS);
            if variant.is_empty() {
                String::new()
            } else {
                format!("{} ", variant)
            }
        })
        .into_owned();
    the_article_re()
        .replace_all(&out, |caps: &Captures<'_>| {
            if rng.gen_bool(0.5) {
                pick(rng, ARTICLE_VARIANTS).to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
