// Noise Stages
// Human-looking slips: typos, spacing errors, dropped commas, emphasis and
// stylistic punctuation. Each stage is a pure function of (text, rng).

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, NoExpand};
use tracing::debug;

use super::rules::{
    comma_space_re, letters_re, non_whitespace_re, period_space_lower_re, period_space_upper_re,
    spaced_hyphen_re, SAFE_TYPO_WORDS,
};
use super::StageContext;
use crate::services::text_processor::{starts_uppercase, uppercase_first};

const TYPO_RATE: f64 = 0.07;
const MISSING_SPACE_CHANCE: f64 = 0.15;
const DOUBLE_SPACE_CHANCE: f64 = 0.12;
const COMMA_DROP_RATE: f64 = 0.18;
const LOWERCASE_SLIP_CHANCE: f64 = 0.05;
const EXCLAMATION_RATE: f64 = 0.08;
const EXCLAMATION_MIN_CHARS: usize = 20;
const ELLIPSIS_CHANCE: f64 = 0.08;
const ELLIPSIS_MIN_CHARS: usize = 100;
const EM_DASH_CHANCE: f64 = 0.15;

/// Misspell common function words ("the" -> "teh") while keeping every
/// whitespace run exactly as it was.
pub fn inject_typos<R: Rng + ?Sized>(text: &str, rng: &mut R, _ctx: &StageContext) -> String {
    non_whitespace_re()
        .replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            if token.chars().count() <= 2 || !rng.gen_bool(TYPO_RATE) {
                return token.to_string();
            }
            let letters: String = token
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect::<String>()
                .to_lowercase();
            if !SAFE_TYPO_WORDS.contains(&letters.as_str()) {
                return token.to_string();
            }

            let mut typo = misspell(&letters, rng);
            if starts_uppercase(token) {
                typo = uppercase_first(&typo);
            }
            letters_re().replacen(token, 1, NoExpand(&typo)).into_owned()
        })
        .into_owned()
}

/// Double a letter, swap two neighbours, or drop an inner letter (4+ letters only).
fn misspell<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 {
        return word.to_string();
    }
    match rng.gen_range(0..3u8) {
        0 => {
            let pos = rng.gen_range(0..n);
            chars.insert(pos, chars[pos]);
        }
        1 => {
            let pos = rng.gen_range(0..n - 1);
            chars.swap(pos, pos + 1);
        }
        _ if n > 3 => {
            let pos = rng.gen_range(1..n - 1);
            chars.remove(pos);
        }
        _ => {}
    }
    chars.into_iter().collect()
}

/// Occasionally lose the space after a period, or double one inter-word space.
pub fn inject_spacing_errors<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    let mut out = text.to_string();

    if rng.gen_bool(MISSING_SPACE_CHANCE) {
        let limit = rng.gen_range(1..=2usize);
        out = period_space_upper_re()
            .replacen(&out, limit, |caps: &Captures<'_>| {
                if rng.gen_bool(0.5) {
                    format!(".{}", &caps[1])
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
    }

    if rng.gen_bool(DOUBLE_SPACE_CHANCE) {
        let mut chunks: Vec<String> = out.split(". ").map(str::to_string).collect();
        if chunks.len() > 2 {
            let idx = rng.gen_range(0..chunks.len());
            chunks[idx] = chunks[idx].replacen(' ', "  ", 1);
        }
        out = chunks.join(". ");
    }

    out
}

/// Drop the comma from `, ` at the comma-drop rate.
pub fn drop_commas<R: Rng + ?Sized>(text: &str, rng: &mut R, _ctx: &StageContext) -> String {
    comma_space_re()
        .replace_all(text, |caps: &Captures<'_>| {
            if rng.gen_bool(COMMA_DROP_RATE) {
                " ".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Inert slot kept for stage-order stability: it may pick a lowercase letter
/// after a period but always leaves the text as it is.
pub fn lowercase_after_period<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    if rng.gen_bool(LOWERCASE_SLIP_CHANCE) {
        let candidates: Vec<_> = period_space_lower_re().find_iter(text).collect();
        if let Some(m) = candidates.choose(rng) {
            debug!(offset = m.start(), "lowercase_after_period.left_as_is");
        }
    }
    text.to_string()
}

/// Turn the period after some longer sentences into `!`.
pub fn inject_exclamations<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    let chunks: Vec<&str> = text.split(". ").collect();
    let last = chunks.len() - 1;
    let mut out = String::with_capacity(text.len());

    for (i, chunk) in chunks.iter().enumerate() {
        out.push_str(chunk);
        if i == last {
            break;
        }
        // a chunk ending in '.' is the head of an ellipsis
        let eligible = chunk.chars().count() > EXCLAMATION_MIN_CHARS
            && !chunk.ends_with(['!', '?', '.']);
        if eligible && rng.gen_bool(EXCLAMATION_RATE) {
            out.push_str("! ");
        } else {
            out.push_str(". ");
        }
    }

    out
}

/// Rarely turn a period into an ellipsis or a spaced hyphen into an em-dash.
pub fn stylize_punctuation<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    _ctx: &StageContext,
) -> String {
    let mut out = text.to_string();

    if rng.gen_bool(ELLIPSIS_CHANCE)
        && out.chars().count() > ELLIPSIS_MIN_CHARS
        && rng.gen_bool(0.3)
    {
        out = out.replacen(". ", "... ", 1);
    }

    if rng.gen_bool(EM_DASH_CHANCE) {
        let limit = rng.gen_range(1..=2usize);
        out = spaced_hyphen_re()
            .replacen(&out, limit, |_: &Captures<'_>| {
                if rng.gen_bool(0.5) {
                    " — "
                } else {
                    " - "
                }
            })
            .into_owned();
    }

    out
}
