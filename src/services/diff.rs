// Word Diff
// Word-level view of what the rewrite changed, aligned with a longest common subsequence

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::DiffToken;

/// Filler and intensifier words the casual stages typically insert.
const STRUCTURAL_WORDS: &[&str] = &[
    "really", "actually", "basically", "honestly", "pretty", "quite", "very", "like", "just",
    "so", "well", "now",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub unchanged: usize,
    pub replaced: usize,
    pub added: usize,
    pub structural_added: usize,
}

pub fn is_structural(word: &str) -> bool {
    let lower = word.to_lowercase();
    STRUCTURAL_WORDS.contains(&lower.as_str())
}

/// Largest middle section (original words x humanized words) aligned with a
/// full LCS table. Bigger sections fall back to a linear walk.
pub const MAX_LCS_CELLS: usize = 4_000_000;

/// Diff two texts word by word (case-insensitive, split on whitespace).
///
/// The result follows the humanized text: every humanized word appears once,
/// tagged as unchanged, replaced or added. Words only present in the original
/// are dropped from the view.
pub fn word_diff(original: &str, humanized: &str) -> Vec<DiffToken> {
    let orig: Vec<String> = original.split_whitespace().map(str::to_lowercase).collect();
    let human_words: Vec<&str> = humanized.split_whitespace().collect();
    let human: Vec<String> = human_words.iter().map(|w| w.to_lowercase()).collect();

    // Shared head and tail never need the table.
    let prefix = orig
        .iter()
        .zip(human.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = orig[prefix..]
        .iter()
        .rev()
        .zip(human[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let orig_mid = &orig[prefix..orig.len() - suffix];
    let human_mid = &human[prefix..human.len() - suffix];
    let words_mid = &human_words[prefix..human_words.len() - suffix];

    let mut tokens = Vec::with_capacity(human_words.len());
    tokens.extend(human_words[..prefix].iter().map(|w| unchanged_token(w)));

    let cells = orig_mid.len().saturating_mul(human_mid.len());
    if cells > MAX_LCS_CELLS {
        warn!(
            original_words = orig_mid.len(),
            humanized_words = human_mid.len(),
            "diff.linear_fallback"
        );
        align_linear(orig_mid, human_mid, words_mid, &mut tokens);
    } else {
        align_lcs(orig_mid, human_mid, words_mid, &mut tokens);
    }

    tokens.extend(
        human_words[human_words.len() - suffix..]
            .iter()
            .map(|w| unchanged_token(w)),
    );
    tokens
}

fn unchanged_token(word: &str) -> DiffToken {
    DiffToken::Unchanged {
        word: word.to_string(),
    }
}

fn added_token(word: &str) -> DiffToken {
    DiffToken::Added {
        word: word.to_string(),
        structural: is_structural(word),
    }
}

fn align_lcs(
    orig: &[String],
    human: &[String],
    human_words: &[&str],
    tokens: &mut Vec<DiffToken>,
) {
    let n = orig.len();
    let m = human.len();

    // lcs[i][j] = LCS length of orig[i..] and human[j..]
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if orig[i] == human[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && orig[i] == human[j] {
            tokens.push(unchanged_token(human_words[j]));
            i += 1;
            j += 1;
        } else if i < n && j < m && lcs[i + 1][j + 1] == lcs[i][j] {
            // substituting this pair costs nothing in alignment
            tokens.push(DiffToken::Replaced {
                word: human_words[j].to_string(),
            });
            i += 1;
            j += 1;
        } else if i < n && (j >= m || lcs[i + 1][j] >= lcs[i][j + 1]) {
            i += 1;
        } else {
            tokens.push(added_token(human_words[j]));
            j += 1;
        }
    }
}

/// Position-by-position pairing for sections too large for the table.
fn align_linear(
    orig: &[String],
    human: &[String],
    human_words: &[&str],
    tokens: &mut Vec<DiffToken>,
) {
    for (j, word) in human_words.iter().enumerate() {
        let token = match orig.get(j) {
            Some(o) if *o == human[j] => unchanged_token(word),
            Some(_) => DiffToken::Replaced {
                word: word.to_string(),
            },
            None => added_token(word),
        };
        tokens.push(token);
    }
}

pub fn summarize(tokens: &[DiffToken]) -> DiffSummary {
    let mut summary = DiffSummary::default();
    for token in tokens {
        match token {
            DiffToken::Unchanged { .. } => summary.unchanged += 1,
            DiffToken::Replaced { .. } => summary.replaced += 1,
            DiffToken::Added { structural, .. } => {
                summary.added += 1;
                if *structural {
                    summary.structural_added += 1;
                }
            }
        }
    }
    summary
}
