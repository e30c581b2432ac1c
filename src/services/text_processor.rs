// Text Processing Service
// Word/sentence segmentation and syllable counting shared by scoring and rewriting

use regex::Regex;
use std::sync::OnceLock;

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence end regex"))
}

fn vowel_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[aeiouy]+").expect("vowel group regex"))
}

/// One sentence of a document with its own word sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
}

/// Immutable segmented view over a piece of text.
#[derive(Debug, Clone)]
pub struct TextDocument<'a> {
    text: &'a str,
    words: Vec<&'a str>,
    sentences: Vec<Sentence<'a>>,
}

impl<'a> TextDocument<'a> {
    pub fn new(text: &'a str) -> Self {
        let words = words(text);
        let sentences = sentences(text)
            .into_iter()
            .map(|s| Sentence {
                text: s,
                words: words_of(s),
            })
            .collect();
        Self {
            text,
            words,
            sentences,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn sentences(&self) -> &[Sentence<'a>] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Per-sentence word counts, in order.
    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.words.len()).collect()
    }

    pub fn syllable_count(&self) -> usize {
        self.words.iter().map(|w| syllables(w)).sum()
    }
}

fn words_of(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on whitespace. No returned word is empty.
pub fn words(text: &str) -> Vec<&str> {
    words_of(text.trim())
}

/// Split on runs of `.`, `!` and `?`, dropping blank fragments.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_end_re()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Estimate syllables as the number of vowel groups.
/// Returns 0 only when the word has no ASCII letters at all.
pub fn syllables(word: &str) -> usize {
    let letters: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }
    vowel_group_re().find_iter(&letters).count().max(1)
}

/// Split text into alternating content and terminator pieces.
///
/// Even indices hold sentence content (possibly empty or whitespace-led),
/// odd indices hold the `[.!?]+` run that ended the preceding content.
/// Concatenating the pieces reproduces the input exactly.
pub fn split_keep_delimiters(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in sentence_end_re().find_iter(text) {
        parts.push(&text[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&text[last..]);
    parts
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}
