// Detection Lexicon
// Compiled pattern tables for the surface signals used by scoring

use regex::Regex;
use std::sync::OnceLock;

const CONTRACTIONS: &[&str] = &[
    "don't", "doesn't", "didn't", "can't", "won't", "wouldn't", "shouldn't", "isn't", "aren't",
    "wasn't", "weren't", "haven't", "hasn't", "hadn't", "it's", "that's", "there's", "what's",
    "who's", "you're", "they're", "we're", "couldn't", "I'm", "we've", "I'll", "you'll", "he's",
    "she's", "they've", "we'd", "you'd",
];

const RED_FLAG_PATTERNS: &[&str] = &[
    r"\boverall,?\s",
    r"\bin conclusion,?\s",
    r"\bto sum up,?\s",
    r"\bin summary,?\s",
    r"\bthe article demonstrates\b",
    r"\bthe text shows\b",
    r"\bthe passage illustrates\b",
    r"\bthis demonstrates that\b",
    r"\bthis shows that\b",
    r"\bthis illustrates\b",
    r"\bit is important to note that\b",
    r"\bit should be noted that\b",
    r"\bone can (see|observe|conclude)\b",
    r"\bas can be seen\b",
    r"\bin order to\b",
    r"\bdue to the fact that\b",
    r"\bfor the purpose of\b",
    r"\bat this point in time\b",
    r"\bin the modern world\b",
    r"\bin today'?s society\b",
];

const FORMAL_TRANSITIONS: &[&str] = &[
    "however", "therefore", "furthermore", "moreover", "consequently", "additionally",
    "nevertheless", "thus", "hence", "accordingly", "subsequently",
];

/// Subset of transitions that normally take a comma.
const COMMA_TRANSITIONS: &[&str] = &["however", "therefore", "furthermore", "moreover", "consequently"];

const TYPOS: &[&str] = &[
    "teh", "taht", "tehm", "waht", "whcih", "jsut", "tehn", "thier", "recieve", "occured",
    "writting", "goverment", "seperate", "definately",
];

const CASUAL_MARKERS: &[&str] = &[
    "really", "pretty", "quite", "actually", "basically", "honestly", "literally", "totally",
    "kinda", "sorta", "gonna", "wanna", "yeah", "nope", "ok", "okay",
];

fn word_alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn whole_word_set(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b({})\b", word_alternation(words))).expect("word set regex")
}

pub fn contraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_word_set(CONTRACTIONS))
}

pub fn red_flag_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        RED_FLAG_PATTERNS
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p)).expect("red flag regex"))
            .collect()
    })
}

pub fn transition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_word_set(FORMAL_TRANSITIONS))
}

/// Transition word followed directly by a lowercase letter, no comma.
pub fn missing_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The case-insensitive flag covers the transition only; the
        // trailing letter class must stay lowercase.
        Regex::new(&format!(
            r"\b(?i:{})\s+[a-z]",
            word_alternation(COMMA_TRANSITIONS)
        ))
        .expect("missing comma regex")
    })
}

pub fn typo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_word_set(TYPOS))
}

pub fn casual_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_word_set(CASUAL_MARKERS))
}

pub fn double_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"  +").expect("double space regex"))
}

pub fn period_no_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.[A-Z]").expect("period no space regex"))
}

pub fn first_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\w+)").expect("first word regex"))
}
