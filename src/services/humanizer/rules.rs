// Rewrite Rule Tables
// Ordered, declarative tables compiled once and shared read-only by every call

use regex::Regex;
use std::sync::OnceLock;

/// Formal phrase -> informal alternatives. Every match is replaced.
const FORMAL_PHRASES: &[(&str, &[&str])] = &[
    ("in order to", &["to", "so we can", "aiming to"]),
    ("due to the fact that", &["because", "since"]),
    ("at this point in time", &["now", "currently"]),
    ("it is important to note that", &["notably", "it's worth noting"]),
    ("in spite of", &["despite", "even though"]),
    ("a large number of", &["many", "lots of", "tons of"]),
    ("for the purpose of", &["to", "for"]),
    ("with regard to", &["about", "regarding"]),
    ("prior to", &["before"]),
    ("subsequent to", &["after"]),
    ("however", &["but", "yet", "though", "still"]),
    ("therefore", &["so", "thus", "hence"]),
    ("furthermore", &["also", "plus", "moreover"]),
    ("nevertheless", &["still", "even so", "yet"]),
];

/// Word -> synonyms. Order matters: later rows see the output of earlier ones.
const SYNONYMS: &[(&str, &[&str])] = &[
    // verbs
    ("important", &["crucial", "key", "vital"]),
    ("need", &["require", "want"]),
    ("are", &["become"]),
    ("give", &["provide", "offer"]),
    ("have", &["possess", "own", "keep"]),
    ("keep", &["maintain", "hold"]),
    ("make", &["create", "form", "build"]),
    ("form", &["create", "make", "build"]),
    ("live", &["exist", "survive"]),
    ("talk", &["speak", "communicate"]),
    // descriptive
    ("big", &["large", "huge"]),
    ("gentle", &["calm", "peaceful"]),
    ("useful", &["helpful", "valuable"]),
    ("well-known", &["famous", "popular"]),
    ("calm", &["peaceful", "relaxed"]),
    // intensifiers
    ("very", &["really", "quite", "pretty", "extremely"]),
    ("really", &["very", "truly", "actually"]),
    ("only", &["just", "simply"]),
    ("actually", &["really", "truly"]),
    // complex words
    ("demonstrates", &["shows", "proves", "reveals"]),
    ("demonstrate", &["show", "prove", "reveal"]),
    ("represents", &["is", "means", "shows"]),
    ("represent", &["show", "mean"]),
    ("major", &["big", "huge", "significant"]),
    ("advancement", &["progress", "improvement"]),
    ("transitions", &["shifts", "moves", "changes"]),
    ("traditional", &["old", "conventional", "standard"]),
    ("intelligent", &["smart", "clever"]),
    ("capable", &["able", "equipped"]),
    ("vast", &["huge", "massive"]),
    ("complex", &["complicated", "intricate"]),
    // connectors
    ("because", &["since", "as"]),
    ("but", &["yet", "though", "although"]),
    ("also", &["too", "as well"]),
    ("and", &["plus"]),
    ("for", &["during"]),
];

const CONTRACTIONS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("you are", "you're"),
    ("they are", "they're"),
    ("we are", "we're"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("cannot", "can't"),
    ("could not", "couldn't"),
    ("should not", "shouldn't"),
];

pub const QUESTION_MARKERS: &[&str] = &["Q:", "Question:", "Q -", "Q.", "**Q:**"];
pub const ANSWER_MARKERS: &[&str] = &["A:", "Answer:", "A -", "A.", "**A:**", ""];

pub const FILLERS_SHORT: &[&str] = &["basically", "actually"];
pub const FILLERS_LONG: &[&str] = &["basically", "actually", "honestly"];

pub const INTENSIFIERS_SHORT: &[&str] = &["pretty", "really", "quite"];
pub const INTENSIFIERS_LONG: &[&str] = &["pretty", "really", "quite", "fairly"];

pub const STARTERS_SHORT: &[&str] = &["And ", "But ", "So "];
pub const STARTERS_LONG: &[&str] = &["And ", "But ", "So ", "Plus "];

pub const SPLIT_CONJUNCTIONS: &[&str] = &["and", "but", "or", "while", "because"];
pub const MERGE_CONNECTORS: &[&str] = &[", and", ", but", ", so", " -"];

pub const SAFE_TYPO_WORDS: &[&str] = &[
    "the", "and", "but", "for", "with", "from", "this", "that", "have", "will", "can", "should",
    "would", "been", "them", "than", "then",
];

pub const PARAGRAPH_TRANSITIONS: &[&str] = &[
    "Now",
    "Additionally",
    "Moreover",
    "On the other hand",
    "However",
    "In fact",
    "Furthermore",
    "That said",
    "Plus",
    "Also",
];

pub const OVERALL_VARIANTS: &[&str] = &[
    "So basically,",
    "In the end,",
    "To sum up,",
    "Ultimately,",
    "Looking at it,",
    "",
];

pub const ARTICLE_VARIANTS: &[&str] = &["the article", "this article", "the piece", "this paper", "it"];

/// A compiled whole-word pattern with its replacement pool.
#[derive(Debug)]
pub struct PhraseRule {
    pub phrase: &'static str,
    pub pattern: Regex,
    pub alternatives: &'static [&'static str],
}

#[derive(Debug)]
pub struct ContractionRule {
    pub phrase: &'static str,
    pub pattern: Regex,
    pub contraction: &'static str,
}

fn whole_word(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).expect("rule regex")
}

fn compile_phrase_table(table: &'static [(&'static str, &'static [&'static str])]) -> Vec<PhraseRule> {
    table
        .iter()
        .map(|&(phrase, alternatives)| PhraseRule {
            phrase,
            pattern: whole_word(phrase),
            alternatives,
        })
        .collect()
}

pub fn formal_phrase_rules() -> &'static [PhraseRule] {
    static RULES: OnceLock<Vec<PhraseRule>> = OnceLock::new();
    RULES.get_or_init(|| compile_phrase_table(FORMAL_PHRASES))
}

pub fn synonym_rules() -> &'static [PhraseRule] {
    static RULES: OnceLock<Vec<PhraseRule>> = OnceLock::new();
    RULES.get_or_init(|| compile_phrase_table(SYNONYMS))
}

pub fn contraction_rules() -> &'static [ContractionRule] {
    static RULES: OnceLock<Vec<ContractionRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        CONTRACTIONS
            .iter()
            .map(|&(phrase, contraction)| ContractionRule {
                phrase,
                pattern: whole_word(phrase),
                contraction,
            })
            .collect()
    })
}

pub fn question_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bQ:\s*").expect("question marker regex"))
}

pub fn answer_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bA:\s*").expect("answer marker regex"))
}

/// Adjectives that may receive an intensifier (case-sensitive, first match only).
pub fn intensifiable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(good|important|difficult|easy|clear|effective|simple)\b")
            .expect("intensifiable regex")
    })
}

pub fn overall_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bOverall,\s*").expect("overall regex"))
}

pub fn the_article_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bthe article\b").expect("the article regex"))
}

pub fn letters_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z]+").expect("letters regex"))
}

pub fn non_whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+").expect("token regex"))
}

pub fn period_space_upper_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s+([A-Z])").expect("period space regex"))
}

pub fn period_space_lower_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s+([a-z])").expect("period lowercase regex"))
}

pub fn comma_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s+").expect("comma regex"))
}

pub fn spaced_hyphen_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" - ").expect("spaced hyphen regex"))
}
