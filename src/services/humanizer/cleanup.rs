// Cleanup Stage
// Final normalization: bound the noise earlier stages introduced

use rand::Rng;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::StageContext;

fn wide_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]{3,}").expect("wide space regex"))
}

fn space_before_period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+\.").expect("space before period regex"))
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("blank lines regex"))
}

fn period_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.{2,}").expect("period run regex"))
}

/// Deterministic; the rng parameter only keeps the stage signature uniform.
pub fn normalize<R: Rng + ?Sized>(text: &str, _rng: &mut R, _ctx: &StageContext) -> String {
    normalize_text(text)
}

/// At most two spaces, no space before a period, at most one blank line,
/// `..` collapsed to `.`, longer period runs collapsed to `...`, trimmed.
pub fn normalize_text(text: &str) -> String {
    let out = wide_space_re().replace_all(text, "  ");
    let out = space_before_period_re().replace_all(&out, ".");
    let out = blank_lines_re().replace_all(&out, "\n\n");
    let out = period_run_re().replace_all(&out, |caps: &Captures<'_>| {
        if caps[0].len() == 2 {
            "."
        } else {
            "..."
        }
    });
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_wide_spacing() {
        assert_eq!(normalize_text("one     two  three"), "one  two  three");
    }

    #[test]
    fn test_removes_space_before_period() {
        assert_eq!(normalize_text("Done  . Next ."), "Done. Next.");
    }

    #[test]
    fn test_period_runs() {
        assert_eq!(normalize_text("Wait.. what"), "Wait. what");
        assert_eq!(normalize_text("Well... maybe"), "Well... maybe");
        assert_eq!(normalize_text("Hmm....... no"), "Hmm... no");
    }

    #[test]
    fn test_paragraph_breaks_survive() {
        let text = "First part.\n\nSecond part.\n\n\n\nThird part.";
        assert_eq!(
            normalize_text(text),
            "First part.\n\nSecond part.\n\nThird part."
        );
    }

    #[test]
    fn test_trims_and_is_idempotent() {
        let once = normalize_text("   Hello there ..   ");
        assert_eq!(once, "Hello there.");
        assert_eq!(normalize_text(&once), once);
        assert_eq!(normalize_text("   "), "");
    }
}
