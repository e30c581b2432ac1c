use anyhow::{Context, Result};
use humanize_ai_lib::init_logging;
use humanize_ai_lib::models::{DiffToken, ScoreBand, TransformationResult};
use humanize_ai_lib::services::config_store::{parse_seed_setting, AppConfig, ConfigStore};
use humanize_ai_lib::services::detection::{score_text, ScoreBreakdown};
use humanize_ai_lib::services::diff::{summarize, word_diff, DiffSummary};
use humanize_ai_lib::services::orchestrator::{humanize, humanize_with_seed};
use humanize_ai_lib::services::readability::flesch_reading_ease;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "Usage:\n  humanize [<path>|-] [--seed <n>] [--score-only] [--diff] [--config <dir>] [--out <json_path>]\n  humanize --save-seed <n|none> [--config <dir>]\n\nNotes:\n  - Reads stdin when no path (or `-`) is given.\n  - `--score-only` scores the input without rewriting it.\n  - `--save-seed` pins the seed in the config file (`none` clears it).\n  - HUMANIZER_SEED overrides the configured seed; `--seed` overrides both.\n  - HUMANIZER_DISABLE_FILE_LOG=1 keeps logs on stderr only.";

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) if p != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("read file failed: {}", p))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin failed")?;
            Ok(buf)
        }
    }
}

fn config_store(dir: Option<String>) -> Option<ConfigStore> {
    dir.map(PathBuf::from)
        .or_else(ConfigStore::default_config_dir)
        .map(ConfigStore::new)
}

fn load_config(store: Option<&ConfigStore>) -> Result<AppConfig> {
    match store {
        Some(store) => store
            .load()
            .map_err(anyhow::Error::msg)
            .context("load config failed"),
        None => Ok(AppConfig::default()),
    }
}

fn save_seed(store: Option<&ConfigStore>, raw: &str) -> Result<()> {
    let store = store.context("no config directory available; pass --config <dir>")?;
    let seed = parse_seed_setting(raw).map_err(anyhow::Error::msg)?;
    store
        .set_seed(seed)
        .map_err(anyhow::Error::msg)
        .context("save config failed")?;

    let saved = store.get_seed().map_err(anyhow::Error::msg)?;
    info!(seed = ?saved, "cli.seed_saved");
    println!(
        "Saved seed: {} ({})",
        saved.map(|s| s.to_string()).unwrap_or_else(|| "(random)".to_string()),
        store.config_file().display()
    );
    Ok(())
}

fn render_diff(tokens: &[DiffToken]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            DiffToken::Unchanged { word } => word.clone(),
            DiffToken::Replaced { word } => format!("[{}]", word),
            DiffToken::Added { word, structural: true } => format!("~{}", word),
            DiffToken::Added { word, structural: false } => format!("+{}", word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "Confidence: {:+.1} ({:.1}%)",
        breakdown.confidence, breakdown.percentage
    );
    for line in breakdown.explanations() {
        println!("  {}", line);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    source: String,
    seed: Option<u64>,
    input_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<TransformationResult>,
    breakdown: ScoreBreakdown,
    band: ScoreBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<Vec<DiffToken>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff_summary: Option<DiffSummary>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    let path = args.get(1).filter(|a| !a.starts_with("--")).cloned();
    let score_only = has_flag(&args, "--score-only");
    let show_diff = has_flag(&args, "--diff");
    let out_path = parse_arg_value(&args, "--out");
    let seed_arg = match parse_arg_value(&args, "--seed") {
        Some(raw) => Some(
            raw.parse::<u64>()
                .with_context(|| format!("invalid --seed value: {}", raw))?,
        ),
        None => None,
    };

    let store = config_store(parse_arg_value(&args, "--config"));
    let config = load_config(store.as_ref())?;
    init_logging(config.humanizer.log_retention);

    if let Some(raw) = parse_arg_value(&args, "--save-seed") {
        return save_seed(store.as_ref(), &raw);
    }
    let seed = seed_arg.or_else(|| config.effective_seed());

    let text = read_input(path.as_deref())?;
    let source = path.clone().unwrap_or_else(|| "<stdin>".to_string());
    let input_words = text.split_whitespace().count();
    info!(source = %source, input_words, score_only, seed = ?seed, "cli.start");

    println!("Source: {}", source);
    println!("Input: {} words", input_words);

    let (result, breakdown, diff) = if score_only {
        let breakdown = score_text(&text);
        println!("Readability: {:.1}", flesch_reading_ease(&text));
        (None, breakdown, None)
    } else {
        let result = match seed {
            Some(seed) => humanize_with_seed(&text, seed),
            None => humanize(&text),
        }
        .context("humanize failed")?;
        let breakdown = score_text(&result.humanized_text);
        let diff = show_diff.then(|| word_diff(&text, &result.humanized_text));

        println!("Seed: {}", seed.map(|s| s.to_string()).unwrap_or_else(|| "(random)".to_string()));
        println!();
        println!("{}", result.humanized_text);
        println!();
        println!("{}", result.explanation);
        println!("Readability: {:.1}", result.readability_score);
        (Some(result), breakdown, diff)
    };

    let band = ScoreBand::from_score(breakdown.score);
    println!("AI score: {}/10 ({})", breakdown.score, band.label(breakdown.score));
    print_breakdown(&breakdown);

    let diff_summary = diff.as_deref().map(summarize);
    if let (Some(tokens), Some(summary)) = (diff.as_deref(), diff_summary.as_ref()) {
        println!();
        println!(
            "Diff: unchanged={} replaced={} added={} (structural={})",
            summary.unchanged, summary.replaced, summary.added, summary.structural_added
        );
        println!("{}", render_diff(tokens));
    }

    if let Some(out_path) = out_path {
        let out = Output {
            source,
            seed,
            input_words,
            result,
            breakdown,
            band,
            diff,
            diff_summary,
        };

        let json = serde_json::to_string_pretty(&out).context("serialize output failed")?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
