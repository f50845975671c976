//! Syllables command: per-word syllable counts.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use scansion_core::syllables::count_with;
use scansion_core::{ProsodyEngine, SyllableStrategy};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count. Quoted phrases count as one entry.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Counting strategy (defaults to the language's).
    #[arg(long, value_enum)]
    pub strategy: Option<SyllableStrategy>,
}

#[derive(Serialize)]
struct WordCount<'a> {
    word: &'a str,
    syllables: usize,
}

#[derive(Serialize)]
struct SyllablesReport<'a> {
    strategy: SyllableStrategy,
    words: Vec<WordCount<'a>>,
    total: usize,
}

/// Count syllables in each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(
    args: SyllablesArgs,
    global_json: bool,
    engine: &ProsodyEngine,
) -> anyhow::Result<()> {
    let strategy = args
        .strategy
        .unwrap_or_else(|| engine.profile().syllable_strategy());
    debug!(strategy = %strategy, "executing syllables command");

    let words: Vec<WordCount<'_>> = args
        .words
        .iter()
        .map(|word| WordCount {
            word,
            syllables: count_with(strategy, word, engine.resolver(), engine.profile()),
        })
        .collect();
    let total = words.iter().map(|w| w.syllables).sum();

    if global_json {
        let report = SyllablesReport {
            strategy,
            words,
            total,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
    for entry in &words {
        println!("{:<width$}  {}", entry.word, entry.syllables.cyan());
    }
    if words.len() > 1 {
        println!("{:<width$}  {}", "total".dimmed(), total.bold());
    }
    Ok(())
}
