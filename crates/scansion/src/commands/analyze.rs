//! Analyze command: per-clause prosodic profile of a file.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use scansion_core::{
    Language, ProsodyEngine, RhymeGroup, SentenceProfile, SyllableStrategy, TextProfile,
};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Only clauses with exactly this many syllables.
    #[arg(long, value_name = "N")]
    pub syllables: Option<usize>,

    /// Only clauses with alliteration.
    #[arg(long)]
    pub alliterative: bool,

    /// Only clauses that rhyme with another clause.
    #[arg(long)]
    pub rhyming: bool,
}

impl AnalyzeArgs {
    fn selects(&self, index: usize, clause: &SentenceProfile, rhyming: &[usize]) -> bool {
        self.syllables.is_none_or(|n| clause.syllables == n)
            && (!self.alliterative || clause.alliterative)
            && (!self.rhyming || rhyming.binary_search(&index).is_ok())
    }
}

#[derive(Serialize)]
struct ClauseEntry<'a> {
    index: usize,
    #[serde(flatten)]
    profile: &'a SentenceProfile,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    file: &'a str,
    language: Language,
    syllable_strategy: SyllableStrategy,
    sentences: usize,
    total_clauses: usize,
    clauses: Vec<ClauseEntry<'a>>,
    rhyme_groups: &'a [RhymeGroup],
}

/// Profile every clause of a file, optionally filtered.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    engine: &ProsodyEngine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        syllables = ?args.syllables,
        alliterative = args.alliterative,
        rhyming = args.rhyming,
        "executing analyze command"
    );

    let content = read_input_file(&args.file, max_input_bytes)?;
    let profile = engine
        .profile_text(&content)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let rhyming = profile.rhyming_clauses();
    let selected: Vec<ClauseEntry<'_>> = profile
        .clauses
        .iter()
        .enumerate()
        .filter(|&(index, clause)| args.selects(index, clause, &rhyming))
        .map(|(index, profile)| ClauseEntry { index, profile })
        .collect();

    if global_json {
        let report = AnalyzeReport {
            file: args.file.as_str(),
            language: profile.language,
            syllable_strategy: profile.syllable_strategy,
            sentences: profile.sentences,
            total_clauses: profile.clauses.len(),
            clauses: selected,
            rhyme_groups: &profile.rhyme_groups,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_text(&args.file, &profile, &selected);
    Ok(())
}

fn print_text(file: &Utf8Path, profile: &TextProfile, selected: &[ClauseEntry<'_>]) {
    println!("{}", file.bold());
    println!(
        "  {} sentences, {} clauses, {} shown ({}, {})",
        profile.sentences,
        profile.clauses.len(),
        selected.len(),
        profile.language,
        profile.syllable_strategy,
    );

    if selected.is_empty() {
        println!("\n  {}", "no clauses match".yellow());
        return;
    }

    println!();
    for entry in selected {
        let clause = entry.profile;
        let rhyme = clause.rhyme.as_deref().unwrap_or("-");
        let mark = if clause.alliterative { "A" } else { " " };
        println!(
            "  {:>4}  {:>3} syl  {:<8}  {}  {}",
            entry.index.dimmed(),
            clause.syllables.cyan(),
            rhyme.magenta(),
            mark.green(),
            clause.text,
        );
    }
}
