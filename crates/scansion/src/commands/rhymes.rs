//! Rhymes command: clauses grouped by rhyme key.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use scansion_core::ProsodyEngine;

use super::read_input_file;

/// Arguments for the `rhymes` subcommand.
#[derive(Args, Debug)]
pub struct RhymesArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct RhymingClause<'a> {
    index: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct RhymeSet<'a> {
    key: &'a str,
    clauses: Vec<RhymingClause<'a>>,
}

/// Print the groups of clauses that share a rhyme key.
#[instrument(name = "cmd_rhymes", skip_all, fields(file = %args.file))]
pub fn cmd_rhymes(
    args: RhymesArgs,
    global_json: bool,
    engine: &ProsodyEngine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing rhymes command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let profile = engine
        .profile_text(&content)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let sets: Vec<RhymeSet<'_>> = profile
        .rhyme_groups
        .iter()
        .map(|group| RhymeSet {
            key: &group.key,
            clauses: group
                .clauses
                .iter()
                .map(|&index| RhymingClause {
                    index,
                    text: &profile.clauses[index].text,
                })
                .collect(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
        return Ok(());
    }

    if sets.is_empty() {
        println!("{}", "no rhyming clauses".yellow());
        return Ok(());
    }
    for set in &sets {
        println!("{}", set.key.magenta().bold());
        for clause in &set.clauses {
            println!("  {:>4}  {}", clause.index.dimmed(), clause.text);
        }
    }
    Ok(())
}
