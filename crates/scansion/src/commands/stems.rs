//! Stems command: stems of each sentence's significant words.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use scansion_core::ProsodyEngine;

/// Arguments for the `stems` subcommand.
#[derive(Args, Debug)]
pub struct StemsArgs {
    /// Text to stem; may hold several sentences.
    pub text: String,
}

#[derive(Serialize)]
struct SentenceStems {
    sentence: String,
    stems: Vec<String>,
}

/// Stem the significant words of every sentence in the text.
#[instrument(name = "cmd_stems", skip_all, fields(text_len = args.text.len()))]
pub fn cmd_stems(args: StemsArgs, global_json: bool, engine: &ProsodyEngine) -> anyhow::Result<()> {
    debug!("executing stems command");

    let results: Vec<SentenceStems> = engine
        .sentences(&args.text)
        .into_iter()
        .map(|sentence| {
            let stems = engine.stem_sentence(&sentence);
            SentenceStems { sentence, stems }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for entry in &results {
        println!("{}", entry.sentence.dimmed());
        println!("  {}", entry.stems.join(" "));
    }
    Ok(())
}
