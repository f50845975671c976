//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use scansion_core::config::{Config, ConfigSources};
use scansion_core::{CacheCapacity, ProsodyEngine};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dictionary: Option<String>,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
    cache: CacheCapacity,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            language: config.language.as_str(),
            dictionary: config.dictionary.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            cache: config.cache,
        }
    }
}

#[derive(Serialize)]
struct EngineInfo {
    language: &'static str,
    syllable_strategy: &'static str,
    dictionary_entries: usize,
    phonetic_confidence: &'static str,
}

impl EngineInfo {
    fn from_engine(engine: &ProsodyEngine) -> Self {
        let profile = engine.profile();
        Self {
            language: profile.language().as_str(),
            syllable_strategy: profile.syllable_strategy().as_str(),
            dictionary_entries: engine.resolver().dictionary_len(),
            phonetic_confidence: if engine.resolver().is_degraded() {
                "degraded"
            } else {
                "full"
            },
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    engine: EngineInfo,
}

/// Print package, configuration and engine information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration, after command-line overrides
/// * `sources` - Config source metadata from loading
/// * `engine` - The engine built from `config`
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    engine: &ProsodyEngine,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        engine: EngineInfo::from_engine(engine),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let config = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), config.log_level);
    if let Some(ref dir) = config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match config.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!(
        "{}: tags {}, words {}, stems {}",
        "Cache".dimmed(),
        config.cache.tags,
        config.cache.words,
        config.cache.stems
    );

    let engine = &full_info.engine;
    println!();
    println!("{}", "Engine".bold().underline());
    println!("{}: {}", "Language".dimmed(), engine.language);
    println!("{}: {}", "Syllables".dimmed(), engine.syllable_strategy);
    match config.dictionary {
        Some(ref path) => println!(
            "{}: {} ({} words)",
            "Dictionary".dimmed(),
            path.cyan(),
            engine.dictionary_entries
        ),
        None => println!("{}: {}", "Dictionary".dimmed(), "none".yellow()),
    }
    if engine.phonetic_confidence == "degraded" {
        println!("{}: {}", "Phonetics".dimmed(), "low confidence".yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansion_core::Language;

    fn test_engine(config: &Config) -> ProsodyEngine {
        ProsodyEngine::from_config(config).unwrap()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        let config = Config::default();
        let engine = test_engine(&config);
        assert!(cmd_info(InfoArgs::default(), false, &config, &ConfigSources::default(), &engine).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let config = Config::default();
        let engine = test_engine(&config);
        assert!(cmd_info(InfoArgs::default(), true, &config, &ConfigSources::default(), &engine).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.language, "english");
        assert_eq!(info.max_input_bytes, Some(scansion_core::DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn engine_info_reports_degraded_german() {
        let config = Config {
            language: Language::German,
            ..Config::default()
        };
        let info = EngineInfo::from_engine(&test_engine(&config));
        assert_eq!(info.language, "german");
        assert_eq!(info.syllable_strategy, "orthographic");
        assert_eq!(info.phonetic_confidence, "degraded");
        assert_eq!(info.dictionary_entries, 0);
    }
}
