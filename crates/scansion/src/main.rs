//! scansion CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use scansion::{Cli, Commands, commands};
use scansion_core::ProsodyEngine;
use scansion_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn utf8_path(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8_path(cwd, "current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(config_path) = cli.config.clone() {
        loader = loader.with_file(utf8_path(config_path, "config path")?);
    }
    let (mut config, config_sources) = loader.load().context("failed to load configuration")?;

    // Command-line overrides
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(dictionary) = cli.dictionary.clone() {
        config.dictionary = Some(utf8_path(dictionary, "dictionary path")?);
    }

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        language = %config.language,
        "CLI initialized"
    );

    let engine = ProsodyEngine::from_config(&config).context("failed to build analysis engine")?;
    let max_input = config.input_limit();

    // Execute command
    let result = match command {
        Commands::Analyze(args) => commands::analyze::cmd_analyze(args, cli.json, &engine, max_input),
        Commands::Syllables(args) => commands::syllables::cmd_syllables(args, cli.json, &engine),
        Commands::Rhymes(args) => commands::rhymes::cmd_rhymes(args, cli.json, &engine, max_input),
        Commands::Stems(args) => commands::stems::cmd_stems(args, cli.json, &engine),
        Commands::Info(args) => {
            commands::info::cmd_info(args, cli.json, &config, &config_sources, &engine)
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
