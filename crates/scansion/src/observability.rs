//! Logging setup.
//!
//! Human-readable events go to stderr. When a log location is configured,
//! the same events are also written as JSON lines to a file through a
//! non-blocking appender; the returned guard flushes it on drop.
//!
//! Log file location, first match wins:
//! 1. `SCANSION_LOG_PATH` (full file path)
//! 2. `SCANSION_LOG_DIR` (directory; file is `scansion.jsonl`)
//! 3. `log_dir` from configuration

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "SCANSION_LOG_PATH";
const LOG_DIR_ENV: &str = "SCANSION_LOG_DIR";
const LOG_FILE_NAME: &str = "scansion.jsonl";

/// Where log output goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSON-lines log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, then `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_file = std::env::var_os(LOG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(LOG_DIR_ENV).map(|dir| PathBuf::from(dir).join(LOG_FILE_NAME)))
            .or_else(|| config_log_dir.map(|dir| dir.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set; otherwise `-q` means errors only, each `-v`
/// raises the level one step, and with neither the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_log_dir_used_without_env() {
        // Only meaningful when the env overrides are unset.
        if std::env::var_os(LOG_PATH_ENV).is_some() || std::env::var_os(LOG_DIR_ENV).is_some() {
            return;
        }
        let config = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/var/log/scansion")));
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/var/log/scansion/scansion.jsonl"))
        );
        assert_eq!(
            ObservabilityConfig::from_env_with_overrides(None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn split_relative_file_uses_cwd() {
        let (dir, name) = split_log_path(Path::new("run.jsonl")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "run.jsonl");
    }

    #[test]
    fn split_rejects_directory_only_path() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
