//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `<config_dir>/scansion/config.<ext>`
//! 3. Project config: `.scansion.<ext>` then `scansion.<ext>` in the closest
//!    directory (walking up from the search root) that has one
//! 4. Explicit files, in the order they were added
//! 5. `SCANSION_*` environment variables
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`. The upward walk
//! stops at a directory containing `.git` unless told otherwise.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use scansion_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("analyzing {}", config.language);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::cache::CacheCapacity;
use crate::error::{ConfigError, ConfigResult};
use crate::language::{Language, SyllableStrategy};

/// The configuration for scansion.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Language of the analyzed text.
    pub language: Language,
    /// Override the language's default syllable-counting strategy.
    pub syllable_strategy: Option<SyllableStrategy>,
    /// CMU-format pronouncing dictionary. Without one every lookup misses
    /// and the spelling fallbacks apply.
    pub dictionary: Option<Utf8PathBuf>,
    /// Lexical cache capacities.
    pub cache: CacheCapacity,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Effective input size limit, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Syllable strategy in effect: the override, or the language default.
    pub fn effective_syllable_strategy(&self) -> SyllableStrategy {
        self.syllable_strategy
            .unwrap_or_else(|| self.language.profile().syllable_strategy())
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-lookup detail for debugging.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings such as degraded phonetic confidence.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the platform config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for config file names and the user config directory.
const APP_NAME: &str = "scansion";

/// Prefix for environment overrides. Nested keys use `__`:
/// `SCANSION_CACHE__STEMS=512`.
const ENV_PREFIX: &str = "SCANSION_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include the user config file.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward walk at a directory containing `marker`.
    /// Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable the boundary marker (search all the way to the filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // SCANSION_LANGUAGE=german, SCANSION_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            language = config.language.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files from the closest directory that has any, low→high
    /// precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find the user config file in the platform config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| config_dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/scansion/` on Linux, `~/Library/Application Support/scansion/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
