//! Error types for scansion-core.
//!
//! The per-sentence analyses never fail: dictionary misses, empty input and
//! malformed words all resolve to a defined fallback value. Errors only arise
//! where I/O or whole-document reporting is involved.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a pronouncing dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read pronouncing dictionary {path}: {source}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur during document-level analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text has no sentence that survives tagging.
    #[error("no analyzable sentences in input")]
    EmptyInput,

    /// The engine could not be built from configuration.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
