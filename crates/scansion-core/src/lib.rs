//! Core library for scansion.
//!
//! Phonetic and rhythmic analysis of sentences: syllable counts, rhyme keys,
//! alliteration flags and clause splitting, for selecting lines by their
//! prosodic features.
//!
//! # Modules
//!
//! - [`engine`] - The [`ProsodyEngine`] and its reports
//! - [`language`] - Per-language phonetic tables
//! - [`syllables`] - Phonemic and orthographic syllable counters
//! - [`rhyme`], [`alliteration`], [`clauses`] - Per-sentence analyses
//! - [`text`], [`tagging`], [`stemming`], [`pronunciation`] - Collaborator
//!   traits and their built-in implementations
//! - [`cache`] - Bounded lexical caches
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use scansion_core::{ConfigLoader, ProsodyEngine};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//! let engine = ProsodyEngine::from_config(&config).expect("Failed to load dictionary");
//!
//! println!("{} syllables", engine.count_syllables("The silver sea is calm."));
//! ```
#![deny(unsafe_code)]

pub mod alliteration;
pub mod cache;
pub mod clauses;
pub mod config;
pub mod dictionaries;
pub mod engine;
pub mod error;
pub mod language;
pub mod phonetic;
pub mod pronunciation;
pub mod rhyme;
pub mod stemming;
pub mod syllables;
pub mod tagging;
pub mod text;

pub use cache::{CacheCapacity, CacheStats};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use engine::{EngineBuilder, ProsodyEngine, RhymeGroup, SentenceProfile, TextProfile};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, DictionaryError};
pub use language::{Language, LanguageProfile, SyllableStrategy};
pub use pronunciation::{CmuDictionary, EmptyDictionary, PronouncingDictionary};
pub use stemming::Stemmer;
pub use tagging::{TaggedToken, Tagger};
pub use text::SentenceSegmenter;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
