//! Pronouncing dictionaries.
//!
//! A [`PronouncingDictionary`] maps a lowercase word to one or more
//! pronunciations, each an ordered list of phoneme codes. [`CmuDictionary`]
//! reads the CMU Pronouncing Dictionary text format:
//!
//! ```text
//! ;;; comment
//! TOMATO  T AH0 M EY1 T OW2
//! TOMATO(1)  T AH0 M AA1 T OW2
//! tomato(2) t ah0 m aa1 t ow2 # comment
//! ```
//!
//! Variant markers are stripped and variants kept in file order, so the
//! first line seen for a word is its first pronunciation.

use std::collections::HashMap;

use camino::Utf8Path;

use crate::error::DictionaryError;

/// Looks up the pronunciations of a word.
pub trait PronouncingDictionary: Send + Sync {
    /// All pronunciations of `word`, or `None` if there is no entry.
    ///
    /// `word` is expected to be lowercase.
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]>;

    /// Number of distinct words in the dictionary.
    fn len(&self) -> usize;

    /// Whether the dictionary has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory dictionary in CMU format.
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl CmuDictionary {
    /// Parse dictionary text. Comment and malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else {
                continue;
            };
            let phonemes: Vec<String> = fields.map(str::to_uppercase).collect();
            if phonemes.is_empty() {
                skipped += 1;
                continue;
            }
            let word = strip_variant(head).to_lowercase();
            entries.entry(word).or_default().push(phonemes);
        }

        if skipped > 0 {
            tracing::debug!(skipped, "skipped dictionary lines without phonemes");
        }
        Self { entries }
    }

    /// Read and parse a dictionary file.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path) -> Result<Self, DictionaryError> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // The published CMU files are Latin-1 in places.
        let text = String::from_utf8_lossy(&bytes);
        let dictionary = Self::parse(&text);
        tracing::debug!(words = dictionary.entries.len(), "loaded pronouncing dictionary");
        Ok(dictionary)
    }

    /// Build a dictionary from `(word, phonemes)` pairs, in order.
    pub fn from_entries<W, P, S>(entries: impl IntoIterator<Item = (W, P)>) -> Self
    where
        W: AsRef<str>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for (word, phonemes) in entries {
            let phonemes: Vec<String> = phonemes.into_iter().map(Into::into).collect();
            if !phonemes.is_empty() {
                map.entry(word.as_ref().to_lowercase())
                    .or_default()
                    .push(phonemes);
            }
        }
        Self { entries: map }
    }
}

impl PronouncingDictionary for CmuDictionary {
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Dictionary with no entries. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDictionary;

impl PronouncingDictionary for EmptyDictionary {
    fn pronunciations(&self, _word: &str) -> Option<&[Vec<String>]> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}

/// `WORD(2)` -> `WORD`.
fn strip_variant(head: &str) -> &str {
    match head.find('(') {
        Some(open) if head.ends_with(')') && open > 0 => &head[..open],
        _ => head,
    }
}
