//! Word-to-phoneme resolution.
//!
//! [`PhoneticResolver`] asks the pronouncing dictionary for a word and picks
//! the first pronunciation. A miss is `None`; it never guesses from the
//! spelling. Each consumer applies its own fallback.

use std::sync::Arc;

use crate::language::LanguageProfile;
use crate::pronunciation::PronouncingDictionary;

/// One pronunciation of one word: a non-empty list of phoneme codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pronunciation {
    phonemes: Vec<String>,
}

impl Pronunciation {
    /// Wrap `phonemes`, or `None` when the list is empty.
    pub fn new(phonemes: Vec<String>) -> Option<Self> {
        (!phonemes.is_empty()).then_some(Self { phonemes })
    }

    /// Phoneme codes in order.
    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    /// The last `n` phonemes, or all of them if there are fewer.
    pub fn tail(&self, n: usize) -> &[String] {
        &self.phonemes[self.phonemes.len().saturating_sub(n)..]
    }
}

/// Resolves words to pronunciations through a [`PronouncingDictionary`].
#[derive(Clone)]
pub struct PhoneticResolver {
    dictionary: Arc<dyn PronouncingDictionary>,
    degraded: bool,
}

impl std::fmt::Debug for PhoneticResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneticResolver")
            .field("entries", &self.dictionary.len())
            .field("degraded", &self.degraded)
            .finish()
    }
}

impl PhoneticResolver {
    /// Create a resolver for `profile`'s language.
    ///
    /// Languages without a real phonetic resource still resolve through the
    /// given dictionary; results are low-confidence and a notice is logged.
    pub fn new(dictionary: Arc<dyn PronouncingDictionary>, profile: &LanguageProfile) -> Self {
        let degraded = !profile.has_phonetic_resource();
        if degraded {
            tracing::warn!(
                language = %profile.language(),
                "no pronouncing dictionary exists for this language; phoneme lookups are low-confidence"
            );
        }
        Self {
            dictionary,
            degraded,
        }
    }

    /// Resolve `word` (case-insensitively) to its first pronunciation.
    pub fn resolve(&self, word: &str) -> Option<Pronunciation> {
        if word.is_empty() {
            return None;
        }
        let lower = word.to_lowercase();
        if self.degraded {
            tracing::trace!(word = %lower, "low-confidence phoneme lookup");
        }
        let first = self.dictionary.pronunciations(&lower)?.first()?;
        Pronunciation::new(first.clone())
    }

    /// Whether lookups are low-confidence for the configured language.
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Number of words in the underlying dictionary.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}
