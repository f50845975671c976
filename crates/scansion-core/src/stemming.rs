//! Morphological stemming.

use crate::language::Language;

/// Reduces a word to its stem.
pub trait Stemmer: Send + Sync {
    /// Stem `word`. Must be deterministic.
    fn stem(&self, word: &str) -> String;
}

/// Light suffix-stripping stemmer.
///
/// Lowercases the word and removes the longest matching inflectional suffix,
/// never leaving fewer than three characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer {
    language: Language,
}

const MIN_STEM_CHARS: usize = 3;

/// English suffixes, longest first.
const ENGLISH_SUFFIXES: &[&str] = &[
    "fulness", "ational", "iveness", "ization", "ousness", "ments", "ingly", "ness", "ment",
    "edly", "ings", "less", "ful", "ing", "ies", "ied", "est", "ers", "ed", "er", "ly", "es", "s",
];

/// German suffixes, longest first.
const GERMAN_SUFFIXES: &[&str] = &[
    "ungen", "heit", "keit", "lich", "isch", "ung", "ern", "end", "em", "en", "er", "es", "e", "s",
];

impl SuffixStemmer {
    /// Create a stemmer for `language`.
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    const fn suffixes(&self) -> &'static [&'static str] {
        match self.language {
            Language::English => ENGLISH_SUFFIXES,
            Language::German => GERMAN_SUFFIXES,
        }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let total = lower.chars().count();
        for suffix in self.suffixes() {
            if lower.ends_with(suffix) && total - suffix.chars().count() >= MIN_STEM_CHARS {
                let mut stem = lower[..lower.len() - suffix.len()].to_string();
                // "ies"/"ied" become "y": "ferries" -> "ferry".
                if matches!(*suffix, "ies" | "ied") {
                    stem.push('y');
                }
                return stem;
            }
        }
        lower
    }
}
