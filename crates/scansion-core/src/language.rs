//! Language profiles.
//!
//! A [`LanguageProfile`] bundles every language-dependent table the analyses
//! consult: vowel letters, vowel and consonant phoneme codes, consonant letter
//! groups, the divider tag, and the default syllable-counting strategy. A
//! profile is chosen once when the engine is built.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Vowel letters counted when an English word has no dictionary entry.
static EN_VOWEL_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiouAEIOU]").expect("valid regex"));

/// Vowel letters counted when a German word has no dictionary entry.
static DE_VOWEL_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiouAEIOUäöüÄÖÜYy]").expect("valid regex"));

/// ARPABET vowel codes. Anchored prefix match, so `AE1` counts as `AE`.
static EN_VOWEL_PHONEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?:AA|AE|AH|AO|AW|AY|EH|EY|ER|IH|IY|OW|OY|UH|UW)").expect("valid regex")
});

static DE_VOWEL_PHONEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?:AA|AI|AO|AU|AY|EE|EI|EU|EY|IE|II|OO|OU|OY|UI|UO|UU|ÄU|AE|OE|UE)")
        .expect("valid regex")
});

static EN_CONSONANT_PHONEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?:B|D|G|JH|L|N|P|S|T|V|Y|ZH|CH|DH|F|HH|K|M|NG|R|SH|TH|W|Z)")
        .expect("valid regex")
});

static DE_CONSONANT_PHONEMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^(?:B|D|G|JH|L|N|P|S|T|V|Y|ZH|CH|DH|F|HH|K|M|NG|R|SH|TH|W|Z|SCH)")
        .expect("valid regex")
});

/// Consonant letter groups for words without a pronunciation.
///
/// Leftmost-first alternation: digraphs listed before single letters win.
static EN_CONSONANT_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("SH|CH|TH|NG|B|D|G|L|N|P|S|T|V|Y|F|K|M|R|W|Z").expect("valid regex")
});

static DE_CONSONANT_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("B|C|D|G|H|L|M|N|P|Q|R|S|T|V|X|F|K|W|Z").expect("valid regex")
});

/// Tag the tagger assigns to colon/semicolon-class punctuation.
pub const DIVIDER_TAG: &str = ":";

/// Supported analysis languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English, backed by an ARPABET pronouncing dictionary.
    #[default]
    English,
    /// German, counted orthographically.
    German,
}

impl Language {
    /// Returns the language name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
        }
    }

    /// Build the profile for this language.
    pub fn profile(self) -> LanguageProfile {
        LanguageProfile::new(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How per-word syllables are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SyllableStrategy {
    /// Count vowel phonemes, falling back to vowel letters on a dictionary miss.
    Phonemic,
    /// Scan vowel clusters in the spelling; never consults the dictionary.
    Orthographic,
}

impl SyllableStrategy {
    /// Returns the strategy name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phonemic => "phonemic",
            Self::Orthographic => "orthographic",
        }
    }
}

impl fmt::Display for SyllableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-language phonetic tables and defaults.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    vowel_letters: &'static Regex,
    vowel_phonemes: &'static Regex,
    consonant_phonemes: &'static Regex,
    consonant_letters: &'static Regex,
    syllable_strategy: SyllableStrategy,
}

impl LanguageProfile {
    /// Build the profile for `language` with its default syllable strategy.
    pub fn new(language: Language) -> Self {
        match language {
            Language::English => Self {
                language,
                vowel_letters: &EN_VOWEL_LETTERS,
                vowel_phonemes: &EN_VOWEL_PHONEMES,
                consonant_phonemes: &EN_CONSONANT_PHONEMES,
                consonant_letters: &EN_CONSONANT_LETTERS,
                syllable_strategy: SyllableStrategy::Phonemic,
            },
            Language::German => Self {
                language,
                vowel_letters: &DE_VOWEL_LETTERS,
                vowel_phonemes: &DE_VOWEL_PHONEMES,
                consonant_phonemes: &DE_CONSONANT_PHONEMES,
                consonant_letters: &DE_CONSONANT_LETTERS,
                syllable_strategy: SyllableStrategy::Orthographic,
            },
        }
    }

    /// Override the syllable strategy.
    #[must_use]
    pub const fn with_syllable_strategy(mut self, strategy: SyllableStrategy) -> Self {
        self.syllable_strategy = strategy;
        self
    }

    /// The language this profile describes.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The syllable strategy used for sentence-level counts.
    pub const fn syllable_strategy(&self) -> SyllableStrategy {
        self.syllable_strategy
    }

    /// The tag marking colon/semicolon-class dividers.
    pub const fn divider_tag(&self) -> &'static str {
        DIVIDER_TAG
    }

    /// Whether a real pronouncing dictionary exists for this language.
    ///
    /// Only English has one; other languages still look words up in the
    /// configured dictionary, with degraded confidence.
    pub const fn has_phonetic_resource(&self) -> bool {
        matches!(self.language, Language::English)
    }

    /// Count the vowel letters in `word`.
    pub fn count_vowel_letters(&self, word: &str) -> usize {
        self.vowel_letters.find_iter(word).count()
    }

    /// Whether `phoneme` is a vowel code.
    pub fn is_vowel_phoneme(&self, phoneme: &str) -> bool {
        self.vowel_phonemes.is_match(phoneme)
    }

    /// Whether `phoneme` is a consonant code.
    pub fn is_consonant_phoneme(&self, phoneme: &str) -> bool {
        self.consonant_phonemes.is_match(phoneme)
    }

    /// First consonant letter group anywhere in the uppercased `word`.
    pub fn first_consonant_letters(&self, word: &str) -> Option<String> {
        let upper = word.to_uppercase();
        self.consonant_letters
            .find(&upper)
            .map(|m| m.as_str().to_string())
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
