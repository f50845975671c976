//! Syllable counting.
//!
//! Two independent strategies:
//!
//! - [`count_phonemic`] counts vowel phonemes from the pronouncing
//!   dictionary and falls back to counting vowel letters on a miss.
//! - [`german::count_syllables_de`] scans vowel clusters in the spelling
//!   and never touches the dictionary.
//!
//! The engine picks one per [`SyllableStrategy`](crate::SyllableStrategy).

pub mod german;

use crate::language::{LanguageProfile, SyllableStrategy};
use crate::phonetic::PhoneticResolver;

pub use german::count_syllables_de;

/// Count syllables in `word` by vowel phonemes, or vowel letters on a miss.
pub fn count_phonemic(word: &str, resolver: &PhoneticResolver, profile: &LanguageProfile) -> usize {
    match resolver.resolve(word) {
        Some(pronunciation) => pronunciation
            .phonemes()
            .iter()
            .filter(|p| profile.is_vowel_phoneme(p))
            .count(),
        None => profile.count_vowel_letters(word),
    }
}

/// Count syllables in `word` with the given strategy.
pub fn count_with(
    strategy: SyllableStrategy,
    word: &str,
    resolver: &PhoneticResolver,
    profile: &LanguageProfile,
) -> usize {
    match strategy {
        SyllableStrategy::Phonemic => count_phonemic(word, resolver, profile),
        SyllableStrategy::Orthographic => count_syllables_de(word),
    }
}
