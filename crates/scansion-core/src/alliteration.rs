//! Alliteration detection.
//!
//! A sentence alliterates when two consecutive significant words begin with
//! the same consonant sound. The sound comes from the first consonant
//! phoneme of the word's pronunciation, or from the first consonant letter
//! group of its spelling when the dictionary has no entry. A word with no
//! consonant sound never matches anything, including another such word.

use crate::language::LanguageProfile;
use crate::phonetic::PhoneticResolver;

/// First consonant sound of `word`, if any.
pub fn first_consonant_sound(
    word: &str,
    resolver: &PhoneticResolver,
    profile: &LanguageProfile,
) -> Option<String> {
    match resolver.resolve(word) {
        Some(pronunciation) => pronunciation
            .phonemes()
            .iter()
            .find(|p| profile.is_consonant_phoneme(p))
            .cloned(),
        None => profile.first_consonant_letters(word),
    }
}

/// Whether two adjacent words in `words` share a first consonant sound.
pub fn has_alliteration<S: AsRef<str>>(
    words: &[S],
    resolver: &PhoneticResolver,
    profile: &LanguageProfile,
) -> bool {
    let sounds: Vec<Option<String>> = words
        .iter()
        .map(|w| first_consonant_sound(w.as_ref(), resolver, profile))
        .collect();
    sounds
        .windows(2)
        .any(|pair| matches!(pair, [Some(a), Some(b)] if a == b))
}
