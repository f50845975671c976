//! Rhyme fingerprints.
//!
//! A sentence's rhyme key is the last three phoneme codes of its last
//! pronounceable word, concatenated. Two sentences are rhyme candidates when
//! their keys are equal; there is no fuzzy matching.

use crate::phonetic::PhoneticResolver;
use crate::tagging::TaggedToken;

/// Number of trailing phonemes that make up a rhyme key.
pub const RHYME_PHONEMES: usize = 3;

/// Rhyme key for a tagged sentence.
///
/// Looks only at the last token whose tag starts with a letter, so trailing
/// punctuation is ignored. Returns `None` when there is no such token or the
/// dictionary has no entry for it.
pub fn rhyme_key(tokens: &[TaggedToken], resolver: &PhoneticResolver) -> Option<String> {
    let last_word = tokens.iter().rev().find(|t| t.has_alphabetic_tag())?;
    let pronunciation = resolver.resolve(&last_word.text)?;
    Some(pronunciation.tail(RHYME_PHONEMES).concat())
}
