//! Word lists consulted by the built-in collaborators.
//!
//! Abbreviations keep the sentence segmenter from splitting on "Dr." or
//! "z.B."; closed-class word lists drive the heuristic tagger.

pub mod abbreviations;
pub mod function_words;
