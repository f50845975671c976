//! Sentence segmentation.
//!
//! The engine treats sentence splitting as an external collaborator behind
//! [`SentenceSegmenter`]. [`RuleSegmenter`] is the built-in implementation: a
//! single character scan that breaks on terminal punctuation unless the
//! period belongs to an abbreviation, an initial, a decimal number, or an
//! ellipsis.

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::language::Language;

/// Splits a block of text into sentences.
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into sentences, in order, each trimmed.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Abbreviation-aware rule-based sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter {
    language: Language,
}

impl RuleSegmenter {
    /// Create a segmenter using `language`'s abbreviation list.
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    fn is_boundary(&self, chars: &[char], pos: usize) -> bool {
        let Some(next) = next_visible(chars, pos + 1) else {
            return true;
        };
        // Closing quotes and brackets stay with the sentence they close.
        if matches!(chars.get(pos + 1), Some('"' | '\'' | ')' | '»' | '”' | '’')) {
            return false;
        }
        if chars[pos] != '.' {
            return !next.is_lowercase();
        }
        // "..." runs end only at their last mark; "z.B" and "3.5" continue.
        if chars
            .get(pos + 1)
            .is_some_and(|c| matches!(c, '.' | '!' | '?') || c.is_alphanumeric())
        {
            return false;
        }
        let word = word_before(chars, pos);
        if is_abbreviation(self.language, &word) || is_initial(&word) {
            return false;
        }
        // German ordinals ("am 3. Mai") read as a number followed by a period.
        if self.language == Language::German
            && !word.is_empty()
            && word.chars().all(|c| c.is_ascii_digit())
        {
            return !next.is_lowercase() && !next.is_uppercase();
        }
        !next.is_lowercase()
    }

    fn is_boundary_after_closer(&self, chars: &[char], pos: usize) -> bool {
        next_visible(chars, pos + 1).is_none_or(|c| !c.is_lowercase())
    }
}

impl SentenceSegmenter for RuleSegmenter {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();

        for (pos, &ch) in chars.iter().enumerate() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?') && self.is_boundary(&chars, pos) {
                push_trimmed(&mut sentences, &current);
                current.clear();
            } else if matches!(ch, '"' | '\'' | ')' | '»' | '”' | '’')
                && pos > 0
                && matches!(chars[pos - 1], '.' | '!' | '?')
                && self.is_boundary_after_closer(&chars, pos)
            {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
        push_trimmed(&mut sentences, &current);

        tracing::debug!(sentences = sentences.len(), "segmented text");
        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, current: &str) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// First non-whitespace character at or after `from`.
fn next_visible(chars: &[char], from: usize) -> Option<char> {
    chars.get(from..)?.iter().copied().find(|c| !c.is_whitespace())
}

/// The token immediately before the period at `pos`, periods included.
fn word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| c.is_whitespace() || matches!(c, '(' | '"' | '\''))
        .map_or(0, |i| i + 1);
    chars[start..pos].iter().collect()
}

/// Single capitals and dotted capitals: "J", "J.R.R", "U.S".
fn is_initial(word: &str) -> bool {
    !word.is_empty()
        && word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_uppercase))
}
