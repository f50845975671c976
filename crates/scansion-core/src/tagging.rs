//! Word tokenization and part-of-speech tagging.
//!
//! Tags follow Penn Treebank conventions: word classes are short uppercase
//! codes (`NN`, `VBD`, `DT`), possessives carry a `$` (`PRP$`), and
//! punctuation is tagged with a symbol (`,`, `.`, `:`). The colon tag `:`
//! marks colon/semicolon-class dividers.

use serde::{Deserialize, Serialize};

use crate::dictionaries::function_words::closed_class_tag;
use crate::language::{DIVIDER_TAG, Language};

/// A token paired with its grammatical tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text as it appears in the sentence.
    pub text: String,
    /// Grammatical tag.
    pub tag: String,
}

impl TaggedToken {
    /// Pair `text` with `tag`.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Whether the tag is an all-uppercase word class (`NN`, `VBD`, `CD`).
    ///
    /// Tokens passing this test are the sentence's significant words.
    pub fn is_word_class(&self) -> bool {
        !self.tag.is_empty() && self.tag.chars().all(|c| c.is_ascii_uppercase())
    }

    /// Whether the tag starts with a letter, i.e. is not a punctuation tag.
    pub fn has_alphabetic_tag(&self) -> bool {
        self.tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    }

    /// Whether this token is a colon/semicolon-class divider.
    pub fn is_divider(&self) -> bool {
        self.tag == DIVIDER_TAG
    }
}

/// Splits a sentence into tagged tokens.
pub trait Tagger: Send + Sync {
    /// Tokenize and tag `sentence`, preserving token order.
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;
}

/// Lexicon-and-suffix tagger.
///
/// Closed-class words come from a per-language table; open-class words are
/// guessed from their endings and capitalization. Good enough to separate
/// content words from punctuation and to find dividers, which is all the
/// prosodic analyses need.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger {
    language: Language,
}

impl HeuristicTagger {
    /// Create a tagger for `language`.
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    fn tag_word(&self, word: &str, sentence_initial: bool) -> &'static str {
        if word.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',')) {
            return "CD";
        }
        let lower = word.to_lowercase();
        if let Some(tag) = closed_class_tag(self.language, &lower) {
            return tag;
        }
        match self.language {
            Language::English => english_open_class(word, &lower, sentence_initial),
            Language::German => german_open_class(word, &lower),
        }
    }
}

fn english_open_class(word: &str, lower: &str, sentence_initial: bool) -> &'static str {
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !sentence_initial {
        "NNP"
    } else if lower.ends_with("ing") && lower.len() > 4 {
        "VBG"
    } else if lower.ends_with("ed") && lower.len() > 3 {
        "VBD"
    } else if lower.ends_with("ly") {
        "RB"
    } else if lower.ends_with("tion") || lower.ends_with("ness") || lower.ends_with("ment") {
        "NN"
    } else if lower.ends_with("ful") || lower.ends_with("less") || lower.ends_with("ous") {
        "JJ"
    } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
        "NNS"
    } else {
        "NN"
    }
}

fn german_open_class(word: &str, lower: &str) -> &'static str {
    if word.chars().next().is_some_and(char::is_uppercase) {
        "NN"
    } else if ["lich", "ig", "isch", "bar", "sam", "los"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        "JJ"
    } else if lower.ends_with("en") || lower.ends_with("ern") || lower.ends_with("eln") {
        "VB"
    } else {
        "NN"
    }
}

/// Tag for a punctuation token.
fn punctuation_tag(token: &str, opening: bool) -> String {
    match token {
        ";" | ":" | "--" | "..." | "…" | "—" | "–" => DIVIDER_TAG.to_string(),
        "," => ",".to_string(),
        "." | "!" | "?" => ".".to_string(),
        "\"" | "“" | "”" | "„" | "«" | "»" => {
            if opening {
                "``".to_string()
            } else {
                "''".to_string()
            }
        }
        "(" | "[" | "{" => "(".to_string(),
        ")" | "]" | "}" => ")".to_string(),
        other => other.to_string(),
    }
}

/// Whether `c` may continue a word when followed by another word character.
const fn is_word_joiner(c: char) -> bool {
    matches!(c, '\'' | '’' | '-' | '.' | ',')
}

/// Split `sentence` into word and punctuation tokens.
///
/// Apostrophes, hyphens, and decimal marks stay inside a word when a word
/// character follows them. Runs of `-` and `.` form a single token.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let chars: Vec<char> = sentence.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c.is_alphanumeric() {
            let start = i;
            while i < chars.len() {
                if chars[i].is_alphanumeric() {
                    i += 1;
                } else if is_word_joiner(chars[i])
                    && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric())
                    && (chars[i] != ',' || chars[i - 1].is_numeric())
                    && (chars[i] != '.' || chars[i - 1].is_numeric())
                {
                    i += 1;
                } else {
                    break;
                }
            }
            tokens.push(chars[start..i].iter().collect());
        } else if matches!(c, '-' | '.') {
            let start = i;
            while i < chars.len() && chars[i] == c {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else {
            tokens.push(c.to_string());
            i += 1;
        }
    }

    tokens
}

impl Tagger for HeuristicTagger {
    #[tracing::instrument(skip_all, fields(sentence_len = sentence.len()))]
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        let tokens = tokenize(sentence);
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut sentence_initial = true;
        let mut quote_open = false;

        for token in tokens {
            let is_word = token.chars().next().is_some_and(char::is_alphanumeric);
            let tag = if is_word {
                let tag = self.tag_word(&token, sentence_initial);
                sentence_initial = false;
                tag.to_string()
            } else {
                let tag = punctuation_tag(&token, !quote_open);
                match tag.as_str() {
                    "``" => quote_open = true,
                    "''" => quote_open = false,
                    // A fresh clause starts after a divider or terminal mark.
                    ":" | "." => sentence_initial = true,
                    _ => {}
                }
                tag
            };
            tagged.push(TaggedToken { text: token, tag });
        }

        tagged
    }
}
