//! Multi-clause splitting.
//!
//! A sentence containing a colon/semicolon-class divider is split once, at
//! the first divider, into the clause before it and the clause after it.

use crate::tagging::TaggedToken;

/// Split `sentence` at its first divider token.
///
/// The left clause is right-trimmed and the right clause left-trimmed; the
/// divider itself is dropped. Sentences without a divider, or whose divider
/// text cannot be located in the sentence, come back whole.
pub fn split_multiclause(sentence: &str, tokens: &[TaggedToken]) -> Vec<String> {
    let Some(divider) = tokens.iter().position(TaggedToken::is_divider) else {
        return vec![sentence.to_string()];
    };
    let Some(offset) = token_offset(sentence, tokens, divider) else {
        tracing::debug!(divider = %tokens[divider].text, "divider token not found in sentence text");
        return vec![sentence.to_string()];
    };
    let before = sentence[..offset].trim_end();
    let after = sentence[offset + tokens[divider].text.len()..].trim_start();
    vec![before.to_string(), after.to_string()]
}

/// Byte offset of `tokens[index]` in `sentence`.
///
/// Tokens are located in order, each searched for after the end of the one
/// before, so an earlier token containing the same text is skipped.
fn token_offset(sentence: &str, tokens: &[TaggedToken], index: usize) -> Option<usize> {
    let mut cursor = 0;
    for token in &tokens[..index] {
        cursor += sentence[cursor..].find(token.text.as_str())? + token.text.len();
    }
    sentence[cursor..]
        .find(tokens[index].text.as_str())
        .map(|offset| cursor + offset)
}
