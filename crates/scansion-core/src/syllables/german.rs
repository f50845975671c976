//! Orthographic syllable counter for German.
//!
//! Counts vowel clusters in the spelling. A cluster of one vowel is one
//! syllable. For longer clusters only the first two letters are examined: a
//! known single-sound pair (`ei`, `au`, `ie`, ...) is consumed as one
//! syllable, otherwise only the first vowel is consumed and the rest of the
//! cluster starts the next scan. Before the scan, a handful of special cases
//! apply: multi-word and hyphenated input, a fixed exception table,
//! uppercase abbreviations, leading digits, and the `y`/`qu` spellings.
//!
//! Pure and dictionary-free.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Vowel letters, including `y` and umlauts.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'ä', 'ö', 'ü'];

/// Two-vowel spellings pronounced as a single syllable nucleus.
const ONE_SYLLABLE_PAIRS: &[[char; 2]] = &[
    ['a', 'a'],
    ['a', 'i'],
    ['a', 'o'],
    ['a', 'u'],
    ['a', 'y'],
    ['e', 'e'],
    ['e', 'i'],
    ['e', 'u'],
    ['e', 'y'],
    ['i', 'e'],
    ['i', 'i'],
    ['o', 'o'],
    ['o', 'u'],
    ['o', 'y'],
    ['u', 'i'],
    ['u', 'o'],
    ['u', 'u'],
    ['ä', 'u'],
    ['a', 'e'],
    ['o', 'e'],
    ['u', 'e'],
];

/// Words the cluster heuristic gets wrong, with their true counts.
const EXCEPTIONS: &[(&str, usize)] = &[
    ("Pietät", 3),
    ("McDonald's", 3),
    ("T-Shirt", 2),
    ("orange", 2),
];

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("valid regex"));

/// `y` before a vowel is a consonant.
static Y_BEFORE_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^y[aeiouäöü]").expect("valid regex"));

/// `qu` before a vowel: the `u` and the vowel form one nucleus.
static QU_BEFORE_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("qu[aeiouäöüy]").expect("valid regex"));

/// Exact-match lookup in the exception table.
pub fn exception(word: &str) -> Option<usize> {
    EXCEPTIONS
        .iter()
        .find_map(|&(known, count)| (known == word).then_some(count))
}

/// Count the syllables of a German word or phrase.
///
/// Words that reduce to nothing after stripping punctuation count as zero.
pub fn count_syllables_de(word: &str) -> usize {
    if word.contains(char::is_whitespace) {
        return word.split_whitespace().map(count_syllables_de).sum();
    }

    let word = word.trim_matches('-');
    if let Some(count) = exception(word) {
        return count;
    }
    if word.contains('-') {
        return word.split('-').map(count_syllables_de).sum();
    }

    let cleaned: Cow<'_, str> = if !word.is_empty() && word.chars().all(char::is_alphanumeric) {
        Cow::Borrowed(word)
    } else {
        let kept: String = word
            .chars()
            .filter(|&c| c.is_alphanumeric() || matches!(c, '\'' | '`' | '-'))
            .collect();
        Cow::Owned(kept.trim_end_matches('-').to_string())
    };

    if let Some(count) = abbreviation_count(&cleaned) {
        return count;
    }

    let lower = cleaned.to_lowercase();

    // "1920er": one syllable per digit, then the rest.
    if let Some(digits) = LEADING_DIGITS.find(&lower) {
        return digits.as_str().chars().count() + count_syllables_de(&lower[digits.end()..]);
    }

    let lower = if Y_BEFORE_VOWEL.is_match(&lower) {
        &lower[1..]
    } else {
        lower.as_str()
    };
    let collapsed = QU_BEFORE_VOWEL.replace_all(lower, "qu");
    let chars: Vec<char> = collapsed.chars().collect();
    count_clusters(&chars)
}

/// Spelled-out abbreviations: one syllable per letter, "Ypsilon" has three.
///
/// A trailing lowercase `s` on an otherwise uppercase word is a plural and
/// not pronounced separately.
fn abbreviation_count(word: &str) -> Option<usize> {
    let letters = |w: &str| w.chars().count() + w.matches('Y').count() * 2;
    if is_upper(word) {
        return Some(letters(word));
    }
    let stem = word.strip_suffix('s')?;
    is_upper(stem).then(|| letters(stem))
}

/// At least one cased letter and no lowercase letters.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn is_one_syllable_pair(first: char, second: char) -> bool {
    ONE_SYLLABLE_PAIRS.contains(&[first, second])
}

/// Count vowel clusters in a lowercase character sequence.
fn count_clusters(chars: &[char]) -> usize {
    let mut syllables = 0;
    let mut cursor = 0;

    loop {
        let start = chars[cursor..]
            .iter()
            .position(|&c| is_vowel(c))
            .map_or(chars.len(), |offset| cursor + offset);
        let run = chars[start..].iter().take_while(|&&c| is_vowel(c)).count();

        if run == 0 {
            return syllables;
        }
        syllables += 1;
        cursor = if run == 1 {
            start + 1
        } else if is_one_syllable_pair(chars[start], chars[start + 1]) {
            start + 2
        } else {
            start + 1
        };
    }
}
