//! Abbreviations that should not end a sentence when followed by a period.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::language::Language;

/// English abbreviations, lowercase, without the trailing period.
static ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "st", "hon", "esq", "capt",
        "col", "gen", "lt", "maj", "sgt", "gov", "pres",
    ]);

    // Latin and scholarly
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s", "ca"]);

    // Calendar
    set.extend([
        "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
        "nov", "dec",
    ]);

    // Places, organizations, references
    set.extend([
        "ave", "blvd", "rd", "mt", "u.s", "u.k", "inc", "corp", "ltd", "co", "bros", "vol",
        "no", "pp", "ch", "fig", "ed", "trans",
    ]);

    set
});

/// German abbreviations, lowercase, without the trailing period.
static GERMAN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "z.b", "d.h", "u.a", "usw", "bzw", "ca", "evtl", "ggf", "vgl", "sog", "etc", "nr",
        "str", "dr", "hr", "fr", "prof", "bd", "s", "abs", "jh", "v.chr", "n.chr", "u.s.w",
        "inkl", "zzgl", "mio", "mrd", "ebd", "hrsg", "o.ä", "u.ä", "z.t",
    ]);

    set
});

/// Check if `word` is a known abbreviation in `language`.
///
/// Case-insensitive; surrounding periods are ignored.
pub fn is_abbreviation(language: Language, word: &str) -> bool {
    let lower = word.to_lowercase();
    let trimmed = lower.trim_matches('.');
    match language {
        Language::English => ENGLISH.contains(trimmed),
        Language::German => GERMAN.contains(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_abbreviations() {
        assert!(is_abbreviation(Language::English, "Dr"));
        assert!(is_abbreviation(Language::English, "e.g."));
        assert!(is_abbreviation(Language::English, "etc"));
        assert!(!is_abbreviation(Language::English, "ship"));
    }

    #[test]
    fn german_abbreviations() {
        assert!(is_abbreviation(Language::German, "z.B."));
        assert!(is_abbreviation(Language::German, "usw"));
        assert!(!is_abbreviation(Language::German, "Haus"));
        assert!(!is_abbreviation(Language::English, "usw"));
    }
}
