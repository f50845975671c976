//! Closed-class words and their Penn-Treebank-style tags.
//!
//! Function words are a small, fixed set, so a lookup table tags them far
//! more reliably than suffix heuristics. Possessive determiners get `PRP$`,
//! which falls outside the all-uppercase significant-word pattern.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::language::Language;

type TagTable = HashMap<&'static str, &'static str>;

fn tag_all(map: &mut TagTable, tag: &'static str, words: &[&'static str]) {
    for word in words {
        // First tag wins for ambiguous words.
        map.entry(*word).or_insert(tag);
    }
}

static ENGLISH: LazyLock<TagTable> = LazyLock::new(|| {
    let mut map = TagTable::new();
    tag_all(
        &mut map,
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "all", "both", "either", "neither", "another",
        ],
    );
    tag_all(&mut map, "PRP$", &["my", "your", "his", "her", "its", "our", "their", "thy"]);
    tag_all(
        &mut map,
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves", "thee", "thou",
        ],
    );
    tag_all(&mut map, "TO", &["to"]);
    tag_all(
        &mut map,
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "upon", "about",
            "above", "below", "over", "under", "through", "during", "before", "after", "since",
            "until", "against", "among", "between", "without", "within", "across", "behind",
            "beyond", "near", "toward", "towards", "like", "than", "if", "because", "while",
            "though", "although", "whether",
        ],
    );
    tag_all(&mut map, "CC", &["and", "or", "but", "nor", "yet", "so"]);
    tag_all(
        &mut map,
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would",
        ],
    );
    tag_all(&mut map, "WDT", &["which"]);
    tag_all(&mut map, "WP", &["who", "whom", "what"]);
    tag_all(&mut map, "WP$", &["whose"]);
    tag_all(&mut map, "WRB", &["when", "where", "why", "how"]);
    tag_all(&mut map, "EX", &["there"]);
    tag_all(
        &mut map,
        "RB",
        &[
            "not", "never", "very", "too", "also", "just", "here", "now", "then",
        ],
    );
    tag_all(&mut map, "VBZ", &["is", "has", "does"]);
    tag_all(&mut map, "VBP", &["are", "am", "have", "do"]);
    tag_all(&mut map, "VBD", &["was", "were", "had", "did"]);
    tag_all(&mut map, "VB", &["be"]);
    tag_all(&mut map, "VBN", &["been"]);
    tag_all(&mut map, "VBG", &["being"]);
    map
});

static GERMAN: LazyLock<TagTable> = LazyLock::new(|| {
    let mut map = TagTable::new();
    tag_all(
        &mut map,
        "DT",
        &[
            "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer",
            "eines", "kein", "keine", "jeder", "jede", "jedes", "dieser", "diese", "dieses",
        ],
    );
    tag_all(
        &mut map,
        "PRP",
        &[
            "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "dich", "sich", "uns", "euch",
            "ihn", "ihm", "ihnen", "mir", "dir",
        ],
    );
    tag_all(
        &mut map,
        "PRP$",
        &[
            "mein", "meine", "meinen", "meinem", "dein", "deine", "sein", "seine", "seinen",
            "seinem", "ihre", "ihren", "ihrem", "unser", "unsere", "euer", "eure",
        ],
    );
    tag_all(
        &mut map,
        "IN",
        &[
            "in", "im", "an", "am", "auf", "aus", "bei", "beim", "mit", "nach", "von", "vom", "zu",
            "zum", "zur", "vor", "über", "unter", "durch", "für", "gegen", "ohne", "um", "zwischen",
            "hinter", "neben", "seit", "als", "wenn", "weil", "dass", "ob",
        ],
    );
    tag_all(&mut map, "CC", &["und", "oder", "aber", "denn", "sondern", "doch"]);
    tag_all(
        &mut map,
        "MD",
        &[
            "kann", "können", "muss", "müssen", "soll", "sollen", "will", "wollen", "darf",
            "dürfen", "mag",
        ],
    );
    tag_all(
        &mut map,
        "VB",
        &[
            "ist", "sind", "war", "waren", "bin", "bist", "hat", "haben", "hatte", "wird", "werden",
        ],
    );
    tag_all(
        &mut map,
        "RB",
        &[
            "nicht", "nie", "sehr", "auch", "schon", "noch", "hier", "da", "dort",
        ],
    );
    tag_all(&mut map, "WRB", &["wie", "wo", "wann", "warum"]);
    tag_all(&mut map, "WP", &["wer", "was"]);
    map
});

/// Tag for a closed-class word, if `lower` is one in `language`.
///
/// `lower` must already be lowercased.
pub fn closed_class_tag(language: Language, lower: &str) -> Option<&'static str> {
    match language {
        Language::English => ENGLISH.get(lower).copied(),
        Language::German => GERMAN.get(lower).copied(),
    }
}
