//! The analysis engine.
//!
//! [`ProsodyEngine`] owns a [`LanguageProfile`], the external collaborators
//! (segmenter, tagger, stemmer, pronouncing dictionary) and the bounded
//! lexical caches. Every analysis goes through it, so tagging and stemming
//! happen at most once per distinct input while the cache holds it.
//!
//! ```
//! use scansion_core::{Language, ProsodyEngine};
//! use scansion_core::pronunciation::CmuDictionary;
//!
//! let dictionary = CmuDictionary::parse("SILVER  S IH1 L V ER0\nSEA  S IY1\n");
//! let engine = ProsodyEngine::builder()
//!     .language(Language::English)
//!     .dictionary(dictionary)
//!     .build();
//!
//! assert!(engine.has_alliteration("Silver sea"));
//! assert_eq!(engine.count_syllables("Silver sea"), 3);
//! assert_eq!(engine.rhyme_sound("Silver sea").as_deref(), Some("SIY1"));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::alliteration;
use crate::cache::{CacheCapacity, CacheStats, SharedCache};
use crate::clauses::split_multiclause;
use crate::config::Config;
use crate::error::{AnalysisError, AnalysisResult, DictionaryError};
use crate::language::{Language, LanguageProfile, SyllableStrategy};
use crate::phonetic::PhoneticResolver;
use crate::pronunciation::{CmuDictionary, EmptyDictionary, PronouncingDictionary};
use crate::rhyme::rhyme_key;
use crate::stemming::{Stemmer, SuffixStemmer};
use crate::syllables;
use crate::tagging::{HeuristicTagger, TaggedToken, Tagger};
use crate::text::{RuleSegmenter, SentenceSegmenter};

/// Memoized tagging, significant-word extraction and stemming.
#[derive(Debug)]
struct LexicalCache {
    tags: SharedCache<Arc<Vec<TaggedToken>>>,
    words: SharedCache<Arc<Vec<String>>>,
    stems: SharedCache<String>,
}

impl LexicalCache {
    fn new(capacity: CacheCapacity) -> Self {
        Self {
            tags: SharedCache::new(capacity.tags),
            words: SharedCache::new(capacity.words),
            stems: SharedCache::new(capacity.stems),
        }
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            tags: self.tags.counters(),
            words: self.words.counters(),
            stems: self.stems.counters(),
        }
    }
}

/// Prosodic features of one sentence or clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceProfile {
    /// The analyzed text.
    pub text: String,
    /// Syllables summed over the significant words.
    pub syllables: usize,
    /// Rhyme key, if the last word has a pronunciation.
    pub rhyme: Option<String>,
    /// Whether two adjacent significant words share a first consonant sound.
    pub alliterative: bool,
    /// Significant words in order.
    pub words: Vec<String>,
    /// Stems of the significant words.
    pub stems: Vec<String>,
}

/// Clauses sharing one rhyme key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeGroup {
    /// The shared rhyme key.
    pub key: String,
    /// Indices into [`TextProfile::clauses`], ascending.
    pub clauses: Vec<usize>,
}

/// Prosodic profile of a whole text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextProfile {
    /// Language the text was analyzed as.
    pub language: Language,
    /// Syllable strategy in effect.
    pub syllable_strategy: SyllableStrategy,
    /// Number of sentences the segmenter produced.
    pub sentences: usize,
    /// Every clause after multi-clause expansion, in text order.
    pub clauses: Vec<SentenceProfile>,
    /// Groups of two or more clauses with the same rhyme key, ordered by key.
    pub rhyme_groups: Vec<RhymeGroup>,
}

impl TextProfile {
    /// Indices of clauses that belong to some rhyme group, ascending.
    pub fn rhyming_clauses(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .rhyme_groups
            .iter()
            .flat_map(|g| g.clauses.iter().copied())
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Phonetic and rhythmic analysis of sentences.
///
/// Cheap to share: wrap it in an [`Arc`] to analyze from several threads.
pub struct ProsodyEngine {
    profile: LanguageProfile,
    segmenter: Arc<dyn SentenceSegmenter>,
    tagger: Arc<dyn Tagger>,
    stemmer: Arc<dyn Stemmer>,
    resolver: PhoneticResolver,
    cache: LexicalCache,
}

impl std::fmt::Debug for ProsodyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProsodyEngine")
            .field("profile", &self.profile)
            .field("resolver", &self.resolver)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl ProsodyEngine {
    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Build an engine from configuration, loading the configured dictionary.
    #[tracing::instrument(skip_all, fields(language = %config.language))]
    pub fn from_config(config: &Config) -> Result<Self, DictionaryError> {
        let mut builder = Self::builder()
            .language(config.language)
            .cache_capacity(config.cache);
        if let Some(strategy) = config.syllable_strategy {
            builder = builder.syllable_strategy(strategy);
        }
        if let Some(ref path) = config.dictionary {
            builder = builder.dictionary(CmuDictionary::from_path(path)?);
        }
        Ok(builder.build())
    }

    /// The language profile in use.
    pub const fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// The phoneme resolver in use.
    pub const fn resolver(&self) -> &PhoneticResolver {
        &self.resolver
    }

    /// Split `text` into sentences.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Tagged tokens of `sentence`, memoized.
    pub fn tag(&self, sentence: &str) -> Arc<Vec<TaggedToken>> {
        self.cache.tags.get_or_insert_with(sentence, || {
            tracing::debug!(sentence_len = sentence.len(), "tag cache miss");
            Arc::new(self.tagger.tag(sentence))
        })
    }

    /// Significant words of `sentence` (tokens with a word-class tag), memoized.
    pub fn words(&self, sentence: &str) -> Arc<Vec<String>> {
        self.cache.words.get_or_insert_with(sentence, || {
            tracing::debug!(sentence_len = sentence.len(), "word cache miss");
            let words = self
                .tag(sentence)
                .iter()
                .filter(|t| t.is_word_class())
                .map(|t| t.text.clone())
                .collect();
            Arc::new(words)
        })
    }

    /// Stem of one word, memoized.
    pub fn stem(&self, word: &str) -> String {
        self.cache.stems.get_or_insert_with(word, || {
            tracing::trace!(word, "stem cache miss");
            self.stemmer.stem(word)
        })
    }

    /// Stems of the significant words of `sentence`.
    pub fn stem_sentence(&self, sentence: &str) -> Vec<String> {
        self.words(sentence).iter().map(|w| self.stem(w)).collect()
    }

    /// Syllables in a single word under the configured strategy.
    pub fn count_syllables_in_word(&self, word: &str) -> usize {
        syllables::count_with(
            self.profile.syllable_strategy(),
            word,
            &self.resolver,
            &self.profile,
        )
    }

    /// Syllables in `sentence`, summed over its significant words.
    pub fn count_syllables(&self, sentence: &str) -> usize {
        self.words(sentence)
            .iter()
            .map(|w| self.count_syllables_in_word(w))
            .sum()
    }

    /// Rhyme key of `sentence`, if its last word has a pronunciation.
    pub fn rhyme_sound(&self, sentence: &str) -> Option<String> {
        rhyme_key(self.tag(sentence).as_slice(), &self.resolver)
    }

    /// Whether two adjacent significant words of `sentence` alliterate.
    pub fn has_alliteration(&self, sentence: &str) -> bool {
        alliteration::has_alliteration(
            self.words(sentence).as_slice(),
            &self.resolver,
            &self.profile,
        )
    }

    /// Split each sentence at its first divider.
    ///
    /// Sentences whose tagging is empty are dropped.
    #[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
    pub fn expand_multiclauses<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<String> {
        let mut clauses = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let sentence = sentence.as_ref();
            let tokens = self.tag(sentence);
            if tokens.is_empty() {
                tracing::debug!("dropping sentence with no tokens");
                continue;
            }
            clauses.extend(split_multiclause(sentence, tokens.as_slice()));
        }
        clauses
    }

    /// All prosodic features of one sentence.
    pub fn profile_sentence(&self, sentence: &str) -> SentenceProfile {
        SentenceProfile {
            text: sentence.to_string(),
            syllables: self.count_syllables(sentence),
            rhyme: self.rhyme_sound(sentence),
            alliterative: self.has_alliteration(sentence),
            words: self.words(sentence).to_vec(),
            stems: self.stem_sentence(sentence),
        }
    }

    /// Segment `text`, expand multi-clause sentences, and profile every clause.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] when no clause survives.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn profile_text(&self, text: &str) -> AnalysisResult<TextProfile> {
        let sentences = self.sentences(text);
        let clauses = self.expand_multiclauses(&sentences);
        if clauses.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let clauses: Vec<SentenceProfile> =
            clauses.iter().map(|c| self.profile_sentence(c)).collect();

        let mut by_key: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (index, clause) in clauses.iter().enumerate() {
            if let Some(ref key) = clause.rhyme {
                by_key.entry(key.as_str()).or_default().push(index);
            }
        }
        let rhyme_groups: Vec<RhymeGroup> = by_key
            .into_iter()
            .filter(|(_, members)| members.len() >= 2)
            .map(|(key, clauses)| RhymeGroup {
                key: key.to_string(),
                clauses,
            })
            .collect();

        tracing::debug!(
            sentences = sentences.len(),
            clauses = clauses.len(),
            rhyme_groups = rhyme_groups.len(),
            "text profiled"
        );

        Ok(TextProfile {
            language: self.profile.language(),
            syllable_strategy: self.profile.syllable_strategy(),
            sentences: sentences.len(),
            clauses,
            rhyme_groups,
        })
    }

    /// Hit/miss counters for the lexical caches.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Builder for [`ProsodyEngine`].
///
/// Unset collaborators default to the built-in implementations for the
/// chosen language; an unset dictionary misses on every lookup.
#[derive(Default)]
pub struct EngineBuilder {
    language: Language,
    syllable_strategy: Option<SyllableStrategy>,
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    tagger: Option<Arc<dyn Tagger>>,
    stemmer: Option<Arc<dyn Stemmer>>,
    dictionary: Option<Arc<dyn PronouncingDictionary>>,
    cache_capacity: CacheCapacity,
}

impl EngineBuilder {
    /// Language of the analyzed text.
    pub const fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Override the language's default syllable strategy.
    pub const fn syllable_strategy(mut self, strategy: SyllableStrategy) -> Self {
        self.syllable_strategy = Some(strategy);
        self
    }

    /// Sentence segmenter.
    pub fn segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    /// Tokenizer and tagger.
    pub fn tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.tagger = Some(Arc::new(tagger));
        self
    }

    /// Stemmer.
    pub fn stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }

    /// Pronouncing dictionary.
    pub fn dictionary(self, dictionary: impl PronouncingDictionary + 'static) -> Self {
        self.shared_dictionary(Arc::new(dictionary))
    }

    /// Share an already loaded pronouncing dictionary.
    pub fn shared_dictionary(mut self, dictionary: Arc<dyn PronouncingDictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Lexical cache capacities.
    pub const fn cache_capacity(mut self, capacity: CacheCapacity) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Build the engine.
    pub fn build(self) -> ProsodyEngine {
        let language = self.language;
        let mut profile = LanguageProfile::new(language);
        if let Some(strategy) = self.syllable_strategy {
            profile = profile.with_syllable_strategy(strategy);
        }
        let dictionary = self
            .dictionary
            .unwrap_or_else(|| Arc::new(EmptyDictionary));
        let resolver = PhoneticResolver::new(dictionary, &profile);

        tracing::debug!(
            language = %language,
            strategy = %profile.syllable_strategy(),
            dictionary_entries = resolver.dictionary_len(),
            "engine built"
        );

        ProsodyEngine {
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Arc::new(RuleSegmenter::new(language))),
            tagger: self
                .tagger
                .unwrap_or_else(|| Arc::new(HeuristicTagger::new(language))),
            stemmer: self
                .stemmer
                .unwrap_or_else(|| Arc::new(SuffixStemmer::new(language))),
            resolver,
            cache: LexicalCache::new(self.cache_capacity),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dictionary() -> CmuDictionary {
        CmuDictionary::from_entries([
            ("silver", vec!["S", "IH1", "L", "V", "ER0"]),
            ("sea", vec!["S", "IY1"]),
            ("night", vec!["N", "AY1", "T"]),
            ("light", vec!["L", "AY1", "T"]),
            ("bright", vec!["B", "R", "AY1", "T"]),
            ("the", vec!["DH", "AH0"]),
            ("moon", vec!["M", "UW1", "N"]),
            ("is", vec!["IH1", "Z"]),
            ("calm", vec!["K", "AA1", "M"]),
        ])
    }

    fn english() -> ProsodyEngine {
        ProsodyEngine::builder().dictionary(dictionary()).build()
    }

    /// Tagger wrapper that counts how often it is invoked.
    #[derive(Clone)]
    struct CountingTagger {
        calls: Arc<AtomicUsize>,
    }

    impl Tagger for CountingTagger {
        fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HeuristicTagger::new(Language::English).tag(sentence)
        }
    }

    /// Tags every whitespace-separated word as `NN`, semicolons as dividers.
    struct NounTagger;

    impl Tagger for NounTagger {
        fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
            sentence
                .split_whitespace()
                .map(|w| {
                    if w == ";" {
                        TaggedToken::new(w, ":")
                    } else {
                        TaggedToken::new(w, "NN")
                    }
                })
                .collect()
        }
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProsodyEngine>();
    }

    #[test]
    fn significant_words_skip_punctuation_and_possessives() {
        let engine = english();
        let words = engine.words("The moon, her light.");
        assert_eq!(*words, vec!["The", "moon", "light"]);
    }

    #[test]
    fn sentence_syllables_sum_significant_words() {
        let engine = english();
        // silver 2 + sea 1; punctuation contributes nothing.
        assert_eq!(engine.count_syllables("Silver sea!"), 3);
        // Unknown "glow" falls back to vowel letters: 1.
        assert_eq!(engine.count_syllables("the moon glow"), 3);
    }

    #[test]
    fn german_counts_orthographically() {
        let engine = ProsodyEngine::builder().language(Language::German).build();
        assert_eq!(engine.count_syllables_in_word("Silbe"), 2);
        assert_eq!(engine.count_syllables_in_word("BYU"), 5);
        assert_eq!(engine.count_syllables("Der Hund schläft."), 3);
    }

    #[test]
    fn german_abbreviations_count_per_letter_in_sentences() {
        let engine = ProsodyEngine::builder().language(Language::German).build();
        // "Die" is one syllable, "BYU" three letters plus two for the Y.
        assert_eq!(engine.count_syllables("Die BYU"), 6);
        assert_eq!(engine.count_syllables("Die USB."), 4);
    }

    #[test]
    fn strategy_override() {
        let engine = ProsodyEngine::builder()
            .language(Language::German)
            .syllable_strategy(SyllableStrategy::Phonemic)
            .build();
        // No dictionary: vowel letters including umlauts, ä u e.
        assert_eq!(engine.count_syllables_in_word("Häuser"), 3);
        assert_eq!(engine.profile().syllable_strategy(), SyllableStrategy::Phonemic);
    }

    #[test]
    fn rhyme_sound_ignores_trailing_punctuation() {
        let engine = english();
        assert_eq!(engine.rhyme_sound("the bright night.").as_deref(), Some("NAY1T"));
        assert_eq!(engine.rhyme_sound("...").as_deref(), None);
        assert_eq!(engine.rhyme_sound(""), None);
    }

    #[test]
    fn same_final_word_same_rhyme() {
        let engine = english();
        assert_eq!(
            engine.rhyme_sound("All through the night"),
            engine.rhyme_sound("Calm is the night!")
        );
    }

    #[test]
    fn alliteration_minimal_cases() {
        let engine = english();
        assert!(engine.has_alliteration("silver sea"));
        assert!(!engine.has_alliteration("sea"));
        assert!(!engine.has_alliteration("moon sea"));
    }

    #[test]
    fn consonantless_words_never_alliterate() {
        let engine = ProsodyEngine::builder().tagger(NounTagger).build();
        // No dictionary, spellings without consonant letters.
        assert!(!engine.has_alliteration("aaa eee"));
        assert!(engine.has_alliteration("bat bee"));
    }

    #[test]
    fn letter_fallback_keeps_ng_apart_from_n() {
        let engine = ProsodyEngine::builder().tagger(NounTagger).build();
        assert!(!engine.has_alliteration("Nguyen nods"));
        assert!(engine.has_alliteration("Nguyen ngozi"));
    }

    #[test]
    fn stem_sentence_uses_significant_words() {
        let engine = english();
        assert_eq!(
            engine.stem_sentence("Sailing ships, darkness!"),
            vec!["sail", "ship", "dark"]
        );
    }

    #[test]
    fn expand_multiclauses_splits_and_drops_empty() {
        let engine = english();
        let clauses = engine.expand_multiclauses(&[
            "The sea is calm; the night is bright.",
            "   ",
            "No divider here.",
        ]);
        assert_eq!(
            clauses,
            vec!["The sea is calm", "the night is bright.", "No divider here."]
        );
    }

    #[test]
    fn expand_multiclauses_splits_only_once() {
        let engine = ProsodyEngine::builder().tagger(NounTagger).build();
        let clauses = engine.expand_multiclauses(&["a ; b ; c"]);
        assert_eq!(clauses, vec!["a", "b ; c"]);
    }

    #[test]
    fn expand_multiclauses_splits_at_the_divider_token() {
        let engine = english();
        let clauses = engine.expand_multiclauses(&["Wait --- then -- go"]);
        assert_eq!(clauses, vec!["Wait --- then", "go"]);
    }

    #[test]
    fn tagging_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = ProsodyEngine::builder()
            .tagger(CountingTagger {
                calls: Arc::clone(&calls),
            })
            .dictionary(dictionary())
            .build();

        let first = engine.profile_sentence("Silver sea, bright night");
        let second = engine.profile_sentence("Silver sea, bright night");

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let stats = engine.cache_stats();
        assert!(stats.tags.hits > 0);
        assert_eq!(stats.tags.misses, 1);
        assert_eq!(stats.words.misses, 1);
    }

    #[test]
    fn cached_and_uncached_agree() {
        let calls = Arc::new(AtomicUsize::new(0));
        let uncached = ProsodyEngine::builder()
            .tagger(CountingTagger {
                calls: Arc::clone(&calls),
            })
            .dictionary(dictionary())
            .cache_capacity(CacheCapacity {
                tags: 0,
                words: 0,
                stems: 0,
            })
            .build();
        let cached = english();

        for sentence in ["Silver sea", "The moon; the light", "Bright night."] {
            assert_eq!(
                uncached.profile_sentence(sentence),
                cached.profile_sentence(sentence)
            );
        }
        // Every analysis re-tags when caching is off.
        assert!(calls.load(Ordering::SeqCst) > 3);
        assert_eq!(uncached.cache_stats().tags.len, 0);
    }

    #[test]
    fn profile_text_groups_rhymes() {
        let engine = english();
        let profile = engine
            .profile_text("The sea is calm; all through the night. Silver sea. Bright night!")
            .unwrap();

        assert_eq!(profile.sentences, 3);
        assert_eq!(profile.clauses.len(), 4);
        assert_eq!(profile.clauses[0].text, "The sea is calm");
        assert_eq!(profile.clauses[1].text, "all through the night.");
        assert_eq!(
            profile.rhyme_groups,
            vec![RhymeGroup {
                key: "NAY1T".to_string(),
                clauses: vec![1, 3],
            }]
        );
        assert!(profile.clauses[2].alliterative);
        assert_eq!(profile.clauses[2].syllables, 3);
    }

    #[test]
    fn profile_text_rhyme_groups_need_two_members() {
        let engine = english();
        let profile = engine
            .profile_text("I walk by night. You dance all night. The sea.")
            .unwrap();
        assert_eq!(profile.rhyme_groups.len(), 1);
        assert_eq!(profile.rhyme_groups[0].key, "NAY1T");
        assert_eq!(profile.rhyme_groups[0].clauses, vec![0, 1]);
        assert_eq!(profile.rhyming_clauses(), vec![0, 1]);
    }

    #[test]
    fn text_profile_serializes() {
        let engine = english();
        let profile = engine.profile_text("Silver sea. Bright night.").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["language"], "english");
        assert_eq!(json["syllable_strategy"], "phonemic");
        assert_eq!(json["clauses"][0]["rhyme"], "SIY1");
        assert_eq!(json["clauses"][0]["alliterative"], true);
        assert!(json["rhyme_groups"].as_array().unwrap().is_empty());
    }

    #[test]
    fn profile_text_empty_input_errors() {
        let engine = english();
        assert!(matches!(
            engine.profile_text("   \n\t"),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn from_config_without_dictionary() {
        let config = Config {
            language: Language::German,
            ..Config::default()
        };
        let engine = ProsodyEngine::from_config(&config).unwrap();
        assert_eq!(engine.profile().language(), Language::German);
        assert!(engine.resolver().is_degraded());
        assert_eq!(engine.resolver().dictionary_len(), 0);
    }

    #[test]
    fn from_config_missing_dictionary_errors() {
        let config = Config {
            dictionary: Some("/nonexistent/cmudict.dict".into()),
            ..Config::default()
        };
        assert!(matches!(
            ProsodyEngine::from_config(&config),
            Err(DictionaryError::Read { .. })
        ));
    }

    #[test]
    fn engines_share_one_dictionary() {
        let shared: Arc<dyn PronouncingDictionary> = Arc::new(dictionary());
        let english = ProsodyEngine::builder()
            .shared_dictionary(Arc::clone(&shared))
            .build();
        let german = ProsodyEngine::builder()
            .language(Language::German)
            .shared_dictionary(Arc::clone(&shared))
            .build();
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(english.rhyme_sound("Silver sea"), german.rhyme_sound("Silver sea"));
    }

    #[test]
    fn shared_across_threads() {
        let engine = Arc::new(english());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.count_syllables("Silver sea"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }
}
