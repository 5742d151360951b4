//! Process-wide English lexical resource
//!
//! [`Lexicon`] bundles every static word table the text pipeline needs:
//!
//! - the NLTK English stopword list consulted by adjective extraction, from
//!   the `stop-words` crate
//! - the part-of-speech dictionary used by the [`Tagger`](crate::pos::Tagger)
//! - the adjective inventory and comparison exceptions used by the
//!   [`Lemmatizer`](crate::lemma::Lemmatizer)
//! - the VADER valence lexicon behind the
//!   [`SentimentClassifier`](crate::sentiment::SentimentClassifier), from the
//!   `vader_sentiment` crate
//!
//! Building the lookup maps costs a few thousand insertions, so the resource is
//! built once and shared: use [`Lexicon::shared`] and pass the reference to the
//! components that need it.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use crate::pos::PosTag;

mod dictionary;

static SHARED: LazyLock<Lexicon> = LazyLock::new(Lexicon::english);

#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
    tags: HashMap<&'static str, PosTag>,
    adjectives: HashSet<&'static str>,
    adjective_exceptions: HashMap<&'static str, &'static str>,
    adjectival_nouns: HashSet<&'static str>,
    copulas: HashSet<&'static str>,
    degree_modifiers: HashSet<&'static str>,
    valence: HashMap<&'static str, f64>,
}

impl Lexicon {
    /// The lazily built English lexicon shared by the whole process.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Builds the English lexicon from the embedded word tables.
    ///
    /// When a word appears in several part-of-speech groups, the first group
    /// listing it decides its dictionary tag.
    #[must_use]
    pub fn english() -> Self {
        let mut tags = HashMap::new();
        for (tag, words) in dictionary::TAGGED_WORDS {
            for word in *words {
                tags.entry(*word).or_insert(*tag);
            }
        }
        for word in dictionary::ADJECTIVES {
            tags.entry(*word).or_insert(PosTag::Jj);
        }
        for word in dictionary::NOUNS {
            tags.entry(*word).or_insert(PosTag::Nn);
        }

        Self {
            stopwords: stop_words::get(stop_words::LANGUAGE::English)
                .iter()
                .copied()
                .collect(),
            tags,
            adjectives: dictionary::ADJECTIVES.iter().copied().collect(),
            adjective_exceptions: dictionary::ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
            adjectival_nouns: dictionary::ADJECTIVAL_NOUNS.iter().copied().collect(),
            copulas: dictionary::COPULAS.iter().copied().collect(),
            degree_modifiers: dictionary::DEGREE_MODIFIERS.iter().copied().collect(),
            valence: vader_sentiment::LEXICON
                .iter()
                .map(|(word, valence)| (**word, *valence))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Dictionary tag of a lower-cased word, if the word is known.
    #[must_use]
    pub fn known_tag(&self, word: &str) -> Option<PosTag> {
        self.tags.get(word).copied()
    }

    /// Whether the word is a base-form adjective.
    #[must_use]
    pub fn is_known_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(word)
    }

    /// Base form of an irregular comparative or superlative (`worse` → `bad`).
    #[must_use]
    pub fn adjective_exception(&self, word: &str) -> Option<&'static str> {
        self.adjective_exceptions.get(word).copied()
    }

    /// Nouns that read as adjectives after a copula or degree adverb (`very filling`).
    #[must_use]
    pub fn is_adjectival_noun(&self, word: &str) -> bool {
        self.adjectival_nouns.contains(word)
    }

    #[must_use]
    pub fn is_copula(&self, word: &str) -> bool {
        self.copulas.contains(word)
    }

    #[must_use]
    pub fn is_degree_modifier(&self, word: &str) -> bool {
        self.degree_modifiers.contains(word)
    }

    /// Valence of a lower-cased word on the \[-4, 4\] scale.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valence.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_built_once() {
        assert!(std::ptr::eq(Lexicon::shared(), Lexicon::shared()));
    }

    #[test]
    fn test_stopwords() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.stopwords.len(), 179);
        assert!(lexicon.is_stopword("very"));
        assert!(lexicon.is_stopword("own"));
        assert!(!lexicon.is_stopword("juicy"));
    }

    #[test]
    fn test_first_group_decides_tag() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.known_tag("the"), Some(PosTag::Dt));
        assert_eq!(lexicon.known_tag("filling"), Some(PosTag::Nn));
        assert_eq!(lexicon.known_tag("crispy"), Some(PosTag::Jj));
        assert_eq!(lexicon.known_tag("was"), Some(PosTag::Vbd));
        assert_eq!(lexicon.known_tag("zingy"), None);
    }

    #[test]
    fn test_adjective_inventory() {
        let lexicon = Lexicon::shared();
        assert!(lexicon.is_known_adjective("soggy"));
        assert!(lexicon.is_known_adjective("purple"));
        assert!(!lexicon.is_known_adjective("sauce"));
        assert_eq!(lexicon.adjective_exception("best"), Some("good"));
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        let adjectives = dictionary::ADJECTIVES.iter().collect::<HashSet<_>>();
        assert_eq!(adjectives.len(), dictionary::ADJECTIVES.len());
    }

    #[test]
    fn test_valence() {
        let lexicon = Lexicon::shared();
        assert!(lexicon.valence.len() > 7000);
        assert_eq!(lexicon.valence("dreadful"), Some(-1.9));
        assert_eq!(lexicon.valence("superb"), Some(3.1));
        assert_eq!(lexicon.valence("juicy"), None);
        for (word, score) in &lexicon.valence {
            assert!((-4.0..=4.0).contains(score), "{word} out of range");
        }
    }
}
