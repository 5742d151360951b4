//! Adjective lemmatization
//!
//! Works like WordNet's `morphy` restricted to adjectives: a candidate base
//! form is produced from the exception table and from suffix detachment
//! rules, and a candidate is only accepted when the lexicon knows it as an
//! adjective. The shortest accepted candidate wins; a word with no accepted
//! candidate is its own lemma.

use crate::{lexicon::Lexicon, pos::PosTag};

/// Suffix detachment rules as `(suffix, replacement)`.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
    ("ier", "y"),
    ("iest", "y"),
];

#[derive(Debug, Clone, Copy)]
pub struct Lemmatizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Lemmatizer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the base form of a lower-cased adjective.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_text::{lemma::Lemmatizer, lexicon::Lexicon};
    ///
    /// let lemmatizer = Lemmatizer::new(Lexicon::shared());
    /// assert_eq!(lemmatizer.lemmatize_adjective("crispier"), "crispy");
    /// assert_eq!(lemmatizer.lemmatize_adjective("better"), "good");
    /// assert_eq!(lemmatizer.lemmatize_adjective("purple"), "purple");
    /// ```
    #[must_use]
    pub fn lemmatize_adjective(&self, word: &str) -> String {
        self.candidates(word)
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_owned())
    }

    /// Classifies an unknown word as a comparative or superlative of a known adjective.
    ///
    /// Returns `None` for words the lexicon already knows and for words whose
    /// detached stem is not a known adjective (`butter` is not `butt` + `-er`).
    #[must_use]
    pub fn comparative_degree(&self, word: &str) -> Option<PosTag> {
        if self.lexicon.is_known_adjective(word) {
            return None;
        }
        let tag = if word.ends_with("est") {
            PosTag::Jjs
        } else if word.ends_with("er") {
            PosTag::Jjr
        } else {
            return None;
        };
        self.rule_candidates(word).next().map(|_| tag)
    }

    fn candidates<'w>(&'w self, word: &'w str) -> impl Iterator<Item = String> + 'w {
        let exception = self.lexicon.adjective_exception(word).map(str::to_owned);
        let itself = self
            .lexicon
            .is_known_adjective(word)
            .then(|| word.to_owned());
        exception
            .into_iter()
            .chain(itself)
            .chain(self.rule_candidates(word))
    }

    fn rule_candidates<'w>(&'w self, word: &'w str) -> impl Iterator<Item = String> + 'w {
        DETACHMENT_RULES
            .iter()
            .filter_map(move |(suffix, replacement)| {
                let stem = word.strip_suffix(suffix)?;
                if stem.is_empty() {
                    return None;
                }
                Some(format!("{stem}{replacement}"))
            })
            .flat_map(|candidate| {
                let undoubled = undouble(&candidate);
                [Some(candidate), undoubled].into_iter().flatten()
            })
            .filter(move |candidate| self.lexicon.is_known_adjective(candidate))
    }
}

/// `bigg` → `big`, `wett` → `wet`
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's'))
        .then(|| stem[..stem.len() - last.len_utf8()].to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new(Lexicon::shared()).lemmatize_adjective(word)
    }

    #[test]
    fn test_base_forms_are_unchanged() {
        assert_eq!(lemma("juicy"), "juicy");
        assert_eq!(lemma("tender"), "tender");
        assert_eq!(lemma("bitter"), "bitter");
    }

    #[test]
    fn test_regular_comparatives() {
        assert_eq!(lemma("sweeter"), "sweet");
        assert_eq!(lemma("saltiest"), "salty");
        assert_eq!(lemma("nicer"), "nice");
        assert_eq!(lemma("bigger"), "big");
        assert_eq!(lemma("wettest"), "wet");
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(lemma("best"), "good");
        assert_eq!(lemma("worse"), "bad");
        assert_eq!(lemma("older"), "old");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(lemma("zingy"), "zingy");
        assert_eq!(lemma("butter"), "butter");
    }

    #[test]
    fn test_comparative_degree() {
        let lemmatizer = Lemmatizer::new(Lexicon::shared());
        assert_eq!(lemmatizer.comparative_degree("juicier"), Some(PosTag::Jjr));
        assert_eq!(lemmatizer.comparative_degree("softest"), Some(PosTag::Jjs));
        assert_eq!(lemmatizer.comparative_degree("tender"), None);
        assert_eq!(lemmatizer.comparative_degree("dinner"), None);
        assert_eq!(lemmatizer.comparative_degree("zingy"), None);
    }
}
