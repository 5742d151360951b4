//! Adjective extraction from free-text answers
//!
//! The pipeline for one answer is:
//!
//! 1. [`normalize`](crate::normalizer::normalize) the raw text
//! 2. [`tokenize`](crate::token::tokenize) and [`tag`](crate::pos::Tagger::tag) it
//! 3. keep adjective-tagged tokens that are longer than two characters, contain
//!    a letter and are not stopwords
//! 4. lemmatize what is left and drop repeats, keeping first-occurrence order
//!
//! [`AdjectiveExtractor::extract`] never fails: a text the tokenizer or tagger
//! rejects yields no adjectives and a warning in the log.

use std::collections::HashSet;

use crate::{
    lemma::Lemmatizer,
    lexicon::Lexicon,
    normalizer,
    pos::{TagError, Tagger},
    token::{self, TokenizeError},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ExtractError {
    #[display("tokenization failed: {_0}")]
    Tokenize(TokenizeError),
    #[display("tagging failed: {_0}")]
    Tag(TagError),
}

#[derive(Debug, Clone, Copy)]
pub struct AdjectiveExtractor<'a> {
    lexicon: &'a Lexicon,
    tagger: Tagger<'a>,
    lemmatizer: Lemmatizer<'a>,
}

impl<'a> AdjectiveExtractor<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            tagger: Tagger::new(lexicon),
            lemmatizer: Lemmatizer::new(lexicon),
        }
    }

    /// Extracts the distinct adjectives of an answer, in order of first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_text::{adjective::AdjectiveExtractor, lexicon::Lexicon};
    ///
    /// let extractor = AdjectiveExtractor::new(Lexicon::shared());
    /// let adjectives = extractor.extract(Some("Juicy chicken, crispier pastry. Really juicy!"));
    /// assert_eq!(adjectives, ["juicy", "crispy"]);
    /// assert!(extractor.extract(Some("N/A")).is_empty());
    /// assert!(extractor.extract(None).is_empty());
    /// ```
    #[must_use]
    pub fn extract(&self, text: Option<&str>) -> Vec<String> {
        let text = normalizer::normalize(text);
        if text.is_empty() {
            return vec![];
        }
        match self.try_extract(&text) {
            Ok(adjectives) => adjectives,
            Err(err) => {
                tracing::warn!(error = %err, chars = text.chars().count(), "skipping text");
                vec![]
            }
        }
    }

    /// Like [`extract`](Self::extract) on already normalized text, but reports
    /// tokenizer and tagger failures.
    pub fn try_extract(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let tokens = token::tokenize(text)?;
        if tokens.is_empty() {
            return Ok(vec![]);
        }
        let tagged = self.tagger.tag(&tokens)?;

        let mut seen = HashSet::new();
        let adjectives = tagged
            .iter()
            .filter(|t| t.tag.is_adjective())
            .map(|t| t.token.text.to_lowercase())
            .filter(|word| self.is_content_word(word))
            .map(|word| {
                let lemma = self.lemmatizer.lemmatize_adjective(&word);
                if lemma.is_empty() || !lemma.chars().any(char::is_alphabetic) {
                    word
                } else {
                    lemma
                }
            })
            .filter(|lemma| seen.insert(lemma.clone()))
            .collect::<Vec<_>>();

        tracing::trace!(tokens = tokens.len(), adjectives = adjectives.len(), "extracted");
        Ok(adjectives)
    }

    fn is_content_word(&self, word: &str) -> bool {
        word.chars().count() > 2
            && word.chars().any(char::is_alphabetic)
            && !self.lexicon.is_stopword(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        AdjectiveExtractor::new(Lexicon::shared()).extract(Some(text))
    }

    #[test]
    fn test_empty_and_placeholder_answers() {
        assert!(extract("").is_empty());
        assert!(extract("   ").is_empty());
        assert!(extract("none").is_empty());
        assert!(extract("NULL").is_empty());
        assert!(extract("...").is_empty());
    }

    #[test]
    fn test_first_occurrence_order_without_repeats() {
        assert_eq!(
            extract("The chicken was juicy and tender. Juicy again, and tender."),
            ["juicy", "tender"]
        );
    }

    #[test]
    fn test_comparatives_are_lemmatized() {
        assert_eq!(extract("B was juicier and the pastry was crispier"), ["juicy", "crispy"]);
        assert_eq!(extract("the best pie"), ["good"]);
    }

    #[test]
    fn test_short_and_stopword_adjectives_are_dropped() {
        // "own" is a stopword, "ok" is too short
        let adjectives = extract("my own ok pie was soggy");
        assert_eq!(adjectives, ["soggy"]);
    }

    #[test]
    fn test_non_adjectives_are_ignored() {
        assert!(extract("the sauce and the chicken").is_empty());
    }

    #[test]
    fn test_every_result_is_a_content_word() {
        let text = "Too salty, a bit dry, not very filling but the kids liked the smoky taste!";
        let adjectives = extract(text);
        assert!(!adjectives.is_empty());
        let lexicon = Lexicon::shared();
        for adjective in &adjectives {
            assert!(adjective.chars().count() > 2, "{adjective}");
            assert!(adjective.chars().any(char::is_alphabetic), "{adjective}");
            assert!(!lexicon.is_stopword(adjective), "{adjective}");
        }
        let unique = adjectives.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), adjectives.len());
    }

    #[test]
    fn test_failures_yield_empty() {
        let extractor = AdjectiveExtractor::new(Lexicon::shared());
        let long = "dry ".repeat(token::MAX_INPUT_CHARS);
        assert!(matches!(
            extractor.try_extract(&long),
            Err(ExtractError::Tokenize(_))
        ));
        assert!(extractor.extract(Some(&long)).is_empty());

        let many = "dry ".repeat(crate::pos::MAX_TAGGED_TOKENS + 1);
        assert!(matches!(extractor.try_extract(&many), Err(ExtractError::Tag(_))));
        assert!(extractor.extract(Some(&many)).is_empty());
    }
}
