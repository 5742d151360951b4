//! Single-word sentiment polarity
//!
//! Classification is two-tier:
//!
//! 1. The VADER valence lexicon gives a compound score for the word. Scores at
//!    or beyond [`POLARITY_THRESHOLD`] decide the label.
//! 2. Near-zero or unscored words fall back to curated food-descriptor lists,
//!    since general lexicons barely cover taste and texture vocabulary
//!    (`juicy`, `soggy`, ...). Words in neither list are neutral.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Absolute compound score from which a word counts as polar.
pub const POLARITY_THRESHOLD: f64 = 0.1;

/// Normalization constant of the compound score.
const COMPOUND_ALPHA: f64 = 15.0;

pub(crate) static CURATED_POSITIVE: &[&str] = &[
    "good", "great", "nice", "excellent", "amazing", "wonderful", "delicious", "tasty",
    "flavorful", "flavourful", "juicy", "crispy", "tender", "sweet", "savory", "savoury",
    "appetizing", "fresh", "moist", "succulent", "yummy", "scrumptious", "delectable",
    "aromatic", "crunchy", "satisfying",
];

pub(crate) static CURATED_NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "bland", "dry", "soggy", "greasy", "burnt", "overcooked",
    "undercooked", "tough", "hard", "stale", "sour", "bitter", "salty", "spicy", "tasteless",
    "flavorless", "flavourless", "disgusting", "unappetizing", "rubbery", "chewy", "mushy",
    "watery", "oily", "overdone",
];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    #[display("positive")]
    Positive,
    #[display("negative")]
    Negative,
    #[display("neutral")]
    Neutral,
}

#[derive(Debug, Clone, Copy)]
pub struct SentimentClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentClassifier<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Compound polarity of a single word, in (-1, 1). Unknown words score 0.
    #[must_use]
    pub fn compound_score(&self, word: &str) -> f64 {
        let Some(valence) = self.lexicon.valence(word) else {
            return 0.0;
        };
        valence / (valence * valence + COMPOUND_ALPHA).sqrt()
    }

    /// Classifies one adjective.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_text::{lexicon::Lexicon, sentiment::{SentimentClassifier, SentimentLabel}};
    ///
    /// let classifier = SentimentClassifier::new(Lexicon::shared());
    /// assert_eq!(classifier.classify("juicy"), SentimentLabel::Positive);
    /// assert_eq!(classifier.classify("soggy"), SentimentLabel::Negative);
    /// assert_eq!(classifier.classify("purple"), SentimentLabel::Neutral);
    /// ```
    #[must_use]
    pub fn classify(&self, adjective: &str) -> SentimentLabel {
        let word = adjective.trim().to_lowercase();
        if word.is_empty() {
            return SentimentLabel::Neutral;
        }

        let score = self.compound_score(&word);
        if score >= POLARITY_THRESHOLD {
            return SentimentLabel::Positive;
        }
        if score <= -POLARITY_THRESHOLD {
            return SentimentLabel::Negative;
        }

        if CURATED_POSITIVE.contains(&word.as_str()) {
            SentimentLabel::Positive
        } else if CURATED_NEGATIVE.contains(&word.as_str()) {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(word: &str) -> SentimentLabel {
        SentimentClassifier::new(Lexicon::shared()).classify(word)
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(classify(""), SentimentLabel::Neutral);
        assert_eq!(classify("   "), SentimentLabel::Neutral);
    }

    #[test]
    fn test_lexicon_scores() {
        assert_eq!(classify("great"), SentimentLabel::Positive);
        assert_eq!(classify("horrible"), SentimentLabel::Negative);
        assert_eq!(classify("Excellent "), SentimentLabel::Positive);
    }

    #[test]
    fn test_common_polar_words() {
        for word in ["dull", "lame", "dreadful", "stupid", "pathetic"] {
            assert_eq!(classify(word), SentimentLabel::Negative, "{word}");
        }
        for word in ["superb", "outstanding", "fabulous", "brilliant"] {
            assert_eq!(classify(word), SentimentLabel::Positive, "{word}");
        }
    }

    #[test]
    fn test_curated_fallback() {
        assert_eq!(classify("juicy"), SentimentLabel::Positive);
        assert_eq!(classify("crunchy"), SentimentLabel::Positive);
        assert_eq!(classify("soggy"), SentimentLabel::Negative);
        assert_eq!(classify("bland"), SentimentLabel::Negative);
        assert_eq!(classify("purple"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_weak_valence_still_crosses_threshold() {
        let classifier = SentimentClassifier::new(Lexicon::shared());
        let score = classifier.compound_score("hard");
        assert!(score <= -POLARITY_THRESHOLD, "{score}");
        assert_eq!(classifier.classify("hard"), SentimentLabel::Negative);
    }

    #[test]
    fn test_compound_is_bounded() {
        let classifier = SentimentClassifier::new(Lexicon::shared());
        for word in ["love", "worst", "good", "purple"] {
            let score = classifier.compound_score(word);
            assert!(score > -1.0 && score < 1.0, "{word}: {score}");
        }
        assert!(classifier.compound_score("purple").abs() < f64::EPSILON);
    }

    #[test]
    fn test_curated_lists_do_not_overlap() {
        for word in CURATED_POSITIVE {
            assert!(!CURATED_NEGATIVE.contains(word), "{word}");
        }
    }
}
