//! Text feature extraction for free-text survey answers.
//!
//! This crate turns raw answer strings into the linguistic features the
//! analysis layer aggregates:
//!
//! - **Normalization**: placeholder detection and punctuation-free cleaning
//! - **Tokenization and tagging**: Penn Treebank style tokens and part-of-speech tags
//! - **Lemmatization**: base forms of comparative and superlative adjectives
//! - **Adjective extraction**: distinct, lemmatized content adjectives of an answer
//! - **Sentiment**: single-word polarity with a food-vocabulary fallback
//!
//! All components borrow a [`Lexicon`](lexicon::Lexicon); the process-wide
//! instance is [`Lexicon::shared`](lexicon::Lexicon::shared).
//!
//! # Modules
//!
//! - [`normalizer`]: `normalize` and `clean` for raw answers
//! - [`token`]: sentence-aware tokenizer
//! - [`pos`]: rule-based part-of-speech tagger
//! - [`lemma`]: adjective lemmatizer
//! - [`lexicon`]: English word tables, NLTK stopwords and VADER valences
//! - [`adjective`]: adjective extraction pipeline
//! - [`sentiment`]: adjective polarity classification
//!
//! # Examples
//!
//! ```
//! use surveylens_text::{
//!     adjective::AdjectiveExtractor,
//!     lexicon::Lexicon,
//!     sentiment::{SentimentClassifier, SentimentLabel},
//! };
//!
//! let lexicon = Lexicon::shared();
//! let adjectives = AdjectiveExtractor::new(lexicon).extract(Some("Soggy pastry, juicy chicken"));
//! assert_eq!(adjectives, ["soggy", "juicy"]);
//!
//! let classifier = SentimentClassifier::new(lexicon);
//! assert_eq!(classifier.classify(&adjectives[0]), SentimentLabel::Negative);
//! ```

pub mod adjective;
pub mod lemma;
pub mod lexicon;
pub mod normalizer;
pub mod pos;
pub mod sentiment;
pub mod token;
