//! Per-response derived features
//!
//! [`FeatureExtractor`] turns one [`Response`] into a [`ResponseFeatures`]
//! record: the adjectives, tags and sentiment found in each variant's answers,
//! the variant's taste rating and the canonical cooking method. Records are
//! independent of each other and are the rows of the per-response export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surveylens_text::{
    adjective::AdjectiveExtractor,
    lexicon::Lexicon,
    sentiment::{SentimentClassifier, SentimentLabel},
};

use crate::{
    aggregate,
    cooking,
    response::{COOKING_METHOD, RatingMetric, Response, TextField, Variant},
    synonym::{self, SentimentContext},
    tags::TagRules,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantFeatures {
    pub likes_adjectives: Vec<String>,
    pub dislikes_adjectives: Vec<String>,
    /// Likes adjectives followed by dislikes adjectives.
    pub all_adjectives: Vec<String>,
    pub positive_adjectives: Vec<String>,
    pub negative_adjectives: Vec<String>,
    pub likes_tags: Vec<String>,
    pub dislikes_tags: Vec<String>,
    pub feedback_tags: Vec<String>,
    /// Union of the likes, dislikes and feedback tags.
    pub tags: Vec<String>,
    pub sentiment: SentimentLabel,
    pub taste: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFeatures {
    pub id: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub a: VariantFeatures,
    pub b: VariantFeatures,
    /// Canonical cooking method, `None` when the record lacks the question.
    pub cooking_method: Option<String>,
}

impl ResponseFeatures {
    #[must_use]
    pub fn variant(&self, variant: Variant) -> &VariantFeatures {
        match variant {
            Variant::A => &self.a,
            Variant::B => &self.b,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor<'a> {
    adjectives: AdjectiveExtractor<'a>,
    classifier: SentimentClassifier<'a>,
    tag_rules: &'a TagRules,
}

impl<'a> FeatureExtractor<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, tag_rules: &'a TagRules) -> Self {
        Self {
            adjectives: AdjectiveExtractor::new(lexicon),
            classifier: SentimentClassifier::new(lexicon),
            tag_rules,
        }
    }

    #[must_use]
    pub fn extract(&self, response: &Response) -> ResponseFeatures {
        let cooking_method = response
            .has_question(COOKING_METHOD)
            .then(|| cooking::normalize_cooking_method(response.text(COOKING_METHOD).as_deref()));
        ResponseFeatures {
            id: response.id.clone(),
            submitted_at: response.submitted_at,
            a: self.extract_variant(response, Variant::A),
            b: self.extract_variant(response, Variant::B),
            cooking_method,
        }
    }

    fn extract_variant(&self, response: &Response, variant: Variant) -> VariantFeatures {
        let [likes, dislikes, feedback] =
            TextField::ALL.map(|field| response.variant_text(variant, field));

        let likes_adjectives = self.adjectives.extract(likes.as_deref());
        let dislikes_adjectives = self.adjectives.extract(dislikes.as_deref());
        let all_adjectives = likes_adjectives
            .iter()
            .chain(&dislikes_adjectives)
            .cloned()
            .collect();

        let from_likes = synonym::classify_by_context(
            &self.classifier,
            likes_adjectives.iter().map(String::as_str),
            SentimentContext::Likes,
        );
        let from_dislikes = synonym::classify_by_context(
            &self.classifier,
            dislikes_adjectives.iter().map(String::as_str),
            SentimentContext::Dislikes,
        );
        let positive_adjectives = [from_likes.positive, from_dislikes.positive].concat();
        let negative_adjectives = [from_likes.negative, from_dislikes.negative].concat();

        let likes_tags = self.tag_rules.extract(likes.as_deref());
        let dislikes_tags = self.tag_rules.extract(dislikes.as_deref());
        let feedback_tags = self.tag_rules.extract(feedback.as_deref());
        let tags = self
            .tag_rules
            .merge([&likes_tags[..], &dislikes_tags[..], &feedback_tags[..]]);

        VariantFeatures {
            sentiment: aggregate::sentiment_summary(likes.as_deref(), dislikes.as_deref()),
            taste: response.rating(variant, RatingMetric::Taste),
            likes_adjectives,
            dislikes_adjectives,
            all_adjectives,
            positive_adjectives,
            negative_adjectives,
            likes_tags,
            dislikes_tags,
            feedback_tags,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn features(record: Value) -> ResponseFeatures {
        let Value::Object(record) = record else {
            panic!("fixture must be an object");
        };
        let rules = TagRules::standard();
        FeatureExtractor::new(Lexicon::shared(), &rules).extract(&Response::from_record(1, record))
    }

    #[test]
    fn test_variant_features() {
        let f = features(json!({
            "A_likes": "Juicy chicken and crispy pastry",
            "A_dislikes": "The pastry was soggy and purple",
            "A_Feedback": "Would buy again",
            "A_taste": 8,
        }));
        assert_eq!(f.a.likes_adjectives, ["juicy", "crispy"]);
        assert_eq!(f.a.dislikes_adjectives, ["soggy", "purple"]);
        assert_eq!(f.a.all_adjectives, ["juicy", "crispy", "soggy", "purple"]);
        assert_eq!(f.a.positive_adjectives, ["juicy", "crispy"]);
        assert_eq!(f.a.negative_adjectives, ["soggy", "purple"]);
        assert_eq!(f.a.likes_tags, ["juicy_chicken", "crispy_pastry"]);
        assert_eq!(f.a.dislikes_tags, ["soggy_pastry"]);
        assert_eq!(f.a.feedback_tags, ["would_buy"]);
        assert_eq!(
            f.a.tags,
            ["juicy_chicken", "crispy_pastry", "soggy_pastry", "would_buy"]
        );
        assert_eq!(f.a.sentiment, SentimentLabel::Neutral);
        assert_eq!(f.a.taste, Some(8.0));
    }

    #[test]
    fn test_missing_variant_is_empty() {
        let f = features(json!({ "A_likes": "smoky" }));
        assert!(f.b.all_adjectives.is_empty());
        assert!(f.b.tags.is_empty());
        assert_eq!(f.b.sentiment, SentimentLabel::Neutral);
        assert_eq!(f.b.taste, None);
        assert_eq!(f.cooking_method, None);
        assert_eq!(f.variant(Variant::A).sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_cooking_method() {
        let f = features(json!({ "cookingMethod": "Air-Fried" }));
        assert_eq!(f.cooking_method.as_deref(), Some("Air Fryer"));
        let f = features(json!({ "cookingMethod": null }));
        assert_eq!(f.cooking_method.as_deref(), Some(cooking::UNKNOWN_METHOD));
        let f = features(json!({ "cookingMethod": "n/a" }));
        assert_eq!(f.cooking_method.as_deref(), Some("N/A"));
    }
}
