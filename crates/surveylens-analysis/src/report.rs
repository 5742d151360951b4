//! Survey report data structures
//!
//! A [`SurveyReport`] is the complete output of one analysis run and the only
//! thing export sinks consume.
//!
//! # Data Structure
//!
//! ```text
//! SurveyReport
//! ├─ total_responses
//! ├─ variants: [VariantReport; A, B]
//! │   ├─ adjective totals (likes, dislikes)
//! │   ├─ positive_adjectives / negative_adjectives: AdjectiveTable
//! │   │   ├─ grouped: canonical group → count (most common first)
//! │   │   └─ raw: adjective → count (most common first)
//! │   ├─ tag_frequency: tag → responses (most common first)
//! │   ├─ tag_ratings: tag → mean taste (highest first)
//! │   ├─ sentiment: positive / negative / neutral response counts
//! │   ├─ taste: descriptive statistics of the taste rating
//! │   └─ taste_histogram: unit-width rating bins
//! ├─ comparison: per-metric mean A, mean B, B − A
//! ├─ cooking_methods: per-method count and mean taste (if asked)
//! ├─ key_findings: mean taste, winner, most common tags
//! └─ responses: per-response derived features
//! ```
//!
//! Every aggregate table is sorted with a total order and the report carries
//! no run-dependent data, so the same responses always serialize to the same
//! bytes. Per-response rows keep input order.

use serde::{Deserialize, Serialize};
use surveylens_stats::{descriptive::DescriptiveStats, histogram::Histogram};

use crate::{
    aggregate::{
        CookingMethodSummary, CountEntry, MetricComparison, SentimentDistribution, TagRating,
    },
    derived::ResponseFeatures,
    response::Variant,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub total_responses: usize,
    pub variants: Vec<VariantReport>,
    pub comparison: Vec<MetricComparison>,
    /// Present when any response answered the cooking method question.
    pub cooking_methods: Option<Vec<CookingMethodSummary>>,
    pub key_findings: KeyFindings,
    pub responses: Vec<ResponseFeatures>,
}

impl SurveyReport {
    #[must_use]
    pub fn variant(&self, variant: Variant) -> Option<&VariantReport> {
        self.variants.iter().find(|v| v.variant == variant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantReport {
    pub variant: Variant,
    /// Adjectives extracted from likes answers, over all responses.
    pub likes_adjective_total: usize,
    /// Adjectives extracted from dislikes answers, over all responses.
    pub dislikes_adjective_total: usize,
    pub positive_adjectives: AdjectiveTable,
    pub negative_adjectives: AdjectiveTable,
    pub tag_frequency: Vec<CountEntry>,
    pub tag_ratings: Vec<TagRating>,
    pub sentiment: SentimentDistribution,
    pub taste: Option<DescriptiveStats>,
    pub taste_histogram: Histogram,
}

/// Adjective pool counts, most common first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveTable {
    pub grouped: Vec<CountEntry>,
    pub raw: Vec<CountEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFindings {
    pub mean_taste_a: Option<f64>,
    pub mean_taste_b: Option<f64>,
    /// `B` when its mean taste is strictly higher, else `A`. `None` without
    /// taste ratings for both variants.
    pub winner: Option<Variant>,
    pub top_tag_a: Option<CountEntry>,
    pub top_tag_b: Option<CountEntry>,
}

impl KeyFindings {
    #[must_use]
    pub fn new(mean_taste_a: Option<f64>, mean_taste_b: Option<f64>) -> Self {
        let winner = mean_taste_a.zip(mean_taste_b).map(|(a, b)| {
            if b > a { Variant::B } else { Variant::A }
        });
        Self {
            mean_taste_a,
            mean_taste_b,
            winner,
            top_tag_a: None,
            top_tag_b: None,
        }
    }
}
