//! Aggregation of per-response features into report tables
//!
//! Every table here is a pure function of its input multiset: responses can
//! arrive in any order and produce the same table. Ties are broken by key so
//! that sorted tables are fully deterministic.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use surveylens_stats::descriptive;
use surveylens_text::{normalizer, sentiment::SentimentLabel};

use crate::response::{RatingMetric, Response, Variant};

/// A key with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// Mean rating of the responses carrying a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRating {
    pub tag: String,
    pub mean: f64,
    pub responses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub metric: RatingMetric,
    pub mean_a: f64,
    pub mean_b: f64,
    /// `mean_b - mean_a`
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingMethodSummary {
    pub method: String,
    pub responses: usize,
    pub mean_taste_a: Option<f64>,
    pub mean_taste_b: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    #[must_use]
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        let mut dist = Self::default();
        for label in labels {
            match label {
                SentimentLabel::Positive => dist.positive += 1,
                SentimentLabel::Negative => dist.negative += 1,
                SentimentLabel::Neutral => dist.neutral += 1,
            }
        }
        dist
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Sorts counts by count descending, then key ascending.
#[must_use]
pub fn most_common(counts: BTreeMap<String, usize>) -> Vec<CountEntry> {
    let mut entries = counts
        .into_iter()
        .map(|(key, count)| CountEntry { key, count })
        .collect::<Vec<_>>();
    // stable sort keeps BTreeMap key order among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Counts how many responses carry each tag.
///
/// Each item is one response's tag set, so a tag counts at most once per
/// response as long as the sets hold no repeats.
#[must_use]
pub fn frequency<'a, I>(tag_sets: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts = BTreeMap::new();
    for tags in tag_sets {
        for tag in tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    most_common(counts)
}

/// Mean rating per tag over the responses carrying it.
///
/// Each item is one response's tag set with its rating; responses without a
/// rating are skipped. Sorted by mean descending, then tag ascending.
///
/// # Examples
///
/// ```
/// use surveylens_analysis::aggregate::rating_by_tag;
///
/// let tags = vec!["juicy_chicken".to_owned()];
/// let ratings = rating_by_tag([(&tags[..], Some(8.0)), (&tags[..], Some(6.0)), (&tags[..], None)]);
/// assert_eq!(ratings[0].tag, "juicy_chicken");
/// assert_eq!(ratings[0].mean, 7.0);
/// assert_eq!(ratings[0].responses, 2);
/// ```
#[must_use]
pub fn rating_by_tag<'a, I>(items: I) -> Vec<TagRating>
where
    I: IntoIterator<Item = (&'a [String], Option<f64>)>,
{
    let mut ratings = HashMap::<&str, Vec<f64>>::new();
    for (tags, rating) in items {
        let Some(rating) = rating else {
            continue;
        };
        for tag in tags {
            ratings.entry(tag.as_str()).or_default().push(rating);
        }
    }

    let mut table = ratings
        .into_iter()
        .filter_map(|(tag, values)| {
            let responses = values.len();
            descriptive::mean(values).map(|mean| TagRating {
                tag: tag.to_owned(),
                mean,
                responses,
            })
        })
        .collect::<Vec<_>>();
    table.sort_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| a.tag.cmp(&b.tag))
    });
    table
}

/// Overall sentiment of one variant's answers from how much was written.
///
/// More than twice as many words under likes as under dislikes is positive,
/// and the reverse is negative. Everything else, including two empty answers,
/// is neutral.
///
/// # Examples
///
/// ```
/// use surveylens_analysis::aggregate::sentiment_summary;
/// use surveylens_text::sentiment::SentimentLabel;
///
/// assert_eq!(sentiment_summary(Some("juicy and smoky"), Some("a bit dry")), SentimentLabel::Neutral);
/// assert_eq!(sentiment_summary(Some("juicy and smoky"), None), SentimentLabel::Positive);
/// assert_eq!(sentiment_summary(None, Some("soggy")), SentimentLabel::Negative);
/// ```
#[must_use]
pub fn sentiment_summary(likes: Option<&str>, dislikes: Option<&str>) -> SentimentLabel {
    let likes = word_count(likes);
    let dislikes = word_count(dislikes);
    if likes > dislikes * 2 {
        SentimentLabel::Positive
    } else if dislikes > likes * 2 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn word_count(text: Option<&str>) -> usize {
    normalizer::clean(text).split_whitespace().count()
}

/// Mean of every rating metric for both variants.
///
/// A metric is left out when either variant has no numeric rating for it.
#[must_use]
pub fn compare_metrics(responses: &[Response]) -> Vec<MetricComparison> {
    RatingMetric::ALL
        .into_iter()
        .filter_map(|metric| {
            let mean_of = |variant: Variant| {
                descriptive::mean(responses.iter().filter_map(|r| r.rating(variant, metric)))
            };
            let mean_a = mean_of(Variant::A)?;
            let mean_b = mean_of(Variant::B)?;
            Some(MetricComparison {
                metric,
                mean_a,
                mean_b,
                difference: mean_b - mean_a,
            })
        })
        .collect()
}

/// Response counts and mean taste ratings per canonical cooking method.
///
/// Each item is a response with its canonical method. Sorted by response
/// count descending, then method ascending.
#[must_use]
pub fn cooking_summary<'a, I>(items: I) -> Vec<CookingMethodSummary>
where
    I: IntoIterator<Item = (&'a Response, &'a str)>,
{
    let mut groups = BTreeMap::<&str, Vec<&Response>>::new();
    for (response, method) in items {
        groups.entry(method).or_default().push(response);
    }

    let mut table = groups
        .into_iter()
        .map(|(method, members)| {
            let mean_taste = |variant: Variant| {
                descriptive::mean(
                    members
                        .iter()
                        .filter_map(|r| r.rating(variant, RatingMetric::Taste)),
                )
            };
            CookingMethodSummary {
                method: method.to_owned(),
                responses: members.len(),
                mean_taste_a: mean_taste(Variant::A),
                mean_taste_b: mean_taste(Variant::B),
            }
        })
        .collect::<Vec<_>>();
    table.sort_by(|a, b| b.responses.cmp(&a.responses));
    table
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn responses(records: Value) -> Vec<Response> {
        let Value::Array(records) = records else {
            panic!("fixture must be an array");
        };
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let Value::Object(record) = record else {
                    panic!("fixture records must be objects");
                };
                Response::from_record(i + 1, record)
            })
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_frequency_counts_once_per_response() {
        let sets = [
            strings(&["smoky", "juicy_chicken"]),
            strings(&["smoky"]),
            strings(&[]),
            strings(&["bland"]),
        ];
        let table = frequency(sets.iter().map(Vec::as_slice));
        let expected = [("smoky", 2), ("bland", 1), ("juicy_chicken", 1)];
        assert_eq!(table.len(), expected.len());
        for (entry, (key, count)) in table.iter().zip(expected) {
            assert_eq!(entry.key, key);
            assert_eq!(entry.count, count);
        }
    }

    #[test]
    fn test_rating_by_tag() {
        let juicy = strings(&["juicy_chicken"]);
        let both = strings(&["juicy_chicken", "smoky"]);
        let none = strings(&[]);
        let table = rating_by_tag([
            (juicy.as_slice(), Some(8.0)),
            (both.as_slice(), Some(6.0)),
            (none.as_slice(), Some(1.0)),
            (both.as_slice(), None),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].tag, "juicy_chicken");
        assert!((table[0].mean - 7.0).abs() < f64::EPSILON);
        assert_eq!(table[0].responses, 2);
        assert_eq!(table[1].tag, "smoky");
        assert!((table[1].mean - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_ties_sort_by_tag() {
        let a = strings(&["zesty", "average"]);
        let table = rating_by_tag([(a.as_slice(), Some(5.0))]);
        assert_eq!(table[0].tag, "average");
        assert_eq!(table[1].tag, "zesty");
    }

    #[test]
    fn test_sentiment_summary() {
        assert_eq!(sentiment_summary(None, None), SentimentLabel::Neutral);
        assert_eq!(sentiment_summary(Some("one"), None), SentimentLabel::Positive);
        assert_eq!(
            sentiment_summary(Some("a b"), Some("c")),
            SentimentLabel::Neutral
        );
        assert_eq!(
            sentiment_summary(Some("a b c"), Some("d")),
            SentimentLabel::Positive
        );
        assert_eq!(
            sentiment_summary(Some("ok"), Some("too dry, too salty")),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_compare_metrics() {
        let rs = responses(json!([
            { "A_taste": 8, "B_taste": 6, "A_appearance": 5 },
            { "A_taste": "6", "B_taste": 9, "B_appearance": 7 },
            { "A_taste": "n/a", "B_taste": null, "A_expectation": 3 },
        ]));
        let table = compare_metrics(&rs);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].metric, RatingMetric::Taste);
        assert!((table[0].mean_a - 7.0).abs() < f64::EPSILON);
        assert!((table[0].mean_b - 7.5).abs() < f64::EPSILON);
        assert!((table[0].difference - 0.5).abs() < f64::EPSILON);
        assert_eq!(table[1].metric, RatingMetric::Appearance);
        assert!((table[1].difference - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cooking_summary() {
        let rs = responses(json!([
            { "A_taste": 8, "B_taste": 6 },
            { "A_taste": 6 },
            { "B_taste": "x" },
            { "A_taste": 4, "B_taste": 10 },
        ]));
        let methods = ["Oven", "Oven", "Grill", "Air Fryer"];
        let table = cooking_summary(rs.iter().zip(methods));
        let order = table.iter().map(|s| s.method.as_str()).collect::<Vec<_>>();
        assert_eq!(order, ["Oven", "Air Fryer", "Grill"]);
        assert_eq!(table[0].responses, 2);
        assert_eq!(table[0].mean_taste_a, Some(7.0));
        assert_eq!(table[0].mean_taste_b, Some(6.0));
        assert_eq!(table[2].mean_taste_a, None);
        assert_eq!(table[2].mean_taste_b, None);
    }

    #[test]
    fn test_sentiment_distribution() {
        let dist = SentimentDistribution::from_labels([
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
        ]);
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.negative, 0);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.total(), 3);
    }
}
