//! Canonical grouping of adjective variants
//!
//! Reports count adjectives by canonical group rather than surface form, so
//! that `flavorful`, `delicious` and `yummy` all land in the `tasty` bucket.
//! Adjectives outside the table form a group of their own.
//!
//! This module also splits an answer's adjectives into positive and negative
//! pools according to the question they were written under (see
//! [`classify_by_context`]).

use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use surveylens_text::sentiment::{SentimentClassifier, SentimentLabel};

/// Canonical group keys and their surface-form variants, in definition order.
///
/// A variant listed under several groups belongs to the last one.
pub static SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    (
        "tasty",
        &[
            "tasty", "flavorful", "flavourful", "delicious", "yummy", "scrumptious", "delectable",
            "appetizing",
        ],
    ),
    ("bland", &["bland", "tasteless", "flavorless", "flavourless", "boring"]),
    ("dry", &["dry", "dried", "dehydrated"]),
    ("juicy", &["juicy", "moist", "succulent", "tender"]),
    ("crispy", &["crispy", "crunchy", "crisp"]),
    ("soggy", &["soggy", "soft", "mushy", "watery"]),
    ("greasy", &["greasy", "oily", "fatty"]),
    ("sweet", &["sweet", "sugary", "sugared"]),
    ("salty", &["salty", "salted", "over-salted"]),
    ("spicy", &["spicy", "hot", "pungent"]),
    ("tender", &["tender", "soft", "delicate"]),
    ("tough", &["tough", "hard", "chewy", "rubbery"]),
    ("fresh", &["fresh", "crisp", "new"]),
    ("stale", &["stale", "old", "rancid"]),
    ("burnt", &["burnt", "burned", "charred", "overcooked"]),
    ("good", &["good", "nice", "fine", "decent"]),
    ("great", &["great", "excellent", "amazing", "wonderful"]),
    ("bad", &["bad", "terrible", "awful", "poor"]),
];

static STANDARD: LazyLock<SynonymGrouper> =
    LazyLock::new(|| SynonymGrouper::new(SYNONYM_GROUPS.iter().copied()));

#[derive(Debug, Clone)]
pub struct SynonymGrouper {
    lookup: HashMap<String, String>,
}

/// Raw and grouped occurrence counts of an adjective pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveCounts {
    /// Occurrences per lower-cased adjective.
    pub raw: BTreeMap<String, usize>,
    /// Occurrences per group key; groups with no occurrence are absent.
    pub grouped: BTreeMap<String, usize>,
}

impl SynonymGrouper {
    /// Builds a grouper from `(group key, variants)` pairs. Later pairs
    /// override earlier ones for a shared variant.
    #[must_use]
    pub fn new<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut lookup = HashMap::new();
        for (key, variants) in groups {
            for variant in variants {
                lookup.insert(variant.to_lowercase(), key.to_owned());
            }
        }
        Self { lookup }
    }

    /// The grouper over [`SYNONYM_GROUPS`].
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Group key of one adjective. Unlisted adjectives are their own key.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_analysis::synonym::SynonymGrouper;
    ///
    /// let grouper = SynonymGrouper::standard();
    /// assert_eq!(grouper.group_key("Flavorful"), "tasty");
    /// assert_eq!(grouper.group_key("soft"), "tender");
    /// assert_eq!(grouper.group_key("purple"), "purple");
    /// ```
    #[must_use]
    pub fn group_key(&self, adjective: &str) -> String {
        let adjective = adjective.trim().to_lowercase();
        match self.lookup.get(&adjective) {
            Some(key) => key.clone(),
            None => adjective,
        }
    }

    /// Groups adjectives by key. Members keep input order and multiplicity;
    /// blank adjectives are skipped.
    #[must_use]
    pub fn group<'a, I>(&self, adjectives: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut groups = BTreeMap::<_, Vec<_>>::new();
        for adjective in adjectives {
            let member = adjective.trim().to_lowercase();
            if member.is_empty() {
                continue;
            }
            groups
                .entry(self.group_key(&member))
                .or_default()
                .push(member);
        }
        groups
    }

    /// Counts a pool of adjectives, both as written and by group.
    ///
    /// A group's count is the sum of the raw counts of its distinct members.
    #[must_use]
    pub fn count<'a, I>(&self, adjectives: I) -> AdjectiveCounts
    where
        I: IntoIterator<Item = &'a str>,
    {
        let adjectives = adjectives.into_iter().collect::<Vec<_>>();
        let mut raw = BTreeMap::new();
        for adjective in &adjectives {
            let word = adjective.trim().to_lowercase();
            if !word.is_empty() {
                *raw.entry(word).or_insert(0) += 1;
            }
        }

        let grouped = self
            .group(adjectives)
            .into_iter()
            .filter_map(|(key, mut members)| {
                members.sort_unstable();
                members.dedup();
                let count = members
                    .iter()
                    .map(|m| raw.get(m).copied().unwrap_or(0))
                    .sum::<usize>();
                (count > 0).then_some((key, count))
            })
            .collect();

        AdjectiveCounts { raw, grouped }
    }
}

/// The question an adjective was written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentContext {
    Likes,
    Dislikes,
}

/// Adjectives split by polarity.
///
/// `neutral` is never filled by [`classify_by_context`]: the context decides
/// where neutral adjectives go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSentiment {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

/// Splits adjectives into positive and negative pools.
///
/// Polar adjectives go to their own pool. Neutral adjectives follow the
/// context: positive under likes, negative under dislikes. Blank adjectives
/// are skipped; the others are kept trimmed, with their original case.
///
/// # Examples
///
/// ```
/// use surveylens_analysis::synonym::{SentimentContext, classify_by_context};
/// use surveylens_text::{lexicon::Lexicon, sentiment::SentimentClassifier};
///
/// let classifier = SentimentClassifier::new(Lexicon::shared());
/// let split = classify_by_context(&classifier, ["juicy", "bland", "purple"], SentimentContext::Likes);
/// assert_eq!(split.positive, ["juicy", "purple"]);
/// assert_eq!(split.negative, ["bland"]);
/// assert!(split.neutral.is_empty());
/// ```
#[must_use]
pub fn classify_by_context<'a, I>(
    classifier: &SentimentClassifier<'_>,
    adjectives: I,
    context: SentimentContext,
) -> ContextSentiment
where
    I: IntoIterator<Item = &'a str>,
{
    let mut split = ContextSentiment::default();
    for adjective in adjectives {
        let adjective = adjective.trim();
        if adjective.is_empty() {
            continue;
        }
        let pool = match (classifier.classify(adjective), context) {
            (SentimentLabel::Positive, _) | (SentimentLabel::Neutral, SentimentContext::Likes) => {
                &mut split.positive
            }
            (SentimentLabel::Negative, _)
            | (SentimentLabel::Neutral, SentimentContext::Dislikes) => &mut split.negative,
        };
        pool.push(adjective.to_owned());
    }
    split
}

#[cfg(test)]
mod tests {
    use surveylens_text::lexicon::Lexicon;

    use super::*;

    fn classifier() -> SentimentClassifier<'static> {
        SentimentClassifier::new(Lexicon::shared())
    }

    #[test]
    fn test_group_collects_variants() {
        let groups = SynonymGrouper::standard().group(["tasty", "flavorful", "delicious"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["tasty"], ["tasty", "flavorful", "delicious"]);
    }

    #[test]
    fn test_group_is_total() {
        let groups = SynonymGrouper::standard().group(["Purple", " ", "", "crisp"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["purple"], ["purple"]);
        // "crisp" is listed under both "crispy" and "fresh"
        assert_eq!(groups["fresh"], ["crisp"]);
    }

    #[test]
    fn test_later_groups_win() {
        let grouper = SynonymGrouper::new([("first", &["x", "y"][..]), ("second", &["y"][..])]);
        assert_eq!(grouper.group_key("x"), "first");
        assert_eq!(grouper.group_key("y"), "second");
        let standard = SynonymGrouper::standard();
        assert_eq!(standard.group_key("tender"), "tender");
        assert_eq!(standard.group_key("moist"), "juicy");
    }

    #[test]
    fn test_count() {
        let counts =
            SynonymGrouper::standard().count(["Tasty", "tasty", "yummy", "soggy", "", "zingy"]);
        assert_eq!(counts.raw["tasty"], 2);
        assert_eq!(counts.raw["yummy"], 1);
        assert_eq!(counts.raw.len(), 4);
        assert_eq!(counts.grouped["tasty"], 3);
        assert_eq!(counts.grouped["soggy"], 1);
        assert_eq!(counts.grouped["zingy"], 1);
        assert_eq!(counts.grouped.len(), 3);
    }

    #[test]
    fn test_count_empty() {
        let counts = SynonymGrouper::standard().count([]);
        assert_eq!(counts, AdjectiveCounts::default());
    }

    #[test]
    fn test_bland_is_negative_in_both_contexts() {
        for context in [SentimentContext::Likes, SentimentContext::Dislikes] {
            let split = classify_by_context(&classifier(), ["bland"], context);
            assert_eq!(split.negative, ["bland"]);
            assert!(split.positive.is_empty());
            assert!(split.neutral.is_empty());
        }
    }

    #[test]
    fn test_negative_words_stay_negative_under_likes() {
        let split = classify_by_context(&classifier(), ["dull", "dreadful"], SentimentContext::Likes);
        assert_eq!(split.negative, ["dull", "dreadful"]);
        assert!(split.positive.is_empty());
    }

    #[test]
    fn test_neutral_follows_context() {
        let split = classify_by_context(&classifier(), ["purple"], SentimentContext::Dislikes);
        assert_eq!(split.negative, ["purple"]);
        let split = classify_by_context(&classifier(), ["purple"], SentimentContext::Likes);
        assert_eq!(split.positive, ["purple"]);
    }

    #[test]
    fn test_positive_stays_positive_under_dislikes() {
        let split = classify_by_context(&classifier(), [" juicy ", ""], SentimentContext::Dislikes);
        assert_eq!(split.positive, ["juicy"]);
        assert!(split.negative.is_empty());
    }
}
