//! End-to-end report pipeline

use surveylens_stats::{descriptive::DescriptiveStats, histogram::Histogram};
use surveylens_text::lexicon::Lexicon;

use crate::{
    aggregate::{self, SentimentDistribution},
    cooking::UNKNOWN_METHOD,
    derived::{FeatureExtractor, ResponseFeatures},
    report::{AdjectiveTable, KeyFindings, SurveyReport, VariantReport},
    response::{Response, Variant},
    synonym::SynonymGrouper,
    tags::TagRules,
};

/// Runs the full analysis over a batch of responses.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use surveylens_analysis::{pipeline::Analyzer, response::Response, tags::TagRules};
/// use surveylens_text::lexicon::Lexicon;
///
/// let serde_json::Value::Object(record) = json!({
///     "A_likes": "Juicy and smoky",
///     "A_taste": 8,
///     "B_dislikes": "Soggy pastry",
///     "B_taste": 5,
/// }) else { unreachable!() };
/// let responses = vec![Response::from_record(1, record)];
///
/// let rules = TagRules::standard();
/// let report = Analyzer::new(Lexicon::shared(), &rules).analyze(&responses);
/// assert_eq!(report.total_responses, 1);
/// assert_eq!(report.key_findings.winner, Some(surveylens_analysis::response::Variant::A));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    features: FeatureExtractor<'a>,
    grouper: &'a SynonymGrouper,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, tag_rules: &'a TagRules) -> Self {
        Self {
            features: FeatureExtractor::new(lexicon, tag_rules),
            grouper: SynonymGrouper::standard(),
        }
    }

    /// Extracts the derived features of every response, in input order.
    #[must_use]
    pub fn extract(&self, responses: &[Response]) -> Vec<ResponseFeatures> {
        tracing::info!(responses = responses.len(), "extracting features");
        responses
            .iter()
            .map(|response| {
                let features = self.features.extract(response);
                tracing::trace!(id = %features.id, "extracted");
                features
            })
            .collect()
    }

    #[must_use]
    pub fn analyze(&self, responses: &[Response]) -> SurveyReport {
        let features = self.extract(responses);

        tracing::info!("aggregating");
        let variants = Variant::ALL
            .into_iter()
            .map(|variant| self.variant_report(variant, &features))
            .collect::<Vec<_>>();

        let comparison = aggregate::compare_metrics(responses);
        tracing::debug!(metrics = comparison.len(), "compared rating metrics");

        let cooking_methods = features
            .iter()
            .any(|f| f.cooking_method.is_some())
            .then(|| {
                aggregate::cooking_summary(responses.iter().zip(&features).map(|(r, f)| {
                    let method = f.cooking_method.as_deref().unwrap_or(UNKNOWN_METHOD);
                    (r, method)
                }))
            });

        let key_findings = key_findings(&variants);

        SurveyReport {
            total_responses: responses.len(),
            variants,
            comparison,
            cooking_methods,
            key_findings,
            responses: features,
        }
    }

    fn variant_report(&self, variant: Variant, features: &[ResponseFeatures]) -> VariantReport {
        let rows = features.iter().map(|f| f.variant(variant));

        let likes_adjective_total = rows.clone().map(|v| v.likes_adjectives.len()).sum();
        let dislikes_adjective_total = rows.clone().map(|v| v.dislikes_adjectives.len()).sum();

        let positive_adjectives = self.adjective_table(
            rows.clone()
                .flat_map(|v| &v.positive_adjectives)
                .map(String::as_str),
        );
        let negative_adjectives = self.adjective_table(
            rows.clone()
                .flat_map(|v| &v.negative_adjectives)
                .map(String::as_str),
        );

        let tag_frequency = aggregate::frequency(rows.clone().map(|v| v.tags.as_slice()));
        let tag_ratings =
            aggregate::rating_by_tag(rows.clone().map(|v| (v.tags.as_slice(), v.taste)));
        let sentiment = SentimentDistribution::from_labels(rows.clone().map(|v| v.sentiment));

        let tastes = rows.filter_map(|v| v.taste).collect::<Vec<_>>();
        let taste = DescriptiveStats::new(tastes.iter().copied());
        let taste_histogram = Histogram::unit_bins(tastes);

        tracing::debug!(
            %variant,
            tags = tag_frequency.len(),
            rated = taste.as_ref().map_or(0, |t| t.count),
            "variant aggregated"
        );

        VariantReport {
            variant,
            likes_adjective_total,
            dislikes_adjective_total,
            positive_adjectives,
            negative_adjectives,
            tag_frequency,
            tag_ratings,
            sentiment,
            taste,
            taste_histogram,
        }
    }

    fn adjective_table<'s, I>(&self, adjectives: I) -> AdjectiveTable
    where
        I: IntoIterator<Item = &'s str>,
    {
        let counts = self.grouper.count(adjectives);
        AdjectiveTable {
            grouped: aggregate::most_common(counts.grouped),
            raw: aggregate::most_common(counts.raw),
        }
    }
}

fn key_findings(variants: &[VariantReport]) -> KeyFindings {
    let find = |variant: Variant| variants.iter().find(|v| v.variant == variant);
    let mean_taste = |variant| find(variant).and_then(|v| v.taste.as_ref()).map(|t| t.mean);
    let top_tag = |variant| find(variant).and_then(|v| v.tag_frequency.first().cloned());

    let mut findings = KeyFindings::new(mean_taste(Variant::A), mean_taste(Variant::B));
    findings.top_tag_a = top_tag(Variant::A);
    findings.top_tag_b = top_tag(Variant::B);
    findings
}
