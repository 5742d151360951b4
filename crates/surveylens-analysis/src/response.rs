//! Survey response data model
//!
//! A survey submission compares two product variants, `A` and `B`. Answers are
//! keyed by question identifier; per-variant questions carry the variant as a
//! prefix:
//!
//! ```text
//! Response
//! ├─ id, submitted_at
//! └─ answers: question id → AnswerValue
//!     ├─ A_likes, A_dislikes, A_Feedback          (free text)
//!     ├─ A_taste, A_appearance, A_selfRelevance,
//!     │  A_expectation                            (ratings)
//!     ├─ B_...                                    (same for variant B)
//!     └─ cookingMethod, fullName, age, ...        (shared questions)
//! ```
//!
//! # Ingestion
//!
//! Records arrive as flat JSON objects. Every value is normalized once, at the
//! boundary, into an [`AnswerValue`]; downstream code reads answers through the
//! typed accessors [`Response::text`] and [`Response::rating`] and never sees raw
//! JSON:
//!
//! ```json
//! {
//!   "id": 17,
//!   "timestamp": "2025-03-02T18:21:09Z",
//!   "A_likes": "Smoky and juicy",
//!   "A_taste": 8,
//!   "B_taste": "6",
//!   "cookingMethod": "air fryer"
//! }
//! ```
//!
//! The optional `id` and `timestamp` (or `submitted_at`) keys identify the
//! submission; a record without an id is identified by its 1-based position.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shared question holding the free-text cooking method.
pub const COOKING_METHOD: &str = "cookingMethod";

const TIMESTAMP_KEYS: &[&str] = &["timestamp", "submitted_at"];

/// One of the two compared product variants.
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
)]
pub enum Variant {
    A,
    B,
}

impl Variant {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Question identifier of a per-variant question (`A` + `taste` → `A_taste`).
    #[must_use]
    pub fn question(self, suffix: &str) -> String {
        format!("{self}_{suffix}")
    }
}

/// Free-text questions asked for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Likes,
    Dislikes,
    Feedback,
}

impl TextField {
    pub const ALL: [Self; 3] = [Self::Likes, Self::Dislikes, Self::Feedback];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Dislikes => "dislikes",
            Self::Feedback => "Feedback",
        }
    }
}

/// Numeric rating questions asked for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum RatingMetric {
    #[display("Taste")]
    Taste,
    #[display("Appearance")]
    Appearance,
    #[display("Self Relevance")]
    SelfRelevance,
    #[display("Met Expectations")]
    Expectation,
}

impl RatingMetric {
    pub const ALL: [Self; 4] = [
        Self::Taste,
        Self::Appearance,
        Self::SelfRelevance,
        Self::Expectation,
    ];

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Taste => "taste",
            Self::Appearance => "appearance",
            Self::SelfRelevance => "selfRelevance",
            Self::Expectation => "expectation",
        }
    }
}

/// A single answer, normalized from its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Missing,
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<AnswerValue>),
}

impl AnswerValue {
    /// Converts a JSON value. Objects are kept as their JSON text.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Flag(b),
            Value::Number(n) => n.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            Value::Object(_) => Self::Text(value.to_string()),
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// String form of the answer; `None` only for a missing answer.
    ///
    /// Integral numbers print without a fractional part and list items are
    /// joined with `", "`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Flag(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Text(s) => Some(s.clone()),
            Self::List(items) => {
                let mut out = String::new();
                for text in items.iter().filter_map(Self::as_text) {
                    if !out.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str(&text);
                }
                Some(out)
            }
        }
    }

    /// Numeric value of the answer, parsing text when needed.
    ///
    /// Flags, lists, and unparseable or non-finite text are not numbers.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Missing | Self::Flag(_) | Self::List(_) => None,
        }
    }
}

static MISSING: AnswerValue = AnswerValue::Missing;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub id: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub answers: BTreeMap<String, AnswerValue>,
}

impl Response {
    /// Builds a response from a flat JSON record at the given 1-based position.
    #[must_use]
    pub fn from_record(position: usize, mut record: Map<String, Value>) -> Self {
        let id = record
            .remove("id")
            .and_then(|value| match value {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| position.to_string());

        let submitted_at = TIMESTAMP_KEYS
            .iter()
            .find_map(|key| record.remove(*key))
            .and_then(|value| {
                let parsed = parse_timestamp(&value);
                if parsed.is_none() && !value.is_null() {
                    tracing::debug!(%id, %value, "unrecognized timestamp");
                }
                parsed
            });

        let answers = record
            .into_iter()
            .map(|(question, value)| (question, AnswerValue::from_json(value)))
            .collect();

        Self {
            id,
            submitted_at,
            answers,
        }
    }

    /// Whether the record carries the question at all, even with a null answer.
    #[must_use]
    pub fn has_question(&self, question: &str) -> bool {
        self.answers.contains_key(question)
    }

    #[must_use]
    pub fn answer(&self, question: &str) -> &AnswerValue {
        self.answers.get(question).unwrap_or(&MISSING)
    }

    #[must_use]
    pub fn text(&self, question: &str) -> Option<String> {
        self.answer(question).as_text()
    }

    #[must_use]
    pub fn variant_text(&self, variant: Variant, field: TextField) -> Option<String> {
        self.text(&variant.question(field.suffix()))
    }

    /// Numeric rating of a variant, `None` when absent or not a number.
    #[must_use]
    pub fn rating(&self, variant: Variant, metric: RatingMetric) -> Option<f64> {
        self.answer(&variant.question(metric.suffix())).as_number()
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
                        .iter()
                        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                        .map(|naive| naive.and_utc())
                })
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

#[expect(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract().abs() < f64::EPSILON && n.abs() < 1e15 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}
