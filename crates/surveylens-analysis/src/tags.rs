//! Keyword-phrase tagging of free-text answers
//!
//! A [`TagRules`] table is an ordered list of tags, each with an ordered list
//! of keyword phrases. A tag applies to a text when any of its phrases occurs
//! as a substring of the [cleaned](surveylens_text::normalizer::clean) text.
//! Phrases are plain substrings, so `filling` also matches inside
//! `not very filling`.
//!
//! The default table is [`TagRules::standard`]. A replacement table can be
//! loaded from JSON:
//!
//! ```json
//! [
//!   { "tag": "smoky", "keywords": ["smoky", "smokey"] },
//!   { "tag": "would_buy", "keywords": ["would buy", "buy again"] }
//! ]
//! ```

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use surveylens_text::normalizer;

static STANDARD_RULES: &[(&str, &[&str])] = &[
    ("smoky", &["smoky"]),
    ("sweet", &["sweet"]),
    ("salty", &["salty", "too salty", "too much salt", "heavily salted"]),
    ("not_enough_salt", &["not enough salt", "needs more salt"]),
    ("bland", &["bland", "no flavour", "no flavor"]),
    (
        "good_flavour",
        &["nice flavour", "good flavour", "tasty", "flavorful", "flavourful", "good flavor"],
    ),
    (
        "needs_more_sauce",
        &["not enough sauce", "needs more sauce", "more sauce", "could use more sauce"],
    ),
    ("too_much_sauce", &["too much sauce"]),
    ("juicy_chicken", &["juicy", "tender chicken", "well cooked"]),
    ("dry_chicken", &["dry chicken", "chicken felt dry", "chicken a bit dry"]),
    ("not_filling", &["not filling", "not very filling", "needs more filling"]),
    ("good_portion", &["good portion", "good size", "filling", "more filling"]),
    ("crispy_pastry", &["crispy"]),
    ("dry_pastry", &["dry pastry", "pastry was a bit dry", "slightly dry"]),
    ("soggy_pastry", &["soggy"]),
    ("greasy", &["greasy"]),
    ("kids_liked", &["kids liked"]),
    ("too_strong_for_kids", &["too smoky for kids", "too strong for kids"]),
    ("kid_friendly", &["kids preferred", "kid friendly"]),
    (
        "would_buy",
        &["would buy", "buy again", "would buy regularly", "would definitely buy"],
    ),
    ("would_not_buy", &["wouldn't buy", "would not buy", "skip"]),
    ("average", &["average", "okay", "fine", "decent", "ok"]),
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TagRulesError {
    #[display("failed to read tag rules from {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to parse tag rules: {source}")]
    Parse { source: serde_json::Error },
    #[display("tag rule #{index} has an empty tag name")]
    EmptyTag { index: usize },
    #[display("tag '{tag}' is defined more than once")]
    DuplicateTag { tag: String },
    #[display("tag '{tag}' has no usable keyword")]
    NoKeywords { tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    pub keywords: Vec<String>,
}

/// Ordered tag rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagRules {
    rules: Vec<TagRule>,
}

impl TagRules {
    /// The built-in rules for the product survey.
    #[must_use]
    pub fn standard() -> Self {
        let rules = STANDARD_RULES
            .iter()
            .map(|(tag, keywords)| TagRule {
                tag: (*tag).to_owned(),
                keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Validates rules and lower-cases their keywords.
    ///
    /// Blank keywords are dropped; a rule left without keywords, an empty tag
    /// name or a repeated tag is an error.
    pub fn new(rules: Vec<TagRule>) -> Result<Self, TagRulesError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let tag = rule.tag.trim().to_owned();
            if tag.is_empty() {
                return Err(TagRulesError::EmptyTag { index });
            }
            if !seen.insert(tag.clone()) {
                return Err(TagRulesError::DuplicateTag { tag });
            }
            let keywords = rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect::<Vec<_>>();
            if keywords.is_empty() {
                return Err(TagRulesError::NoKeywords { tag });
            }
            validated.push(TagRule { tag, keywords });
        }
        Ok(Self { rules: validated })
    }

    pub fn from_json_str(json: &str) -> Result<Self, TagRulesError> {
        let rules = serde_json::from_str::<Vec<TagRule>>(json)
            .map_err(|source| TagRulesError::Parse { source })?;
        Self::new(rules)
    }

    pub fn load(path: &Path) -> Result<Self, TagRulesError> {
        let json = fs::read_to_string(path).map_err(|source| TagRulesError::Read {
            path: path.to_owned(),
            source,
        })?;
        let rules = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), rules = rules.len(), "loaded tag rules");
        Ok(rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tags matching one text, in rule order.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_analysis::tags::TagRules;
    ///
    /// let rules = TagRules::standard();
    /// let tags = rules.extract(Some("The sauce was too salty and dry"));
    /// assert_eq!(tags, ["salty"]);
    /// assert!(rules.extract(None).is_empty());
    /// ```
    #[must_use]
    pub fn extract(&self, text: Option<&str>) -> Vec<String> {
        let cleaned = normalizer::clean(text);
        if cleaned.is_empty() {
            return vec![];
        }
        self.rules
            .iter()
            .filter(|rule| rule.keywords.iter().any(|k| cleaned.contains(k.as_str())))
            .map(|rule| rule.tag.clone())
            .collect()
    }

    /// Union of already extracted tag sets, in rule order. Tags unknown to
    /// these rules are dropped.
    #[must_use]
    pub fn merge<'s, I>(&self, tag_sets: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'s [String]>,
    {
        let found = tag_sets
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<HashSet<_>>();
        self.rules
            .iter()
            .filter(|rule| found.contains(rule.tag.as_str()))
            .map(|rule| rule.tag.clone())
            .collect()
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<String> {
        TagRules::standard().extract(Some(text))
    }

    #[test]
    fn test_salty_without_not_enough_salt() {
        let found = tags("the sauce was too salty and dry");
        assert!(found.contains(&"salty".to_owned()));
        assert!(!found.contains(&"not_enough_salt".to_owned()));
    }

    #[test]
    fn test_phrases_match_across_punctuation() {
        assert_eq!(tags("Kids liked it!! Would buy again."), ["kids_liked", "would_buy"]);
    }

    #[test]
    fn test_substring_matches_overlap() {
        let found = tags("Not very filling, and the chicken felt dry");
        assert_eq!(found, ["dry_chicken", "not_filling", "good_portion"]);
    }

    #[test]
    fn test_apostrophe_phrases_never_match_cleaned_text() {
        assert!(tags("I wouldn't buy this").is_empty());
        assert_eq!(tags("I would not buy this"), ["would_not_buy"]);
    }

    #[test]
    fn test_each_tag_once() {
        assert_eq!(tags("greasy greasy GREASY"), ["greasy"]);
    }

    #[test]
    fn test_union_is_ordered_and_deduplicated() {
        let rules = TagRules::standard();
        let greasy = rules.extract(Some("greasy but crispy"));
        let soggy = rules.extract(Some("Crispy, soggy"));
        let missing = rules.extract(None);
        let union = rules.merge([&greasy[..], &missing[..], &soggy[..]]);
        assert_eq!(union, ["crispy_pastry", "soggy_pastry", "greasy"]);
        assert_eq!(union, rules.merge([&soggy[..], &greasy[..]]));
    }

    #[test]
    fn test_load_from_json() {
        let rules = TagRules::from_json_str(
            r#"[{"tag": "smoky", "keywords": ["Smokey", " "]}, {"tag": "zesty", "keywords": ["zest"]}]"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].keywords, ["smokey"]);
        assert_eq!(rules.extract(Some("Zesty and smokey")), ["smoky", "zesty"]);
    }

    #[test]
    fn test_invalid_rules() {
        assert!(matches!(
            TagRules::from_json_str("{}"),
            Err(TagRulesError::Parse { .. })
        ));
        assert!(matches!(
            TagRules::from_json_str(r#"[{"tag": " ", "keywords": ["x"]}]"#),
            Err(TagRulesError::EmptyTag { index: 0 })
        ));
        assert!(matches!(
            TagRules::from_json_str(
                r#"[{"tag": "a", "keywords": ["x"]}, {"tag": "a", "keywords": ["y"]}]"#
            ),
            Err(TagRulesError::DuplicateTag { .. })
        ));
        assert!(matches!(
            TagRules::from_json_str(r#"[{"tag": "a", "keywords": []}]"#),
            Err(TagRulesError::NoKeywords { .. })
        ));
    }

    #[test]
    fn test_standard_rules_are_valid() {
        let standard = TagRules::standard();
        assert_eq!(TagRules::new(standard.rules().to_vec()).unwrap(), standard);
        assert_eq!(standard.len(), 22);
    }
}
