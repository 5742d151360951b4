//! Canonicalization of raw answer text
//!
//! Two flavours of normalization are used across the pipeline:
//!
//! - [`clean`] destroys case and punctuation so that keyword phrases can be
//!   matched as plain substrings.
//! - [`normalize`] only trims and drops placeholder answers, keeping the case
//!   and punctuation cues the part-of-speech tagger relies on.
//!
//! Both functions are total: every input, including a missing one, maps to a
//! (possibly empty) string.
//!
//! # Examples
//!
//! ```
//! use surveylens_text::normalizer;
//!
//! assert_eq!(normalizer::clean(Some("Great!! Crispy...")), "great crispy");
//! assert_eq!(normalizer::normalize(Some("  Juicy  ")), "Juicy");
//! assert_eq!(normalizer::normalize(Some("N/A")), "");
//! ```

/// Answers that carry no content even though a respondent typed something.
const PLACEHOLDER_ANSWERS: &[&str] = &["none", "null", "n/a", "na"];

/// Lower-cases text and reduces it to alphanumeric words separated by single spaces.
///
/// Every character that is neither alphanumeric nor whitespace is replaced by
/// a space before whitespace runs are collapsed, so `"salty,dry"` becomes
/// `"salty dry"` rather than `"saltydry"`.
#[must_use]
pub fn clean(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Trims surrounding whitespace and maps placeholder answers to the empty string.
///
/// Case and punctuation are preserved.
#[must_use]
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || is_placeholder(trimmed) {
        return String::new();
    }
    trimmed.to_owned()
}

fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_ANSWERS
        .iter()
        .any(|placeholder| text.eq_ignore_ascii_case(placeholder))
}
