//! A/B survey response analysis
//!
//! This crate turns raw survey responses into a [`report::SurveyReport`]:
//!
//! - [`source`]: reading responses from JSON files
//! - [`response`]: the response data model and answer accessors
//! - [`tags`]: keyword tag rules
//! - [`synonym`]: synonym grouping and context sentiment of adjectives
//! - [`cooking`]: cooking method canonicalization
//! - [`derived`]: per-response derived features
//! - [`aggregate`]: frequency, rating and comparison tables
//! - [`pipeline`]: the end-to-end [`pipeline::Analyzer`]
//! - [`export`]: JSON and CSV report sinks

pub mod aggregate;
pub mod cooking;
pub mod derived;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod response;
pub mod source;
pub mod synonym;
pub mod tags;
