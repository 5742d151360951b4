//! Response retrieval
//!
//! Analysis reads responses through the [`ResponseSource`] trait. The file
//! sources here read a JSON array of flat response objects.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::response::Response;

/// Paths searched by [`FallbackSource::default`], in order.
pub const DEFAULT_RESPONSE_PATHS: &[&str] = &[
    "responses.json",
    "src/lib/responses.json",
    "../src/lib/responses.json",
    "../../src/lib/responses.json",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RetrievalError {
    #[display("failed to read responses from {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to parse responses from {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("expected a JSON array of responses in {}", path.display())]
    NotAnArray { path: PathBuf },
    #[display("record #{position} in {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf, position: usize },
    #[display("no response file found; searched: {}", display_paths(searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    let mut out = String::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", path.display());
    }
    out
}

pub trait ResponseSource {
    /// Fetches every response of the survey.
    fn fetch(&self) -> Result<Vec<Response>, RetrievalError>;
}

/// Reads responses from one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResponseSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Response>, RetrievalError> {
        let path = &self.path;
        let json = fs::read_to_string(path).map_err(|source| RetrievalError::Read {
            path: path.clone(),
            source,
        })?;
        let document = serde_json::from_str::<Value>(&json).map_err(|source| {
            RetrievalError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        let responses = parse_responses(document, path)?;
        tracing::info!(path = %path.display(), responses = responses.len(), "loaded responses");
        Ok(responses)
    }
}

/// Converts a JSON document into responses, numbering records from 1.
pub fn parse_responses(document: Value, path: &Path) -> Result<Vec<Response>, RetrievalError> {
    let Value::Array(records) = document else {
        return Err(RetrievalError::NotAnArray {
            path: path.to_owned(),
        });
    };
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let position = i + 1;
            match record {
                Value::Object(record) => Ok(Response::from_record(position, record)),
                _ => Err(RetrievalError::NotAnObject {
                    path: path.to_owned(),
                    position,
                }),
            }
        })
        .collect()
}

/// Reads the first existing file among candidate paths.
#[derive(Debug, Clone)]
pub struct FallbackSource {
    candidates: Vec<PathBuf>,
}

impl FallbackSource {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The first candidate that exists.
    #[must_use]
    pub fn resolve(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_file())
    }
}

impl Default for FallbackSource {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_PATHS.iter().copied())
    }
}

impl ResponseSource for FallbackSource {
    fn fetch(&self) -> Result<Vec<Response>, RetrievalError> {
        let Some(path) = self.resolve() else {
            return Err(RetrievalError::NotFound {
                searched: self.candidates.clone(),
            });
        };
        tracing::debug!(path = %path.display(), "using fallback response file");
        JsonFileSource::new(path).fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_responses() {
        let document = serde_json::json!([
            { "id": "r-1", "A_taste": 8 },
            { "A_taste": 6 },
        ]);
        let responses = parse_responses(document, Path::new("mem.json")).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, "r-1");
        assert_eq!(responses[1].id, "2");
    }

    #[test]
    fn test_rejects_malformed_documents() {
        let path = Path::new("mem.json");
        assert!(matches!(
            parse_responses(serde_json::json!({ "A_taste": 8 }), path),
            Err(RetrievalError::NotAnArray { .. })
        ));
        assert!(matches!(
            parse_responses(serde_json::json!([{}, 3]), path),
            Err(RetrievalError::NotAnObject { position: 2, .. })
        ));
    }

    #[test]
    fn test_not_found_lists_searched_paths() {
        let source = FallbackSource::new(["does/not/exist.json", "nor/this.json"]);
        let err = source.fetch().unwrap_err();
        assert_eq!(
            err.to_string(),
            "no response file found; searched: does/not/exist.json, nor/this.json"
        );
    }
}
