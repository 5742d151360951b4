//! Report export
//!
//! Sinks receive a finished [`SurveyReport`]. Every file is first written to a
//! `.tmp` sibling and then renamed over the target, so a failed export leaves
//! any previously exported file untouched.

use std::{
    ffi::OsString,
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::{
    aggregate::CountEntry,
    report::{SurveyReport, VariantReport},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    #[display("failed to serialize report")]
    Serialize { source: serde_json::Error },
    #[display("failed to format CSV table")]
    Csv { source: csv::Error },
    #[display("failed to create directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[display("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub trait ReportSink {
    fn export(&self, report: &SurveyReport) -> Result<(), ExportError>;
}

/// Writes the whole report as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonReportSink {
    fn export(&self, report: &SurveyReport) -> Result<(), ExportError> {
        let mut json = serde_json::to_vec_pretty(report)
            .map_err(|source| ExportError::Serialize { source })?;
        json.push(b'\n');
        write_atomically(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "wrote report");
        Ok(())
    }
}

/// Writes each report table as a CSV file into a directory.
#[derive(Debug, Clone)]
pub struct CsvTableSink {
    dir: PathBuf,
}

impl CsvTableSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File names and contents of every table of the report.
    pub fn tables(report: &SurveyReport) -> Result<Vec<(String, Vec<u8>)>, ExportError> {
        let mut tables = vec![];
        for variant in &report.variants {
            let suffix = variant.variant.to_string().to_lowercase();
            tables.extend(variant_tables(variant, &suffix)?);
        }

        let mut sentiment = CsvTable::new(&["variant", "positive", "negative", "neutral"])?;
        for variant in &report.variants {
            let dist = &variant.sentiment;
            sentiment.row([
                variant.variant.to_string(),
                dist.positive.to_string(),
                dist.negative.to_string(),
                dist.neutral.to_string(),
            ])?;
        }
        tables.push(("sentiment_distribution.csv".to_owned(), sentiment.finish()?));

        if !report.comparison.is_empty() {
            let mut comparison =
                CsvTable::new(&["metric", "product_a", "product_b", "difference"])?;
            for metric in &report.comparison {
                comparison.row([
                    metric.metric.to_string(),
                    metric.mean_a.to_string(),
                    metric.mean_b.to_string(),
                    metric.difference.to_string(),
                ])?;
            }
            tables.push(("metrics_comparison.csv".to_owned(), comparison.finish()?));
        }

        if let Some(methods) = &report.cooking_methods {
            let mut cooking =
                CsvTable::new(&["method", "responses", "mean_taste_a", "mean_taste_b"])?;
            for method in methods {
                cooking.row([
                    method.method.clone(),
                    method.responses.to_string(),
                    optional(method.mean_taste_a),
                    optional(method.mean_taste_b),
                ])?;
            }
            tables.push(("cooking_methods.csv".to_owned(), cooking.finish()?));
        }

        let mut responses = CsvTable::new(&[
            "id",
            "submitted_at",
            "cooking_method",
            "A_adjectives",
            "A_positive_adjectives",
            "A_negative_adjectives",
            "A_tags",
            "A_sentiment",
            "A_taste",
            "B_adjectives",
            "B_positive_adjectives",
            "B_negative_adjectives",
            "B_tags",
            "B_sentiment",
            "B_taste",
        ])?;
        for r in &report.responses {
            let mut row = vec![
                r.id.clone(),
                r.submitted_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                r.cooking_method.clone().unwrap_or_default(),
            ];
            for v in [&r.a, &r.b] {
                row.extend([
                    v.all_adjectives.join("; "),
                    v.positive_adjectives.join("; "),
                    v.negative_adjectives.join("; "),
                    v.tags.join("; "),
                    v.sentiment.to_string(),
                    optional(v.taste),
                ]);
            }
            responses.row(row)?;
        }
        tables.push(("responses.csv".to_owned(), responses.finish()?));

        Ok(tables)
    }
}

impl ReportSink for CsvTableSink {
    fn export(&self, report: &SurveyReport) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let tables = Self::tables(report)?;
        for (name, contents) in &tables {
            write_atomically(&self.dir.join(name), contents)?;
        }
        tracing::info!(dir = %self.dir.display(), tables = tables.len(), "wrote CSV tables");
        Ok(())
    }
}

fn variant_tables(
    variant: &VariantReport,
    suffix: &str,
) -> Result<Vec<(String, Vec<u8>)>, ExportError> {
    let counts = |header: &str, entries: &[CountEntry]| -> Result<Vec<u8>, ExportError> {
        let mut table = CsvTable::new(&[header, "count"])?;
        for entry in entries {
            table.row([entry.key.clone(), entry.count.to_string()])?;
        }
        table.finish()
    };

    let mut ratings = CsvTable::new(&["tag", "mean_taste", "responses"])?;
    for rating in &variant.tag_ratings {
        ratings.row([
            rating.tag.clone(),
            rating.mean.to_string(),
            rating.responses.to_string(),
        ])?;
    }

    let mut histogram = CsvTable::new(&["rating_from", "rating_to", "count"])?;
    for bin in &variant.taste_histogram.bins {
        histogram.row([
            bin.range.start.to_string(),
            bin.range.end.to_string(),
            bin.count.to_string(),
        ])?;
    }

    Ok(vec![
        (
            format!("tag_frequency_{suffix}.csv"),
            counts("tag", &variant.tag_frequency)?,
        ),
        (format!("tag_ratings_{suffix}.csv"), ratings.finish()?),
        (
            format!("positive_adjectives_{suffix}.csv"),
            counts("adjective", &variant.positive_adjectives.grouped)?,
        ),
        (
            format!("negative_adjectives_{suffix}.csv"),
            counts("adjective", &variant.negative_adjectives.grouped)?,
        ),
        (format!("taste_histogram_{suffix}.csv"), histogram.finish()?),
    ])
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// In-memory CSV table, one record per row.
struct CsvTable {
    writer: csv::Writer<Vec<u8>>,
}

impl CsvTable {
    fn new(header: &[&str]) -> Result<Self, ExportError> {
        let mut table = Self {
            writer: csv::Writer::from_writer(vec![]),
        };
        table.row(header)?;
        Ok(table)
    }

    fn row<I>(&mut self, fields: I) -> Result<(), ExportError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.writer
            .write_record(fields)
            .map_err(|source| ExportError::Csv { source })
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.writer.into_inner().map_err(|err| ExportError::Csv {
            source: err.into_error().into(),
        })
    }
}

/// Writes `contents` to a `.tmp` sibling of `path`, then renames it into place.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let mut tmp_name = path.file_name().map_or_else(OsString::new, ToOwned::to_owned);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(ExportError::Write {
            path: path.to_owned(),
            source,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use surveylens_text::lexicon::Lexicon;

    use super::*;
    use crate::{pipeline::Analyzer, tags::TagRules};

    #[test]
    fn test_csv_quoting() {
        let mut table = CsvTable::new(&["a", "b"]).unwrap();
        table.row(["plain", "with, comma"]).unwrap();
        table.row(["say \"hi\"", ""]).unwrap();
        table.row(["two\nlines", "semi; colon"]).unwrap();
        assert_eq!(
            String::from_utf8(table.finish().unwrap()).unwrap(),
            "a,b\nplain,\"with, comma\"\n\"say \"\"hi\"\"\",\n\"two\nlines\",semi; colon\n"
        );
    }

    #[test]
    fn test_tables_are_valid_csv() {
        let rules = TagRules::standard();
        let report = Analyzer::new(Lexicon::shared(), &rules).analyze(&[]);
        let tables = CsvTableSink::tables(&report).unwrap();
        let (_, responses) = tables
            .iter()
            .find(|(name, _)| name == "responses.csv")
            .unwrap();
        let mut reader = csv::Reader::from_reader(responses.as_slice());
        assert_eq!(reader.headers().unwrap().len(), 15);
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn test_atomic_write_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_atomically(&path, b"first").unwrap();
        write_atomically(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("report.json.tmp").exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "previous").unwrap();
        // a directory in place of the temporary file makes the write fail
        fs::create_dir(dir.path().join("report.json.tmp")).unwrap();
        let err = write_atomically(&path, b"next").unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }
}
