//! Survey analysis command
//!
//! Runs the full pipeline over the responses, prints the summary tables and
//! optionally exports the report as JSON and CSV tables.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use surveylens_analysis::{
    export::{CsvTableSink, JsonReportSink, ReportSink},
    pipeline::Analyzer,
};
use surveylens_text::lexicon::Lexicon;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the responses JSON file (default: search the usual locations)
    pub responses: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write one CSV file per report table into this directory
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,

    /// Path to a tag rules JSON file replacing the built-in rules
    #[arg(long)]
    pub tag_rules: Option<PathBuf>,

    /// Do not print the summary tables
    #[arg(long, short)]
    pub quiet: bool,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let responses = util::read_responses(arg.responses.as_deref())?;
    let tag_rules = util::read_tag_rules(arg.tag_rules.as_deref())?;

    eprintln!("Analyzing responses...");
    let report = Analyzer::new(Lexicon::shared(), &tag_rules).analyze(&responses);

    if !arg.quiet {
        table::print_report(&report);
    }

    if let Some(path) = &arg.output {
        JsonReportSink::new(path)
            .export(&report)
            .with_context(|| format!("Failed to export report: {}", path.display()))?;
        eprintln!("Report written to {}", path.display());
    }

    if let Some(dir) = &arg.csv_dir {
        CsvTableSink::new(dir)
            .export(&report)
            .with_context(|| format!("Failed to export CSV tables: {}", dir.display()))?;
        eprintln!("CSV tables written to {}", dir.display());
    }

    Ok(())
}
