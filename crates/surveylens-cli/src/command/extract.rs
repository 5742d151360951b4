//! Per-response feature extraction command

use std::path::PathBuf;

use clap::Args;
use surveylens_analysis::pipeline::Analyzer;
use surveylens_text::lexicon::Lexicon;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct ExtractArg {
    /// Path to the responses JSON file (default: search the usual locations)
    pub responses: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Path to a tag rules JSON file replacing the built-in rules
    #[arg(long)]
    pub tag_rules: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExtractArg) -> anyhow::Result<()> {
    let responses = util::read_responses(arg.responses.as_deref())?;
    let tag_rules = util::read_tag_rules(arg.tag_rules.as_deref())?;

    eprintln!("Extracting features...");
    let features = Analyzer::new(Lexicon::shared(), &tag_rules).extract(&responses);

    util::write_json(&features, arg.output.as_deref())?;
    if let Some(path) = &arg.output {
        eprintln!("Features written to {}", path.display());
    }
    Ok(())
}
