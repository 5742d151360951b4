use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, extract::ExtractArg};

mod analyze;
mod extract;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze survey responses and print a summary report
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Extract per-response derived features as JSON
    Extract(#[clap(flatten)] ExtractArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Extract(arg) => extract::run(&arg)?,
    }
    Ok(())
}
