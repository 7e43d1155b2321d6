use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scopecheck",
    version,
    about = "Academic project proposal scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a proposal and print the evaluation
    Evaluate(EvaluateCommand),
    /// Validate a proposal without scoring it
    Check(CheckCommand),
    /// Print the keyword taxonomy used for scoring
    Taxonomy,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Matching {
    Substring,
    WordBoundary,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Proposal file (.json or .toml), or `-` for JSON on stdin
    pub proposal: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, value_enum)]
    pub matching: Option<Matching>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub proposal: PathBuf,
}
