mod cli;
mod config;
mod engine;
mod error;
mod intake;
mod report;
mod types;

use crate::engine::matcher::MatchMode;
use crate::engine::taxonomy::Taxonomy;
use crate::error::ScopeError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_PROPOSAL: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ScopeError> {
    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd)?;
            if loaded.is_none() {
                info!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
            }

            let mode = match cmd.matching {
                Some(cli::Matching::Substring) => MatchMode::Substring,
                Some(cli::Matching::WordBoundary) => MatchMode::WordBoundary,
                None => loaded
                    .as_ref()
                    .map(|cfg| cfg.match_mode())
                    .unwrap_or_default(),
            };
            let format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => match loaded.as_ref().and_then(|cfg| cfg.report_format()) {
                    Some(format) => report::OutputFormat::parse(format)?,
                    None => report::OutputFormat::Md,
                },
            };

            let proposal = intake::load_proposal(&cmd.proposal)?;
            let result = engine::evaluate(&proposal, mode);
            info!(
                difficulty = result.difficulty_score,
                feasibility = result.feasibility_score,
                "evaluation complete"
            );

            println!("{}", report::render(&result, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            intake::load_proposal(&cmd.proposal)?;
            println!("proposal ok");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Taxonomy => {
            let taxonomy = Taxonomy::builtin();
            println!("taxonomy version {}", taxonomy.version);
            for domain in taxonomy.domains {
                println!("- {}: {}", domain.name, domain.phrases.join(", "));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScopeError::InvalidProposal(_) => exit_code::INVALID_PROPOSAL,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
