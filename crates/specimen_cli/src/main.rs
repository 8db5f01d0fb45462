//! Specimen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid input document
//! - 3: Value error (malformed color or date)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};
use specimen_types::TypesError;
use specimen_utils::UtilsError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_DOCUMENT: u8 = 2;
    pub const VALUE_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(build_filter(cli.verbose))
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Describe(args) => commands::describe::execute(args),
        Commands::Select(args) => commands::select::execute(args),
        Commands::Checkbox(args) => commands::checkbox::execute(args),
        Commands::Color(args) => commands::color::execute(args),
        Commands::Datetime(args) => commands::datetime::execute(args),
        Commands::Wysiwyg(args) => commands::wysiwyg::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "specimen=debug" } else { "specimen=info" };

    [level, "warn"]
        .into_iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive)
        })
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if cause.downcast_ref::<UtilsError>().is_some() {
            return ExitCodes::VALUE_ERROR;
        }
        if cause.downcast_ref::<TypesError>().is_some() {
            return ExitCodes::INVALID_DOCUMENT;
        }
    }
    ExitCodes::GENERAL_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_categorize_error() {
        let value: anyhow::Error = UtilsError::MissingColor.into();
        assert_eq!(categorize_error(&value), ExitCodes::VALUE_ERROR);

        let document = Err::<(), _>(TypesError::UnsupportedFormat("spec.xml".to_string()))
            .context("Failed to load spec")
            .unwrap_err();
        assert_eq!(categorize_error(&document), ExitCodes::INVALID_DOCUMENT);

        let other = anyhow::anyhow!("disk on fire");
        assert_eq!(categorize_error(&other), ExitCodes::GENERAL_ERROR);
    }
}
