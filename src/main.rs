mod catalog;
mod cli;
mod error;
mod input;
mod report;
mod score;
mod types;

use crate::error::PackfitError;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("packfit={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_answers_checked(path: &Path) -> Result<types::answers::AnswerSet, PackfitError> {
    if !path.exists() {
        return Err(PackfitError::AnswersNotFound(path.display().to_string()));
    }
    input::load_answers(path)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, PackfitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let answers = load_answers_checked(&cmd.answers)?;
            if answers.is_empty() {
                tracing::info!("empty answer set, per-formula defaults apply");
            }
            let violations = catalog::violations(&answers);
            for violation in &violations {
                eprintln!(
                    "warning: {}: {}",
                    violation.question, violation.detail
                );
            }

            let fit_report = score::assess(&answers);
            let rendered = report::render(&fit_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if violations.iter().any(|violation| violation.blocking) {
                Ok(exit_code::BLOCKING)
            } else if violations.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Check(cmd) => {
            let answers = load_answers_checked(&cmd.answers)?;
            let violations = catalog::violations(&answers);

            if violations.is_empty() {
                println!("check: no violations");
                return Ok(exit_code::SUCCESS);
            }

            for violation in &violations {
                let level = if violation.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, violation.question, violation.detail);
            }

            if violations.iter().any(|violation| violation.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Questions(cmd) => {
            let rendered = report::render_catalog(output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
