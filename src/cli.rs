use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "packfit",
    version,
    about = "Packaging design career fit assessment CLI"
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
    /// Score an answer set and render the fit report
    Score(ScoreCommand),
    /// Validate an answer set against the question catalog
    Check(CheckCommand),
    /// Print the question catalog
    Questions(QuestionsCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answer set file (.json or .toml)
    pub answers: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Answer set file (.json or .toml)
    pub answers: PathBuf,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
