use crate::commands::{run_batch, run_evaluate, BatchArgs, EvaluateArgs};
use card_evaluator::config::AppConfig;
use card_evaluator::error::AppError;
use card_evaluator::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "card-evaluator",
    about = "Evaluate credit card applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application and print the decision report
    Evaluate(EvaluateArgs),
    /// Evaluate every row of a CSV export with a shared evaluator
    Batch(BatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, &config),
        Command::Batch(args) => run_batch(args, &config),
    }
}
