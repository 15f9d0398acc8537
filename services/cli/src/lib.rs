mod cli;
mod commands;
mod infra;
mod report;

use card_evaluator::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
