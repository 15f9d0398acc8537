use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

use card_evaluator::applications::{
    parse_applications, CreditCardApplication, CreditCardApplicationEvaluator, FraudCheck,
    LastNameFraudLookup, LicenseStatus,
};
use card_evaluator::config::AppConfig;
use card_evaluator::error::AppError;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::infra::PrefixFrequentFlyerValidator;
use crate::report::{BatchSummary, EvaluationReport};

/// Collaborator wiring shared by every command.
#[derive(Args, Debug)]
pub(crate) struct CollaboratorArgs {
    /// License key reported by the frequent flyer validator
    #[arg(long, default_value = "OK")]
    pub(crate) license_status: String,
    /// Prefix a frequent flyer number must carry to be valid
    #[arg(long, default_value = "FF")]
    pub(crate) valid_prefix: String,
    /// Disable the fraud check entirely
    #[arg(long)]
    pub(crate) no_fraud_check: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Gross annual income
    #[arg(long)]
    pub(crate) income: u32,
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: u16,
    /// Frequent flyer number to validate
    #[arg(long)]
    pub(crate) frequent_flyer: Option<String>,
    /// Applicant last name
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    #[command(flatten)]
    pub(crate) collaborators: CollaboratorArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with Income, Age, FrequentFlyerNumber and LastName columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) collaborators: CollaboratorArgs,
}

pub(crate) fn run_evaluate(args: EvaluateArgs, config: &AppConfig) -> Result<(), AppError> {
    let evaluator = build_evaluator(&args.collaborators, config)?;
    let application = CreditCardApplication {
        gross_annual_income: args.income,
        age: args.age,
        frequent_flyer_number: args.frequent_flyer,
        last_name: args.last_name,
    };

    let report = evaluate(&evaluator, application);
    write_json(&report)
}

pub(crate) fn run_batch(args: BatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let evaluator = build_evaluator(&args.collaborators, config)?;
    let reader = BufReader::new(File::open(&args.input)?);
    let applications = parse_applications(reader)?;
    info!(
        count = applications.len(),
        input = %args.input.display(),
        "evaluating application batch"
    );

    let reports: Vec<EvaluationReport> = applications
        .into_iter()
        .map(|application| evaluate(&evaluator, application))
        .collect();

    for report in &reports {
        write_json(report)?;
    }

    let summary =
        BatchSummary::from_reports(&reports, evaluator.validator_lookup_count(), Utc::now());
    write_json(&summary)
}

fn build_evaluator(
    args: &CollaboratorArgs,
    config: &AppConfig,
) -> Result<CreditCardApplicationEvaluator<PrefixFrequentFlyerValidator>, AppError> {
    let validator = PrefixFrequentFlyerValidator::new(
        LicenseStatus::new(args.license_status.clone()),
        args.valid_prefix.clone(),
    );

    let fraud_checker: Option<Arc<dyn FraudCheck>> = if args.no_fraud_check {
        info!("fraud check disabled");
        None
    } else {
        let lookup = LastNameFraudLookup::new(config.fraud.flagged_last_name.clone());
        info!(
            flagged_last_name = lookup.flagged_last_name(),
            "fraud check enabled"
        );
        Some(Arc::new(lookup))
    };

    let evaluator = CreditCardApplicationEvaluator::builder()
        .validator(validator)
        .shared_fraud_checker(fraud_checker)
        .config(config.evaluation.clone())
        .build()?;

    Ok(evaluator)
}

fn evaluate(
    evaluator: &CreditCardApplicationEvaluator<PrefixFrequentFlyerValidator>,
    application: CreditCardApplication,
) -> EvaluationReport {
    let outcome = evaluator.evaluate_with_trace(&application);
    info!(
        decision = outcome.decision.label(),
        rule = ?outcome.rule,
        "application evaluated"
    );
    EvaluationReport::new(
        application,
        outcome,
        evaluator.validator_lookup_count(),
        Utc::now(),
    )
}

fn write_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
