use std::collections::BTreeMap;

use card_evaluator::applications::{
    CreditCardApplication, CreditCardApplicationDecision, DecisionRule, EvaluationOutcome,
    ValidationMode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON view of a single evaluation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EvaluationReport {
    pub(crate) application: CreditCardApplication,
    pub(crate) decision: CreditCardApplicationDecision,
    pub(crate) summary: &'static str,
    pub(crate) rule: DecisionRule,
    pub(crate) rule_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) validation_mode: Option<ValidationMode>,
    pub(crate) validator_lookups: u64,
    pub(crate) evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    pub(crate) fn new(
        application: CreditCardApplication,
        outcome: EvaluationOutcome,
        validator_lookups: u64,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application,
            decision: outcome.decision,
            summary: outcome.decision.summary(),
            rule: outcome.rule,
            rule_description: outcome.rule.description(),
            validation_mode: outcome.validation_mode,
            validator_lookups,
            evaluated_at,
        }
    }
}

/// Totals for a batch run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchSummary {
    pub(crate) evaluated: usize,
    pub(crate) decisions: BTreeMap<&'static str, usize>,
    /// Plain and fraud-risk referrals together.
    pub(crate) requires_human: usize,
    pub(crate) validator_lookups: u64,
    pub(crate) completed_at: DateTime<Utc>,
}

impl BatchSummary {
    pub(crate) fn from_reports(
        reports: &[EvaluationReport],
        validator_lookups: u64,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let mut decisions: BTreeMap<&'static str, usize> = CreditCardApplicationDecision::ALL
            .iter()
            .map(|decision| (decision.label(), 0))
            .collect();

        for report in reports {
            *decisions.entry(report.decision.label()).or_default() += 1;
        }

        Self {
            evaluated: reports.len(),
            decisions,
            requires_human: reports
                .iter()
                .filter(|report| report.decision.requires_human())
                .count(),
            validator_lookups,
            completed_at,
        }
    }
}
