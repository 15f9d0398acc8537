use serde::{Deserialize, Serialize};

use super::super::domain::{CreditCardApplication, CreditCardApplicationDecision, ValidationMode};
use super::config::EvaluationConfig;

/// Rule that produced a decision, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    FraudRisk,
    HighIncome,
    ExpiredValidatorLicense,
    ValidatorFailure,
    InvalidFrequentFlyerNumber,
    YoungApplicant,
    LowIncome,
    DefaultReferral,
}

impl DecisionRule {
    pub fn decision(&self) -> CreditCardApplicationDecision {
        match self {
            DecisionRule::FraudRisk => CreditCardApplicationDecision::ReferredToHumanFraudRisk,
            DecisionRule::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            DecisionRule::LowIncome => CreditCardApplicationDecision::AutoDeclined,
            DecisionRule::ExpiredValidatorLicense
            | DecisionRule::ValidatorFailure
            | DecisionRule::InvalidFrequentFlyerNumber
            | DecisionRule::YoungApplicant
            | DecisionRule::DefaultReferral => CreditCardApplicationDecision::ReferredToHuman,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DecisionRule::FraudRisk => "fraud checker flagged the application",
            DecisionRule::HighIncome => "income meets the high income threshold",
            DecisionRule::ExpiredValidatorLicense => "frequent flyer validator license expired",
            DecisionRule::ValidatorFailure => "frequent flyer lookup failed",
            DecisionRule::InvalidFrequentFlyerNumber => "frequent flyer number is invalid",
            DecisionRule::YoungApplicant => "applicant is at or below the auto referral age",
            DecisionRule::LowIncome => "income is below the low income threshold",
            DecisionRule::DefaultReferral => "no automatic decision applies",
        }
    }
}

pub(crate) fn validation_mode_for(age: u16, config: &EvaluationConfig) -> ValidationMode {
    if age >= config.detailed_lookup_min_age {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    }
}

/// Rules applied once the frequent flyer number has been accepted.
pub(crate) fn decide_after_lookup(
    application: &CreditCardApplication,
    config: &EvaluationConfig,
) -> DecisionRule {
    if application.age <= config.auto_referral_max_age {
        return DecisionRule::YoungApplicant;
    }

    if application.gross_annual_income < config.low_income_threshold {
        return DecisionRule::LowIncome;
    }

    DecisionRule::DefaultReferral
}
