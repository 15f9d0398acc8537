mod builder;
mod config;
mod policy;

pub use builder::{EvaluatorBuilder, EvaluatorError};
pub use config::EvaluationConfig;
pub use policy::DecisionRule;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{CreditCardApplication, CreditCardApplicationDecision, ValidationMode};
use super::fraud::FraudCheck;
use super::validator::FrequentFlyerValidator;
use policy::{decide_after_lookup, validation_mode_for};

/// Applies the decision rules to an application using the injected collaborators.
pub struct CreditCardApplicationEvaluator<V> {
    validator: V,
    fraud_checker: Option<Arc<dyn FraudCheck>>,
    config: EvaluationConfig,
    validator_lookups: AtomicU64,
}

impl<V> CreditCardApplicationEvaluator<V>
where
    V: FrequentFlyerValidator,
{
    pub fn new(validator: V, fraud_checker: Option<Arc<dyn FraudCheck>>) -> Self {
        Self::with_config(validator, fraud_checker, EvaluationConfig::default())
    }

    pub fn with_config(
        validator: V,
        fraud_checker: Option<Arc<dyn FraudCheck>>,
        config: EvaluationConfig,
    ) -> Self {
        Self {
            validator,
            fraud_checker,
            config,
            validator_lookups: AtomicU64::new(0),
        }
    }

    pub fn builder() -> EvaluatorBuilder<V> {
        EvaluatorBuilder::default()
    }

    pub fn has_fraud_checker(&self) -> bool {
        self.fraud_checker.is_some()
    }

    /// Number of lookups the validator reported as completed.
    pub fn validator_lookup_count(&self) -> u64 {
        self.validator_lookups.load(Ordering::Relaxed)
    }

    pub fn evaluate(&self, application: &CreditCardApplication) -> CreditCardApplicationDecision {
        self.evaluate_with_trace(application).decision
    }

    /// Evaluate and report which rule fired. First matching rule wins.
    pub fn evaluate_with_trace(&self, application: &CreditCardApplication) -> EvaluationOutcome {
        if let Some(checker) = &self.fraud_checker {
            if checker.is_fraud_risk(application) {
                return self.conclude(DecisionRule::FraudRisk, None);
            }
        }

        if application.gross_annual_income >= self.config.high_income_threshold {
            return self.conclude(DecisionRule::HighIncome, None);
        }

        let license = self.validator.license_status();
        if license.is_expired() {
            warn!(
                license = license.as_str(),
                "frequent flyer validator license expired"
            );
            return self.conclude(DecisionRule::ExpiredValidatorLicense, None);
        }

        let mode = validation_mode_for(application.age, &self.config);
        self.validator.set_validation_mode(mode);

        let lookup = match self
            .validator
            .check(application.frequent_flyer_number.as_deref())
        {
            Ok(lookup) => lookup,
            Err(error) => {
                warn!(%error, "frequent flyer lookup failed");
                return self.conclude(DecisionRule::ValidatorFailure, Some(mode));
            }
        };

        if lookup.lookup_completed {
            self.validator_lookups.fetch_add(1, Ordering::Relaxed);
        }

        if !lookup.is_valid {
            return self.conclude(DecisionRule::InvalidFrequentFlyerNumber, Some(mode));
        }

        let rule = decide_after_lookup(application, &self.config);
        self.conclude(rule, Some(mode))
    }

    fn conclude(&self, rule: DecisionRule, mode: Option<ValidationMode>) -> EvaluationOutcome {
        let decision = rule.decision();
        debug!(
            rule = ?rule,
            decision = decision.label(),
            validation_mode = ?mode,
            "{}",
            rule.description()
        );

        EvaluationOutcome {
            decision,
            rule,
            validation_mode: mode,
        }
    }
}

/// Decision plus the trail needed to audit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: CreditCardApplicationDecision,
    pub rule: DecisionRule,
    /// Mode requested from the validator, when a lookup was attempted.
    pub validation_mode: Option<ValidationMode>,
}
