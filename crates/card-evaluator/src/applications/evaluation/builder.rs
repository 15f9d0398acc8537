use std::sync::Arc;

use super::super::fraud::FraudCheck;
use super::super::validator::FrequentFlyerValidator;
use super::{CreditCardApplicationEvaluator, EvaluationConfig};

/// Step-wise construction that rejects a missing validator.
pub struct EvaluatorBuilder<V> {
    validator: Option<V>,
    fraud_checker: Option<Arc<dyn FraudCheck>>,
    config: EvaluationConfig,
}

impl<V> Default for EvaluatorBuilder<V> {
    fn default() -> Self {
        Self {
            validator: None,
            fraud_checker: None,
            config: EvaluationConfig::default(),
        }
    }
}

impl<V> EvaluatorBuilder<V>
where
    V: FrequentFlyerValidator,
{
    pub fn validator(mut self, validator: V) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn fraud_checker<F>(mut self, checker: F) -> Self
    where
        F: FraudCheck + 'static,
    {
        self.fraud_checker = Some(Arc::new(checker));
        self
    }

    pub fn shared_fraud_checker(mut self, checker: Option<Arc<dyn FraudCheck>>) -> Self {
        self.fraud_checker = checker;
        self
    }

    pub fn config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<CreditCardApplicationEvaluator<V>, EvaluatorError> {
        let validator = self.validator.ok_or(EvaluatorError::MissingValidator)?;

        if !self.config.thresholds_consistent() {
            return Err(EvaluatorError::InconsistentThresholds {
                low: self.config.low_income_threshold,
                high: self.config.high_income_threshold,
            });
        }

        Ok(CreditCardApplicationEvaluator::with_config(
            validator,
            self.fraud_checker,
            self.config,
        ))
    }
}

/// Construction failures for the evaluator.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvaluatorError {
    #[error("a frequent flyer validator is required")]
    MissingValidator,
    #[error("low income threshold {low} must be below high income threshold {high}")]
    InconsistentThresholds { low: u32, high: u32 },
}
