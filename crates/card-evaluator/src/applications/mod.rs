//! Credit card application intake and decisioning.
//!
//! The evaluator composes two collaborators supplied by the host: a
//! frequent flyer number validator (required) and a fraud checker
//! (optional). Everything else is a pure function of the application.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod intake;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    CreditCardApplication, CreditCardApplicationDecision, LicenseStatus, ValidationMode,
};
pub use evaluation::{
    CreditCardApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluationOutcome,
    EvaluatorBuilder, EvaluatorError,
};
pub use fraud::{FraudCheck, LastNameFraudLookup};
pub use intake::parse_applications;
pub use validator::{FrequentFlyerValidator, ValidatorError, ValidityLookup};
