use serde::{Deserialize, Serialize};

use super::domain::CreditCardApplication;

/// Last name flagged by the default fraud policy.
pub const DEFAULT_FLAGGED_LAST_NAME: &str = "Smith";

/// Risk classification strategy consulted before any other rule.
pub trait FraudCheck: Send + Sync {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool;
}

impl<F> FraudCheck for F
where
    F: Fn(&CreditCardApplication) -> bool + Send + Sync,
{
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        self(application)
    }
}

/// Default policy: flags applicants whose last name matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastNameFraudLookup {
    flagged_last_name: String,
}

impl LastNameFraudLookup {
    pub fn new(flagged_last_name: impl Into<String>) -> Self {
        Self {
            flagged_last_name: flagged_last_name.into(),
        }
    }

    pub fn flagged_last_name(&self) -> &str {
        &self.flagged_last_name
    }
}

impl Default for LastNameFraudLookup {
    fn default() -> Self {
        Self::new(DEFAULT_FLAGGED_LAST_NAME)
    }
}

impl FraudCheck for LastNameFraudLookup {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        application.last_name.as_deref() == Some(self.flagged_last_name.as_str())
    }
}
