use serde::{Deserialize, Serialize};

/// License key reported by a validator whose service can no longer be used.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

/// Applicant supplied data considered by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    pub gross_annual_income: u32,
    pub age: u16,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreditCardApplication {
    pub fn new(gross_annual_income: u32, age: u16) -> Self {
        Self {
            gross_annual_income,
            age,
            ..Self::default()
        }
    }

    pub fn with_frequent_flyer_number(mut self, number: impl Into<String>) -> Self {
        self.frequent_flyer_number = Some(number.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Adjudication outcome for a credit card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl CreditCardApplicationDecision {
    pub const ALL: [CreditCardApplicationDecision; 4] = [
        CreditCardApplicationDecision::AutoAccepted,
        CreditCardApplicationDecision::AutoDeclined,
        CreditCardApplicationDecision::ReferredToHuman,
        CreditCardApplicationDecision::ReferredToHumanFraudRisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "auto_accepted",
            CreditCardApplicationDecision::AutoDeclined => "auto_declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred_to_human",
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred_to_human_fraud_risk"
            }
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "application auto-accepted",
            CreditCardApplicationDecision::AutoDeclined => "application auto-declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred for manual review",
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred for manual review: fraud risk"
            }
        }
    }

    pub fn requires_human(&self) -> bool {
        matches!(
            self,
            CreditCardApplicationDecision::ReferredToHuman
                | CreditCardApplicationDecision::ReferredToHumanFraudRisk
        )
    }
}

/// Depth of lookup requested from the frequent flyer validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

/// Licensing state reported by the validator service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseStatus(pub String);

impl LicenseStatus {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expired() -> Self {
        Self(EXPIRED_LICENSE_KEY.to_string())
    }

    pub fn is_expired(&self) -> bool {
        self.0 == EXPIRED_LICENSE_KEY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
