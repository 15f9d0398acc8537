use serde::{Deserialize, Serialize};

/// Thresholds driving the automatic decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Incomes at or above this value are accepted without a lookup.
    pub high_income_threshold: u32,
    /// Incomes strictly below this value are declined once the lookup passes.
    pub low_income_threshold: u32,
    /// Applicants at or below this age are always referred.
    pub auto_referral_max_age: u16,
    /// Applicants at or above this age get a detailed lookup.
    pub detailed_lookup_min_age: u16,
}

impl EvaluationConfig {
    /// The decline band must sit strictly below the acceptance band.
    pub fn thresholds_consistent(&self) -> bool {
        self.low_income_threshold < self.high_income_threshold
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            high_income_threshold: 100_000,
            low_income_threshold: 20_000,
            auto_referral_max_age: 20,
            detailed_lookup_min_age: 30,
        }
    }
}
