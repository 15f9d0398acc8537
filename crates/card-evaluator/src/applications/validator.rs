use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{LicenseStatus, ValidationMode};

/// Outbound boundary to the frequent flyer number service.
///
/// Implementations are supplied by the host. The evaluator sets the
/// validation mode before each lookup, so implementations that store it
/// need interior mutability.
pub trait FrequentFlyerValidator: Send + Sync {
    fn license_status(&self) -> LicenseStatus;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&self, mode: ValidationMode);
    fn check(&self, frequent_flyer_number: Option<&str>) -> Result<ValidityLookup, ValidatorError>;
}

/// Result of a single validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityLookup {
    pub is_valid: bool,
    /// Set when the validator performed a lookup against its backing service.
    pub lookup_completed: bool,
}

impl ValidityLookup {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            lookup_completed: true,
        }
    }

    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            lookup_completed: true,
        }
    }
}

/// Validator failure. The evaluator never surfaces these to its caller.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
    #[error("validator rejected lookup: {0}")]
    Rejected(String),
}

impl<V> FrequentFlyerValidator for Arc<V>
where
    V: FrequentFlyerValidator + ?Sized,
{
    fn license_status(&self) -> LicenseStatus {
        (**self).license_status()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }

    fn check(&self, frequent_flyer_number: Option<&str>) -> Result<ValidityLookup, ValidatorError> {
        (**self).check(frequent_flyer_number)
    }
}
