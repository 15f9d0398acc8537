use std::sync::{Mutex, PoisonError};

use card_evaluator::applications::{
    FrequentFlyerValidator, LicenseStatus, ValidationMode, ValidatorError, ValidityLookup,
};

/// In-process validator for hosts without a frequent flyer service.
///
/// Quick lookups accept any number carrying the prefix. Detailed lookups also
/// require the remainder to be a non-empty run of ASCII digits. An absent or
/// blank number is invalid and does not count as a lookup.
#[derive(Debug)]
pub(crate) struct PrefixFrequentFlyerValidator {
    license: LicenseStatus,
    prefix: String,
    mode: Mutex<ValidationMode>,
}

impl PrefixFrequentFlyerValidator {
    pub(crate) fn new(license: LicenseStatus, prefix: impl Into<String>) -> Self {
        Self {
            license,
            prefix: prefix.into(),
            mode: Mutex::new(ValidationMode::Quick),
        }
    }
}

impl FrequentFlyerValidator for PrefixFrequentFlyerValidator {
    fn license_status(&self) -> LicenseStatus {
        self.license.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner) = mode;
    }

    fn check(&self, frequent_flyer_number: Option<&str>) -> Result<ValidityLookup, ValidatorError> {
        let number = match frequent_flyer_number.map(str::trim) {
            Some(number) if !number.is_empty() => number,
            _ => {
                return Ok(ValidityLookup {
                    is_valid: false,
                    lookup_completed: false,
                })
            }
        };

        if self.license.is_expired() {
            return Err(ValidatorError::Unavailable("license expired".to_string()));
        }

        let is_valid = match number.strip_prefix(self.prefix.as_str()) {
            None => false,
            Some(rest) => match self.validation_mode() {
                ValidationMode::Quick => true,
                ValidationMode::Detailed => {
                    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
                }
            },
        };

        Ok(ValidityLookup {
            is_valid,
            lookup_completed: true,
        })
    }
}
