use std::sync::{Arc, Mutex};

use crate::applications::domain::{LicenseStatus, ValidationMode};
use crate::applications::evaluation::CreditCardApplicationEvaluator;
use crate::applications::fraud::{FraudCheck, LastNameFraudLookup};
use crate::applications::validator::{FrequentFlyerValidator, ValidatorError, ValidityLookup};

/// Scripted response for the next validity checks.
#[derive(Debug, Clone, Copy)]
pub(super) enum ScriptedCheck {
    Valid,
    Invalid,
    Fail,
    /// Valid, but the validator reports that no lookup was performed.
    ValidWithoutLookup,
}

#[derive(Debug)]
struct RecordingState {
    license: LicenseStatus,
    mode: ValidationMode,
    response: ScriptedCheck,
    checked_numbers: Vec<Option<String>>,
    modes_set: Vec<ValidationMode>,
    license_reads: usize,
}

/// Validator double that records every interaction.
#[derive(Debug, Clone)]
pub(super) struct RecordingValidator {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingValidator {
    pub(super) fn new(response: ScriptedCheck) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordingState {
                license: LicenseStatus::new("OK"),
                mode: ValidationMode::Quick,
                response,
                checked_numbers: Vec::new(),
                modes_set: Vec::new(),
                license_reads: 0,
            })),
        }
    }

    pub(super) fn accepting() -> Self {
        Self::new(ScriptedCheck::Valid)
    }

    pub(super) fn with_license(self, license: LicenseStatus) -> Self {
        self.state.lock().expect("validator mutex poisoned").license = license;
        self
    }

    pub(super) fn with_mode(self, mode: ValidationMode) -> Self {
        self.state.lock().expect("validator mutex poisoned").mode = mode;
        self
    }

    pub(super) fn checked_numbers(&self) -> Vec<Option<String>> {
        self.state
            .lock()
            .expect("validator mutex poisoned")
            .checked_numbers
            .clone()
    }

    pub(super) fn check_count(&self) -> usize {
        self.checked_numbers().len()
    }

    pub(super) fn modes_set(&self) -> Vec<ValidationMode> {
        self.state
            .lock()
            .expect("validator mutex poisoned")
            .modes_set
            .clone()
    }

    pub(super) fn license_reads(&self) -> usize {
        self.state
            .lock()
            .expect("validator mutex poisoned")
            .license_reads
    }
}

impl FrequentFlyerValidator for RecordingValidator {
    fn license_status(&self) -> LicenseStatus {
        let mut state = self.state.lock().expect("validator mutex poisoned");
        state.license_reads += 1;
        state.license.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        self.state.lock().expect("validator mutex poisoned").mode
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        let mut state = self.state.lock().expect("validator mutex poisoned");
        state.mode = mode;
        state.modes_set.push(mode);
    }

    fn check(&self, frequent_flyer_number: Option<&str>) -> Result<ValidityLookup, ValidatorError> {
        let mut state = self.state.lock().expect("validator mutex poisoned");
        state
            .checked_numbers
            .push(frequent_flyer_number.map(str::to_string));

        match state.response {
            ScriptedCheck::Valid => Ok(ValidityLookup::valid()),
            ScriptedCheck::Invalid => Ok(ValidityLookup::invalid()),
            ScriptedCheck::Fail => Err(ValidatorError::Unavailable("scripted outage".to_string())),
            ScriptedCheck::ValidWithoutLookup => Ok(ValidityLookup {
                is_valid: true,
                lookup_completed: false,
            }),
        }
    }
}

pub(super) fn evaluator(
    validator: &RecordingValidator,
) -> CreditCardApplicationEvaluator<RecordingValidator> {
    CreditCardApplicationEvaluator::new(validator.clone(), None)
}

pub(super) fn evaluator_with_fraud_lookup(
    validator: &RecordingValidator,
) -> CreditCardApplicationEvaluator<RecordingValidator> {
    let checker: Arc<dyn FraudCheck> = Arc::new(LastNameFraudLookup::default());
    CreditCardApplicationEvaluator::new(validator.clone(), Some(checker))
}
