use super::common::*;
use crate::applications::domain::{
    CreditCardApplication, CreditCardApplicationDecision, LicenseStatus, ValidationMode,
};
use crate::applications::evaluation::{
    CreditCardApplicationEvaluator, DecisionRule, EvaluationConfig, EvaluatorError,
};
use crate::applications::validator::FrequentFlyerValidator;

#[test]
fn accepts_high_income_applications_without_consulting_validator() {
    let validator =
        RecordingValidator::new(ScriptedCheck::Fail).with_license(LicenseStatus::expired());
    let engine = evaluator(&validator);

    let decision = engine.evaluate(&CreditCardApplication::new(100_000, 19));

    assert_eq!(decision, CreditCardApplicationDecision::AutoAccepted);
    assert_eq!(validator.license_reads(), 0);
    assert_eq!(validator.check_count(), 0);
    assert_eq!(engine.validator_lookup_count(), 0);
}

#[test]
fn refers_young_applications() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);

    let decision = engine.evaluate(&CreditCardApplication::new(0, 19));

    assert_eq!(decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(
        engine.evaluate_with_trace(&CreditCardApplication::new(0, 20)).rule,
        DecisionRule::YoungApplicant
    );
}

#[test]
fn declines_low_income_applications() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);
    let application = CreditCardApplication::new(19_999, 42).with_frequent_flyer_number("x");

    let decision = engine.evaluate(&application);

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(validator.checked_numbers(), vec![Some("x".to_string())]);
}

#[test]
fn refers_mid_range_income_applications() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);

    let outcome = engine.evaluate_with_trace(&CreditCardApplication::new(20_000, 21));

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::DefaultReferral);

    let upper = engine.evaluate_with_trace(&CreditCardApplication::new(99_999, 55));
    assert_eq!(upper.rule, DecisionRule::DefaultReferral);
}

#[test]
fn refers_invalid_frequent_flyer_applications() {
    let validator = RecordingValidator::new(ScriptedCheck::Invalid);
    let engine = evaluator(&validator);

    let outcome = engine.evaluate_with_trace(&CreditCardApplication::new(19_999, 42));

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::InvalidFrequentFlyerNumber);
    assert_eq!(validator.checked_numbers(), vec![None]);
}

#[test]
fn passes_empty_frequent_flyer_number_to_validator_unchanged() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);
    let application = CreditCardApplication::new(30_000, 25).with_frequent_flyer_number("");

    let outcome = engine.evaluate_with_trace(&application);

    assert_eq!(validator.checked_numbers(), vec![Some(String::new())]);
    assert_eq!(outcome.rule, DecisionRule::DefaultReferral);
    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(engine.validator_lookup_count(), 1);
}

#[test]
fn refers_when_validator_license_expired_without_lookup() {
    let validator = RecordingValidator::accepting().with_license(LicenseStatus::expired());
    let engine = evaluator(&validator);

    let outcome = engine.evaluate_with_trace(&CreditCardApplication::new(19_999, 42));

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::ExpiredValidatorLicense);
    assert_eq!(outcome.validation_mode, None);
    assert_eq!(validator.check_count(), 0);
    assert!(validator.modes_set().is_empty());
    assert_eq!(engine.validator_lookup_count(), 0);
}

#[test]
fn license_sentinel_is_case_sensitive() {
    let validator = RecordingValidator::accepting().with_license(LicenseStatus::new("expired"));
    let engine = evaluator(&validator);

    let decision = engine.evaluate(&CreditCardApplication::new(19_999, 42));

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(validator.check_count(), 1);
}

#[test]
fn refers_when_validator_fails() {
    let validator = RecordingValidator::new(ScriptedCheck::Fail);
    let engine = evaluator(&validator);

    let outcome = engine.evaluate_with_trace(&CreditCardApplication::new(19_999, 42));

    assert_eq!(outcome.decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(outcome.rule, DecisionRule::ValidatorFailure);
    assert_eq!(outcome.validation_mode, Some(ValidationMode::Detailed));
    assert_eq!(engine.validator_lookup_count(), 0);
}

#[test]
fn uses_detailed_lookup_for_older_applications() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);

    engine.evaluate(&CreditCardApplication::new(0, 30));

    assert_eq!(validator.validation_mode(), ValidationMode::Detailed);
}

#[test]
fn uses_quick_lookup_for_younger_applications() {
    let validator = RecordingValidator::accepting().with_mode(ValidationMode::Detailed);
    let engine = evaluator(&validator);

    let outcome = engine.evaluate_with_trace(&CreditCardApplication::new(0, 29));

    assert_eq!(validator.validation_mode(), ValidationMode::Quick);
    assert_eq!(outcome.validation_mode, Some(ValidationMode::Quick));
    assert_eq!(validator.modes_set(), vec![ValidationMode::Quick]);
}

#[test]
fn counts_each_completed_lookup_in_order() {
    let validator = RecordingValidator::accepting();
    let engine = evaluator(&validator);

    for number in ["a", "b", "c"] {
        let application =
            CreditCardApplication::new(25_000, 25).with_frequent_flyer_number(number);
        engine.evaluate(&application);
    }

    assert_eq!(engine.validator_lookup_count(), 3);
    assert_eq!(
        validator.checked_numbers(),
        vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string())
        ]
    );
}

#[test]
fn does_not_count_checks_without_completed_lookup() {
    let validator = RecordingValidator::new(ScriptedCheck::ValidWithoutLookup);
    let engine = evaluator(&validator);

    let decision = engine.evaluate(&CreditCardApplication::new(19_999, 42));

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(validator.check_count(), 1);
    assert_eq!(engine.validator_lookup_count(), 0);
}

#[test]
fn builder_rejects_missing_validator() {
    let result = CreditCardApplicationEvaluator::<RecordingValidator>::builder().build();

    assert!(matches!(result, Err(EvaluatorError::MissingValidator)));
}

#[test]
fn builder_rejects_inverted_thresholds() {
    let config = EvaluationConfig {
        low_income_threshold: 150_000,
        ..EvaluationConfig::default()
    };

    let result = CreditCardApplicationEvaluator::builder()
        .validator(RecordingValidator::accepting())
        .config(config)
        .build();

    match result {
        Err(EvaluatorError::InconsistentThresholds { low, high }) => {
            assert_eq!(low, 150_000);
            assert_eq!(high, 100_000);
        }
        Err(other) => panic!("expected inconsistent thresholds, got {other:?}"),
        Ok(_) => panic!("expected inconsistent thresholds, got an evaluator"),
    }
}

#[test]
fn builder_rejects_equal_thresholds() {
    let config = EvaluationConfig {
        low_income_threshold: 100_000,
        ..EvaluationConfig::default()
    };

    let result = CreditCardApplicationEvaluator::builder()
        .validator(RecordingValidator::accepting())
        .config(config)
        .build();

    match result {
        Err(err @ EvaluatorError::InconsistentThresholds { .. }) => {
            assert_eq!(
                err,
                EvaluatorError::InconsistentThresholds {
                    low: 100_000,
                    high: 100_000
                }
            );
            assert_eq!(
                err.to_string(),
                "low income threshold 100000 must be below high income threshold 100000"
            );
        }
        Err(other) => panic!("expected inconsistent thresholds, got {other:?}"),
        Ok(_) => panic!("expected equal thresholds to be rejected"),
    }
}

#[test]
fn builder_accepts_adjacent_thresholds() {
    let config = EvaluationConfig {
        low_income_threshold: 99_999,
        ..EvaluationConfig::default()
    };

    let result = CreditCardApplicationEvaluator::builder()
        .validator(RecordingValidator::accepting())
        .config(config)
        .build();

    assert!(result.is_ok());
}

#[test]
fn custom_thresholds_drive_decisions() {
    let validator = RecordingValidator::accepting();
    let engine = CreditCardApplicationEvaluator::builder()
        .validator(validator.clone())
        .config(EvaluationConfig {
            high_income_threshold: 50_000,
            low_income_threshold: 10_000,
            auto_referral_max_age: 17,
            detailed_lookup_min_age: 40,
        })
        .build()
        .expect("evaluator builds");

    assert_eq!(
        engine.evaluate(&CreditCardApplication::new(50_000, 18)),
        CreditCardApplicationDecision::AutoAccepted
    );
    assert_eq!(
        engine.evaluate(&CreditCardApplication::new(9_999, 18)),
        CreditCardApplicationDecision::AutoDeclined
    );
    assert_eq!(validator.modes_set(), vec![ValidationMode::Quick]);
}
