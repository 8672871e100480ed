// ABOUTME: Tests for the MetricsCalculator facade: reports, lift attempts, and global config
// ABOUTME: Verifies the facade agrees with the underlying calculators and validates inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_metrics::{
    config::{MetricsConfig, StrengthConfig},
    errors::ErrorCode,
    intelligence::MetricsCalculator,
    models::{AnthropometricProfile, BmiCategory, Gender, LiftAttempt, StrengthLevel},
};

mod common;

use common::{date, reference_date, reference_profile};

#[test]
fn test_body_metrics_report_for_reference_profile() {
    common::init_test_logging();
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    let report = calculator
        .body_metrics_report(&reference_profile(Gender::Male), reference_date())
        .unwrap();

    assert_eq!(report.reference_date, reference_date());
    assert_eq!(report.age, 35);
    assert!((report.bmi.value - 22.9).abs() < f64::EPSILON);
    assert_eq!(report.bmi.category, BmiCategory::ObesityLevelII);
    assert_eq!(report.energy.bmr, 1626);
    assert_eq!(report.energy.energy_needs.sedentary, 1951);
}

#[test]
fn test_report_serializes_camel_case() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    let report = calculator
        .body_metrics_report(&reference_profile(Gender::Female), reference_date())
        .unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["referenceDate"], "2025-06-01");
    assert_eq!(json["age"], 35);
    assert_eq!(json["bmi"]["category"], "Obesity level II");
    assert_eq!(json["energy"]["bmr"], 1460);
}

#[test]
fn test_report_requires_complete_profile() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);
    let profile = AnthropometricProfile {
        date_of_birth: None,
        ..reference_profile(Gender::Male)
    };

    let err = calculator
        .body_metrics_report(&profile, reference_date())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("dateOfBirth"));
}

#[test]
fn test_facade_age_and_bmi() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    assert_eq!(calculator.compute_age(date(2000, 5, 5), date(2024, 1, 1)), 24);
    let bmi = calculator.compute_bmi(100.0, 24.0).unwrap();
    assert_eq!(bmi.category, BmiCategory::Overweight);
}

#[test]
fn test_facade_strength_matches_assessment() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    let level = calculator
        .compute_strength_level(70.0, 175.0, 56.0, Gender::Female)
        .unwrap();
    let assessment = calculator
        .assess_strength(70.0, 175.0, 56.0, Gender::Female)
        .unwrap();

    assert_eq!(level, StrengthLevel::Intermediate);
    assert_eq!(assessment.level, level);
}

#[test]
fn test_facade_uses_supplied_config() {
    let config = MetricsConfig {
        strength: StrengthConfig {
            female_factor: 1.0,
            ..StrengthConfig::default()
        },
        ..MetricsConfig::default()
    };
    let calculator = MetricsCalculator::new(&config);

    let level = calculator
        .compute_strength_level(70.0, 175.0, 56.0, Gender::Female)
        .unwrap();

    assert_eq!(level, StrengthLevel::Advanced);
}

#[test]
fn test_lift_attempt_assessment() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);
    let profile = AnthropometricProfile {
        date_of_birth: None,
        ..reference_profile(Gender::Male)
    };

    let result = calculator
        .assess_lift_attempt(&profile, &LiftAttempt::new(56.0, 5))
        .unwrap();

    assert_eq!(result.attempt, LiftAttempt::new(56.0, 5));
    assert_eq!(result.assessment.level, StrengthLevel::Advanced);
    assert!(result.estimated_one_rep_max_kg > 56.0);
}

#[test]
fn test_lift_attempt_lists_missing_lifter_fields() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);
    let profile = AnthropometricProfile {
        weight_kg: Some(70.0),
        ..AnthropometricProfile::default()
    };

    let err = calculator
        .assess_lift_attempt(&profile, &LiftAttempt::new(56.0, 5))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(
        err.details["missing_fields"],
        serde_json::json!(["heightCm", "gender"])
    );
}

#[test]
fn test_lift_attempt_rejects_zero_reps() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    let err = calculator
        .assess_lift_attempt(&reference_profile(Gender::Male), &LiftAttempt::new(56.0, 0))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_global_calculator_uses_global_config() {
    let calculator = MetricsCalculator::global();
    assert!(std::ptr::eq(calculator.config(), MetricsConfig::global()));
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    calculator
                        .compute_bmr_and_tdee(&reference_profile(Gender::Male), reference_date())
                        .unwrap()
                        .bmr
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1626);
        }
    });
}
