// ABOUTME: Tests for strength-level classification and one-rep max estimation
// ABOUTME: Covers reference lifts, BMI adjustment bands, gender factor, tiers, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_metrics::{
    config::StrengthConfig,
    errors::ErrorCode,
    intelligence::{
        assess_strength, bmi_index, classify_difficulty, compute_strength_level,
        estimate_one_rep_max,
    },
    models::{Gender, LiftAttempt, StrengthLevel},
};

mod common;

// ============================================================================
// REFERENCE LIFTS
// ============================================================================

#[test]
fn test_male_reference_lift_is_advanced() {
    common::init_test_logging();
    let config = StrengthConfig::default();

    let level = compute_strength_level(70.0, 175.0, 56.0, Gender::Male, &config).unwrap();

    // SI = 0.8, bmi index 1, gender factor 1: exactly on the Advanced boundary
    assert_eq!(level, StrengthLevel::Advanced);
}

#[test]
fn test_female_reference_lift_is_intermediate() {
    let config = StrengthConfig::default();

    let level = compute_strength_level(70.0, 175.0, 56.0, Gender::Female, &config).unwrap();

    assert_eq!(level, StrengthLevel::Intermediate);
}

#[test]
fn test_reference_assessment_breakdown() {
    let config = StrengthConfig::default();

    let assessment = assess_strength(70.0, 175.0, 56.0, Gender::Male, &config).unwrap();

    assert!((assessment.bmi - 22.857).abs() < 0.001);
    assert!((assessment.strength_index - 0.8).abs() < 1e-12);
    assert!((assessment.bmi_index - 1.0).abs() < f64::EPSILON);
    assert!((assessment.gender_factor - 1.0).abs() < f64::EPSILON);
    assert!((assessment.difficulty - 0.8).abs() < 1e-12);
}

#[test]
fn test_female_difficulty_is_three_quarters_of_male() {
    let config = StrengthConfig::default();
    for (body_weight, height, lift) in [(70.0, 175.0, 56.0), (92.0, 181.0, 140.0), (48.0, 158.0, 30.0)] {
        let male = assess_strength(body_weight, height, lift, Gender::Male, &config).unwrap();
        let female = assess_strength(body_weight, height, lift, Gender::Female, &config).unwrap();
        assert!(
            (female.difficulty - male.difficulty * 0.75).abs() < 1e-12,
            "female difficulty should be 0.75x male for {body_weight}/{height}/{lift}"
        );
    }
}

// ============================================================================
// BMI ADJUSTMENT BANDS
// ============================================================================

#[test]
fn test_bmi_index_bands() {
    let config = StrengthConfig::default();

    assert!((bmi_index(17.0, &config) - 1.0).abs() < f64::EPSILON);
    assert!((bmi_index(21.0, &config) - 1.0).abs() < f64::EPSILON);
    assert!((bmi_index(24.0, &config) - 0.95).abs() < f64::EPSILON);
    assert!((bmi_index(26.0, &config) - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_index_boundaries_use_default() {
    let config = StrengthConfig::default();

    assert!((bmi_index(18.5, &config) - 1.0).abs() < f64::EPSILON);
    assert!((bmi_index(22.9, &config) - 1.0).abs() < f64::EPSILON);
    assert!((bmi_index(25.0, &config) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_transition_band_reduces_difficulty() {
    let config = StrengthConfig::default();

    // 100 cm height makes BMI equal to body weight
    let assessment = assess_strength(24.0, 100.0, 24.0, Gender::Male, &config).unwrap();

    assert!((assessment.bmi_index - 0.95).abs() < f64::EPSILON);
    assert!((assessment.difficulty - 0.95).abs() < 1e-12);
    assert_eq!(assessment.level, StrengthLevel::Advanced);
}

#[test]
fn test_overweight_band_uses_unrounded_bmi() {
    let config = StrengthConfig::default();

    // BMI 25.04 would round to 25.0 but the raw value is above the threshold
    let assessment = assess_strength(25.04, 100.0, 10.0, Gender::Male, &config).unwrap();

    assert!((assessment.bmi_index - 0.85).abs() < f64::EPSILON);
}

// ============================================================================
// DIFFICULTY TIERS
// ============================================================================

#[test]
fn test_difficulty_tiers_lower_bound_inclusive() {
    let config = StrengthConfig::default();

    assert_eq!(classify_difficulty(0.0, &config), StrengthLevel::Beginner);
    assert_eq!(classify_difficulty(0.39, &config), StrengthLevel::Beginner);
    assert_eq!(classify_difficulty(0.4, &config), StrengthLevel::Intermediate);
    assert_eq!(classify_difficulty(0.79, &config), StrengthLevel::Intermediate);
    assert_eq!(classify_difficulty(0.8, &config), StrengthLevel::Advanced);
    assert_eq!(classify_difficulty(1.19, &config), StrengthLevel::Advanced);
    assert_eq!(classify_difficulty(1.2, &config), StrengthLevel::GymLord);
    assert_eq!(classify_difficulty(3.0, &config), StrengthLevel::GymLord);
}

#[test]
fn test_novice_is_never_produced() {
    let config = StrengthConfig::default();

    for body_weight in [45.0, 60.0, 75.0, 90.0, 120.0] {
        for height in [150.0, 170.0, 190.0] {
            for lift in [0.0, 20.0, 40.0, 60.0, 100.0, 180.0, 250.0] {
                for gender in [Gender::Male, Gender::Female] {
                    let level =
                        compute_strength_level(body_weight, height, lift, gender, &config).unwrap();
                    assert_ne!(level, StrengthLevel::Novice);
                    assert!(StrengthLevel::REACHABLE.contains(&level));
                }
            }
        }
    }
}

#[test]
fn test_zero_lift_is_beginner() {
    let config = StrengthConfig::default();
    let level = compute_strength_level(80.0, 180.0, 0.0, Gender::Male, &config).unwrap();
    assert_eq!(level, StrengthLevel::Beginner);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_zero_body_weight_is_rejected() {
    let config = StrengthConfig::default();
    let err = compute_strength_level(0.0, 175.0, 56.0, Gender::Male, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_height_is_rejected() {
    let config = StrengthConfig::default();
    let err = compute_strength_level(70.0, 0.0, 56.0, Gender::Male, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_lift_is_rejected() {
    let config = StrengthConfig::default();
    let err = compute_strength_level(70.0, 175.0, -5.0, Gender::Female, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("liftWeightKg"));
}

// ============================================================================
// ONE-REP MAX ESTIMATION
// ============================================================================

#[test]
fn test_single_rep_returns_load() {
    let estimate = estimate_one_rep_max(&LiftAttempt::new(120.0, 1)).unwrap();
    assert!((estimate - 120.0).abs() < f64::EPSILON);
}

#[test]
fn test_ten_rep_set_estimate() {
    let estimate = estimate_one_rep_max(&LiftAttempt::new(100.0, 10)).unwrap();

    // Epley 133.3, Brzycki 133.3, Lander 134.1
    assert!(
        (estimate - 133.6).abs() < 0.1,
        "estimate should be about 133.6, got {estimate}"
    );
}

#[test]
fn test_estimate_grows_with_reps() {
    let five = estimate_one_rep_max(&LiftAttempt::new(100.0, 5)).unwrap();
    let eight = estimate_one_rep_max(&LiftAttempt::new(100.0, 8)).unwrap();
    assert!(five > 100.0);
    assert!(eight > five);
}

#[test]
fn test_reps_are_capped() {
    let fifteen = estimate_one_rep_max(&LiftAttempt::new(60.0, 15)).unwrap();
    let thirty = estimate_one_rep_max(&LiftAttempt::new(60.0, 30)).unwrap();
    assert!((fifteen - thirty).abs() < f64::EPSILON);
}

#[test]
fn test_zero_reps_is_rejected() {
    let err = estimate_one_rep_max(&LiftAttempt::new(100.0, 0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_load_is_rejected() {
    let err = estimate_one_rep_max(&LiftAttempt::new(-10.0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
