// ABOUTME: Strength-level classification from body weight, height, lift load, and gender
// ABOUTME: Also estimates one-rep max from a performed set using regression formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Strength Level Module
//!
//! `difficulty = (lift / body weight) x bmi_index x gender_factor`, then
//! difficulty is bucketed into Beginner / Intermediate / Advanced / `GymLord`.
//! `Novice` is never produced.
//!
//! # One-rep max references
//!
//! - Epley, B. (1985). *Poundage Chart*. Boyd Epley Workout.
//! - Brzycki, M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue.
//!   *JOPERD*, 64(1), 88-90.
//! - Lander, J. (1985). Maximum based on reps. *NSCA Journal*, 6, 60-61.

use super::body_composition::raw_bmi;
use crate::config::StrengthConfig;
use fittrack_core::constants::one_rep_max::MAX_RELIABLE_REPS;
use fittrack_core::errors::AppResult;
use fittrack_core::models::{
    ensure_non_negative, Gender, LiftAttempt, StrengthAssessment, StrengthLevel,
};

/// BMI-based adjustment index, first match wins
///
/// Exactly-on-threshold values and the normal range get `default_index`.
#[must_use]
pub fn bmi_index(bmi: f64, config: &StrengthConfig) -> f64 {
    if bmi < config.underweight_bmi {
        config.underweight_index
    } else if bmi > config.normal_bmi && bmi < config.overweight_bmi {
        config.transition_index
    } else if bmi > config.overweight_bmi {
        config.overweight_index
    } else {
        config.default_index
    }
}

/// Bucket a difficulty score; boundaries belong to the harder tier
#[must_use]
pub fn classify_difficulty(difficulty: f64, config: &StrengthConfig) -> StrengthLevel {
    if difficulty < config.beginner_below {
        StrengthLevel::Beginner
    } else if difficulty < config.intermediate_below {
        StrengthLevel::Intermediate
    } else if difficulty < config.advanced_below {
        StrengthLevel::Advanced
    } else {
        StrengthLevel::GymLord
    }
}

/// Classify a lift and return every intermediate value
///
/// # Errors
///
/// Returns `InvalidInput` if body weight or height is not positive, or the lift
/// load is negative or not finite
pub fn assess_strength(
    body_weight_kg: f64,
    height_cm: f64,
    lift_weight_kg: f64,
    gender: Gender,
    config: &StrengthConfig,
) -> AppResult<StrengthAssessment> {
    let bmi = raw_bmi(height_cm, body_weight_kg)?;
    ensure_non_negative("liftWeightKg", lift_weight_kg)?;

    let strength_index = lift_weight_kg / body_weight_kg;
    let bmi_index = bmi_index(bmi, config);
    let gender_factor = config.gender_factor(gender);
    let difficulty = strength_index * bmi_index * gender_factor;

    Ok(StrengthAssessment {
        bmi,
        strength_index,
        bmi_index,
        gender_factor,
        difficulty,
        level: classify_difficulty(difficulty, config),
    })
}

/// Classify how hard `lift_weight_kg` is for the given lifter
///
/// # Errors
///
/// Same conditions as [`assess_strength`]
pub fn compute_strength_level(
    body_weight_kg: f64,
    height_cm: f64,
    lift_weight_kg: f64,
    gender: Gender,
    config: &StrengthConfig,
) -> AppResult<StrengthLevel> {
    assess_strength(body_weight_kg, height_cm, lift_weight_kg, gender, config)
        .map(|assessment| assessment.level)
}

/// Estimate one-rep max from a performed set
///
/// A single rep is returned as-is. Otherwise the mean of the Epley, Brzycki and
/// Lander estimates is used with reps capped at 15.
///
/// # Errors
///
/// Returns `InvalidInput` if reps is zero or the load is negative or not finite
pub fn estimate_one_rep_max(attempt: &LiftAttempt) -> AppResult<f64> {
    attempt.validate()?;
    if attempt.reps == 1 {
        return Ok(attempt.load_kg);
    }

    let load = attempt.load_kg;
    let reps = f64::from(attempt.reps.min(MAX_RELIABLE_REPS));

    let epley = load * (1.0 + reps / 30.0);
    let brzycki = load * 36.0 / (37.0 - reps);
    let lander = 100.0 * load / 2.671_23f64.mul_add(-reps, 101.3);

    Ok((epley + brzycki + lander) / 3.0)
}
