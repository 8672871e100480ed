// ABOUTME: Energy expenditure calculations using the Mifflin-St Jeor equation
// ABOUTME: BMR from a body profile and daily energy needs for five activity levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Energy Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.
//!
//! The coefficients (9.99 / 6.25 / -4.92) are the ones the tracking app ships,
//! not the rounded textbook values; see [`BmrConfig`].

use super::body_composition::compute_age;
use crate::config::{ActivityFactorsConfig, BmrConfig};
use chrono::NaiveDate;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{AnthropometricProfile, EnergyNeeds, EnergyResult, Gender};

/// Calculate Basal Metabolic Rate (unrounded) with the Mifflin-St Jeor equation
///
/// Formula: BMR = `weight_coef` x `weight_kg` + `height_coef` x `height_cm` + `age_coef` x age + `gender_constant`
/// - Men: +5
/// - Women: -161
///
/// Inputs are assumed validated; see [`compute_bmr_and_tdee`] for the checked entry point.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.weight_coef * weight_kg;
    let height_component = config.height_coef * height_cm;
    let age_component = config.age_coef * f64::from(age);

    weight_component + height_component + age_component + config.gender_constant(gender)
}

/// Round to the nearest whole kcal (half away from zero)
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the value is not finite or does not fit in an `i32`
pub fn round_kcal(kcal: f64) -> AppResult<i32> {
    let rounded = kcal.round();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded) {
        return Err(AppError::value_out_of_range(format!(
            "energy value {kcal} kcal is outside the representable range"
        )));
    }
    // in range and integral, so the cast is exact
    Ok(rounded as i32)
}

/// Daily energy needs: `round(bmr x factor)` for every activity level
///
/// # Errors
///
/// Returns `ValueOutOfRange` if a scaled value does not fit in an `i32`
pub fn calculate_energy_needs(bmr: i32, config: &ActivityFactorsConfig) -> AppResult<EnergyNeeds> {
    EnergyNeeds::try_from_fn(|level| round_kcal(f64::from(bmr) * config.factor(level)))
}

/// Calculate rounded BMR and daily energy needs for a profile
///
/// Age is the calendar-year difference between the date of birth and `reference_date`.
///
/// # Errors
///
/// - `MissingRequiredField` if height, weight, date of birth, or gender is absent
/// - `InvalidInput` if height or weight is not a positive finite number
/// - `ValueOutOfRange` if the BMR or an energy need does not fit in an `i32`
pub fn compute_bmr_and_tdee(
    profile: &AnthropometricProfile,
    reference_date: NaiveDate,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> AppResult<EnergyResult> {
    let profile = profile.validate()?;
    let age = compute_age(profile.date_of_birth, reference_date);

    let bmr = round_kcal(calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        age,
        profile.gender,
        bmr_config,
    ))?;

    Ok(EnergyResult {
        bmr,
        energy_needs: calculate_energy_needs(bmr, activity_config)?,
    })
}
