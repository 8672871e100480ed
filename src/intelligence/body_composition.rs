// ABOUTME: Age and Body Mass Index calculations with category classification
// ABOUTME: Calendar-year age, one-decimal BMI rounding, and first-match-wins BMI categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Body Composition Module
//!
//! Age is computed by calendar-year subtraction against an explicit reference
//! date, so results never depend on the system clock.
//!
//! BMI categories are evaluated on the rounded BMI in table order. The table
//! leaves 22.9-23.0 and 24.9-25.0 uncovered; those values fall through to
//! Obesity level II and downstream thresholds rely on that.

use crate::config::BodyCompositionConfig;
use chrono::{Datelike, NaiveDate};
use fittrack_core::errors::AppResult;
use fittrack_core::models::{ensure_positive, BmiCategory, BmiResult};

/// Age in whole years as `reference_date.year - date_of_birth.year`
///
/// Does not check whether the birthday has already passed in the reference year.
/// A birth date after the reference date yields a negative age.
#[must_use]
pub fn compute_age(date_of_birth: NaiveDate, reference_date: NaiveDate) -> i32 {
    reference_date.year() - date_of_birth.year()
}

/// Unrounded BMI: `weight_kg / (height_cm / 100)²`
///
/// # Errors
///
/// Returns `InvalidInput` if height or weight is not a positive finite number
pub fn raw_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    ensure_positive("heightCm", height_cm)?;
    ensure_positive("weightKg", weight_kg)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Round half away from zero to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Classify a BMI value, first match wins
#[must_use]
pub fn classify_bmi(bmi: f64, config: &BodyCompositionConfig) -> BmiCategory {
    if bmi < config.underweight_below {
        BmiCategory::Underweight
    } else if bmi >= config.underweight_below && bmi < config.normal_below {
        BmiCategory::NormalWeight
    } else if bmi >= config.overweight_from && bmi < config.overweight_below {
        BmiCategory::Overweight
    } else if bmi >= config.obesity_i_from && bmi < config.obesity_i_below {
        BmiCategory::ObesityLevelI
    } else {
        BmiCategory::ObesityLevelII
    }
}

/// Compute BMI rounded to one decimal and its category
///
/// The category is derived from the rounded value, so 22.857 rounds to 22.9
/// and lands in the 22.9-23.0 gap (Obesity level II).
///
/// # Errors
///
/// Returns `InvalidInput` if height or weight is not a positive finite number
pub fn compute_bmi(
    height_cm: f64,
    weight_kg: f64,
    config: &BodyCompositionConfig,
) -> AppResult<BmiResult> {
    let value = round_to_tenth(raw_bmi(height_cm, weight_kg)?);
    Ok(BmiResult {
        value,
        category: classify_bmi(value, config),
    })
}
