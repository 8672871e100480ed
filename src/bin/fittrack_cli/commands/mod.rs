// ABOUTME: Command handlers for fittrack-cli
// ABOUTME: Each handler runs one calculation and returns its pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use chrono::NaiveDate;
use fittrack_metrics::config::MetricsConfig;
use fittrack_metrics::errors::AppResult;
use fittrack_metrics::intelligence::MetricsCalculator;
use fittrack_metrics::models::{AnthropometricProfile, Gender, LiftAttempt};
use serde::Serialize;
use tracing::info;

type Result<T> = AppResult<T>;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// BMI and category
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<String> {
    let result = MetricsCalculator::global().compute_bmi(height_cm, weight_kg)?;
    to_json(&result)
}

/// BMR and daily energy needs
pub fn energy(profile: &AnthropometricProfile, on: NaiveDate) -> Result<String> {
    info!(reference_date = %on, "computing energy needs");
    let result = MetricsCalculator::global().compute_bmr_and_tdee(profile, on)?;
    to_json(&result)
}

/// Strength assessment, or a lift-attempt assessment when reps are given
pub fn strength(
    body_weight_kg: f64,
    height_cm: f64,
    lift_kg: f64,
    gender: Gender,
    reps: Option<u32>,
) -> Result<String> {
    let calculator = MetricsCalculator::global();

    if let Some(reps) = reps {
        let profile = AnthropometricProfile {
            height_cm: Some(height_cm),
            weight_kg: Some(body_weight_kg),
            date_of_birth: None,
            gender: Some(gender),
        };
        let result = calculator.assess_lift_attempt(&profile, &LiftAttempt::new(lift_kg, reps))?;
        return to_json(&result);
    }

    let result = calculator.assess_strength(body_weight_kg, height_cm, lift_kg, gender)?;
    to_json(&result)
}

/// Age, BMI, and energy needs in one document
pub fn report(profile: &AnthropometricProfile, on: NaiveDate) -> Result<String> {
    info!(reference_date = %on, "building body metrics report");
    let result = MetricsCalculator::global().body_metrics_report(profile, on)?;
    to_json(&result)
}

/// Effective configuration after environment overrides
pub fn config() -> Result<String> {
    to_json(MetricsConfig::global())
}
