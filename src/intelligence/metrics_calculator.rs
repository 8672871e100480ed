// ABOUTME: MetricsCalculator facade binding the body, energy, and strength calculators to a config
// ABOUTME: Produces per-profile reports and lift assessments with structured debug logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use super::body_composition::{compute_age, compute_bmi};
use super::energy_calculator::compute_bmr_and_tdee;
use super::strength_level::{assess_strength, estimate_one_rep_max};
use crate::config::MetricsConfig;
use chrono::NaiveDate;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{
    AnthropometricProfile, BmiResult, EnergyResult, Gender, LiftAttempt, StrengthAssessment,
    StrengthLevel,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything derivable from a body profile on a given date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetricsReport {
    /// Date the age was computed against
    pub reference_date: NaiveDate,
    /// Calendar-year age
    pub age: i32,
    /// Rounded BMI and category
    pub bmi: BmiResult,
    /// BMR and daily energy needs
    pub energy: EnergyResult,
}

/// Strength classification of a performed set plus its estimated one-rep max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftAttemptAssessment {
    /// The set that was classified
    pub attempt: LiftAttempt,
    /// Classification of the performed load
    pub assessment: StrengthAssessment,
    /// Estimated one-rep max in kilograms
    pub estimated_one_rep_max_kg: f64,
}

/// Stateless calculator over a borrowed configuration
///
/// Cheap to construct and `Copy`; share one per request or use [`MetricsCalculator::global`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsCalculator<'a> {
    config: &'a MetricsConfig,
}

impl MetricsCalculator<'static> {
    /// Calculator over the process-wide configuration
    #[must_use]
    pub fn global() -> Self {
        Self::new(MetricsConfig::global())
    }
}

impl Default for MetricsCalculator<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'a> MetricsCalculator<'a> {
    /// Create a calculator over an explicit configuration
    #[must_use]
    pub const fn new(config: &'a MetricsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a MetricsConfig {
        self.config
    }

    /// Calendar-year age on `reference_date`
    #[must_use]
    pub fn compute_age(&self, date_of_birth: NaiveDate, reference_date: NaiveDate) -> i32 {
        compute_age(date_of_birth, reference_date)
    }

    /// BMI rounded to one decimal with its category
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if height or weight is not a positive finite number
    pub fn compute_bmi(&self, height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
        let result = compute_bmi(height_cm, weight_kg, &self.config.body_composition)?;
        debug!(bmi = result.value, category = %result.category, "computed BMI");
        Ok(result)
    }

    /// Rounded BMR and daily energy needs
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if any profile field is absent
    /// - `InvalidInput` if height or weight is not a positive finite number
    pub fn compute_bmr_and_tdee(
        &self,
        profile: &AnthropometricProfile,
        reference_date: NaiveDate,
    ) -> AppResult<EnergyResult> {
        let result = compute_bmr_and_tdee(
            profile,
            reference_date,
            &self.config.bmr,
            &self.config.activity_factors,
        )?;
        debug!(
            bmr = result.bmr,
            sedentary = result.energy_needs.sedentary,
            extra_active = result.energy_needs.extra_active,
            "computed BMR and energy needs"
        );
        Ok(result)
    }

    /// Full strength classification breakdown
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-positive body weight/height or a negative lift
    pub fn assess_strength(
        &self,
        body_weight_kg: f64,
        height_cm: f64,
        lift_weight_kg: f64,
        gender: Gender,
    ) -> AppResult<StrengthAssessment> {
        let assessment = assess_strength(
            body_weight_kg,
            height_cm,
            lift_weight_kg,
            gender,
            &self.config.strength,
        )?;
        debug!(
            difficulty = assessment.difficulty,
            level = %assessment.level,
            "classified lift"
        );
        Ok(assessment)
    }

    /// Strength level only
    ///
    /// # Errors
    ///
    /// Same conditions as [`MetricsCalculator::assess_strength`]
    pub fn compute_strength_level(
        &self,
        body_weight_kg: f64,
        height_cm: f64,
        lift_weight_kg: f64,
        gender: Gender,
    ) -> AppResult<StrengthLevel> {
        self.assess_strength(body_weight_kg, height_cm, lift_weight_kg, gender)
            .map(|assessment| assessment.level)
    }

    /// Age, BMI, and energy needs for a profile in one call
    ///
    /// # Errors
    ///
    /// Same conditions as [`MetricsCalculator::compute_bmr_and_tdee`]
    pub fn body_metrics_report(
        &self,
        profile: &AnthropometricProfile,
        reference_date: NaiveDate,
    ) -> AppResult<BodyMetricsReport> {
        let validated = profile.validate()?;
        Ok(BodyMetricsReport {
            reference_date,
            age: compute_age(validated.date_of_birth, reference_date),
            bmi: self.compute_bmi(validated.height_cm, validated.weight_kg)?,
            energy: self.compute_bmr_and_tdee(profile, reference_date)?,
        })
    }

    /// Classify a performed set for a lifter and estimate its one-rep max
    ///
    /// Only height, weight, and gender are needed from the profile.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if height, weight, or gender is absent
    /// - `InvalidInput` for non-positive body measurements, a negative load, or zero reps
    pub fn assess_lift_attempt(
        &self,
        profile: &AnthropometricProfile,
        attempt: &LiftAttempt,
    ) -> AppResult<LiftAttemptAssessment> {
        let (height_cm, weight_kg, gender) = require_lifter_fields(profile)?;
        let estimated_one_rep_max_kg = estimate_one_rep_max(attempt)?;
        let assessment = self.assess_strength(weight_kg, height_cm, attempt.load_kg, gender)?;

        Ok(LiftAttemptAssessment {
            attempt: *attempt,
            assessment,
            estimated_one_rep_max_kg,
        })
    }
}

fn require_lifter_fields(profile: &AnthropometricProfile) -> AppResult<(f64, f64, Gender)> {
    match (profile.height_cm, profile.weight_kg, profile.gender) {
        (Some(height_cm), Some(weight_kg), Some(gender)) => Ok((height_cm, weight_kg, gender)),
        (height, weight, gender) => {
            let missing: Vec<&str> = [
                ("heightCm", height.is_none()),
                ("weightKg", weight.is_none()),
                ("gender", gender.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            Err(AppError::missing_fields(&missing))
        }
    }
}
