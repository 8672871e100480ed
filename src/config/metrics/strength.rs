// ABOUTME: Strength-level classification configuration
// ABOUTME: BMI adjustment bands, gender factors, and difficulty tier boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use super::error::ConfigError;
use fittrack_core::constants::strength;
use fittrack_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Strength classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// `bmi < underweight_bmi` selects `underweight_index`
    pub underweight_bmi: f64,
    /// `normal_bmi < bmi < overweight_bmi` selects `transition_index`
    pub normal_bmi: f64,
    /// `bmi > overweight_bmi` selects `overweight_index`
    pub overweight_bmi: f64,
    /// Index for underweight lifters
    pub underweight_index: f64,
    /// Index between the normal and overweight thresholds
    pub transition_index: f64,
    /// Index above the overweight threshold
    pub overweight_index: f64,
    /// Index when no band matches (boundaries, normal range)
    pub default_index: f64,
    /// Multiplier for male lifters
    pub male_factor: f64,
    /// Multiplier for everyone else
    pub female_factor: f64,
    /// Difficulty below this is Beginner
    pub beginner_below: f64,
    /// Difficulty below this is Intermediate
    pub intermediate_below: f64,
    /// Difficulty below this is Advanced; at or above is `GymLord`
    pub advanced_below: f64,
}

impl StrengthConfig {
    /// Gender factor applied to the strength index
    #[must_use]
    pub const fn gender_factor(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_factor,
            Gender::Female => self.female_factor,
        }
    }

    /// Validate bands and tiers
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a threshold is not finite, thresholds are unordered,
    /// or factors fall outside (0, 1.5]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            self.underweight_bmi,
            self.normal_bmi,
            self.overweight_bmi,
            self.beginner_below,
            self.intermediate_below,
            self.advanced_below,
        ];
        if thresholds.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Strength thresholds must be finite",
            ));
        }
        if !(self.underweight_bmi < self.normal_bmi && self.normal_bmi < self.overweight_bmi) {
            return Err(ConfigError::InvalidRange(
                "Strength BMI thresholds must be strictly ascending",
            ));
        }
        if !(0.0 < self.beginner_below
            && self.beginner_below < self.intermediate_below
            && self.intermediate_below < self.advanced_below)
        {
            return Err(ConfigError::InvalidRange(
                "Strength difficulty tiers must be positive and strictly ascending",
            ));
        }
        let factors = [
            self.underweight_index,
            self.transition_index,
            self.overweight_index,
            self.default_index,
            self.male_factor,
            self.female_factor,
        ];
        if factors.iter().any(|f| !(*f > 0.0 && *f <= 1.5)) {
            return Err(ConfigError::ValueOutOfRange(
                "Strength indices and gender factors must be in (0, 1.5]",
            ));
        }
        Ok(())
    }
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            underweight_bmi: strength::UNDERWEIGHT_BMI,
            normal_bmi: strength::NORMAL_BMI,
            overweight_bmi: strength::OVERWEIGHT_BMI,
            underweight_index: strength::UNDERWEIGHT_INDEX,
            transition_index: strength::TRANSITION_INDEX,
            overweight_index: strength::OVERWEIGHT_INDEX,
            default_index: strength::DEFAULT_INDEX,
            male_factor: strength::MALE_FACTOR,
            female_factor: strength::FEMALE_FACTOR,
            beginner_below: strength::BEGINNER_BELOW,
            intermediate_below: strength::INTERMEDIATE_BELOW,
            advanced_below: strength::ADVANCED_BELOW,
        }
    }
}
