// ABOUTME: BMI category threshold configuration
// ABOUTME: Thresholds reproduce the tracking app's table, including its uncovered gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use super::error::ConfigError;
use fittrack_core::constants::bmi;
use serde::{Deserialize, Serialize};

/// BMI category thresholds (kg/m²)
///
/// Categories are half-open intervals evaluated in order. The intervals do not
/// touch (`normal_below < overweight_from`, `overweight_below < obesity_i_from`);
/// values in the gaps classify as Obesity level II.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Upper bound (exclusive) of Underweight
    pub underweight_below: f64,
    /// Upper bound (exclusive) of Normal weight
    pub normal_below: f64,
    /// Lower bound (inclusive) of Overweight
    pub overweight_from: f64,
    /// Upper bound (exclusive) of Overweight
    pub overweight_below: f64,
    /// Lower bound (inclusive) of Obesity level I
    pub obesity_i_from: f64,
    /// Upper bound (exclusive) of Obesity level I
    pub obesity_i_below: f64,
}

impl BodyCompositionConfig {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a threshold is not finite, the first is not positive, or the
    /// thresholds are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.underweight_below,
            self.normal_below,
            self.overweight_from,
            self.overweight_below,
            self.obesity_i_from,
            self.obesity_i_below,
        ];
        if ordered.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "BMI thresholds must be finite",
            ));
        }
        if self.underweight_below <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMI underweight threshold must be positive",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            underweight_below: bmi::UNDERWEIGHT_BELOW,
            normal_below: bmi::NORMAL_BELOW,
            overweight_from: bmi::OVERWEIGHT_FROM,
            overweight_below: bmi::OVERWEIGHT_BELOW,
            obesity_i_from: bmi::OBESITY_I_FROM,
            obesity_i_below: bmi::OBESITY_I_BELOW,
        }
    }
}
