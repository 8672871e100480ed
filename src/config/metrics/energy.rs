// ABOUTME: Energy expenditure configuration: Mifflin-St Jeor coefficients and activity factors
// ABOUTME: Activity factors form a fixed ordered table from activity level to multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Energy Expenditure Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use super::error::ConfigError;
use fittrack_core::constants::{activity_factors, bmr};
use fittrack_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) coefficients
///
/// `bmr = weight_coef*kg + height_coef*cm + age_coef*years + gender constant`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (9.99)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-4.92)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific additive constant
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            Gender::Female => self.female_constant,
        }
    }

    /// Validate coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a value is not finite, the weight or
    /// height coefficient is not positive, or the age coefficient is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.weight_coef,
            self.height_coef,
            self.age_coef,
            self.male_constant,
            self.female_constant,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients and constants must be finite",
            ));
        }
        if !(self.weight_coef > 0.0 && self.height_coef > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: bmr::WEIGHT_COEF,
            height_coef: bmr::HEIGHT_COEF,
            age_coef: bmr::AGE_COEF,
            male_constant: bmr::MALE_CONSTANT,
            female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for one activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// `(level, multiplier)` table in fixed order
    #[must_use]
    pub fn table(&self) -> [(ActivityLevel, f64); 5] {
        ActivityLevel::ALL.map(|level| (level, self.factor(level)))
    }

    /// Validate factors are within 1.0-2.5 (`NaN` included) and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on out-of-range or unordered factors
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = self.table();
        if table
            .iter()
            .any(|(_, factor)| !(1.0..=2.5).contains(factor))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if table.windows(2).any(|pair| pair[0].1 >= pair[1].1) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            extra_active: activity_factors::EXTRA_ACTIVE,
        }
    }
}
