// ABOUTME: Result records produced by the metrics engine: BMI, energy needs, strength level
// ABOUTME: Fixed label sets and the ordered activity-level table live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BMI category, evaluated first-match-wins on the rounded BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// bmi < 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// 18.5 <= bmi < 22.9
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// 23 <= bmi < 24.9
    #[serde(rename = "Overweight")]
    Overweight,
    /// 25 <= bmi < 29.9
    #[serde(rename = "Obesity level I")]
    ObesityLevelI,
    /// Everything else, including the 22.9-23 and 24.9-25 gaps
    #[serde(rename = "Obesity level II")]
    ObesityLevelII,
}

impl BmiCategory {
    /// All categories, lightest first
    pub const ALL: [Self; 5] = [
        Self::Underweight,
        Self::NormalWeight,
        Self::Overweight,
        Self::ObesityLevelI,
        Self::ObesityLevelII,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityLevelI => "Obesity level I",
            Self::ObesityLevelII => "Obesity level II",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BmiCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_format(format!("Unknown BMI category: '{s}'")))
    }
}

/// Body Mass Index with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    /// Category of the rounded value
    pub category: BmiCategory,
}

/// Activity level used to scale BMR into daily energy needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Hard daily exercise plus a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Every level, in table order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// camelCase key used in JSON and on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightlyActive",
            Self::ModeratelyActive => "moderatelyActive",
            Self::VeryActive => "veryActive",
            Self::ExtraActive => "extraActive",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], "");
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                AppError::invalid_format(format!(
                    "Unknown activity level: '{s}'. Valid options: sedentary, lightlyActive, moderatelyActive, veryActive, extraActive"
                ))
            })
    }
}

/// Daily energy needs (kcal/day) for each of the five activity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyNeeds {
    /// BMR x sedentary factor
    pub sedentary: i32,
    /// BMR x lightly active factor
    pub lightly_active: i32,
    /// BMR x moderately active factor
    pub moderately_active: i32,
    /// BMR x very active factor
    pub very_active: i32,
    /// BMR x extra active factor
    pub extra_active: i32,
}

impl EnergyNeeds {
    /// Build the table by evaluating `kcal` once per level, stopping at the first error
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `kcal`
    pub fn try_from_fn<E>(
        mut kcal: impl FnMut(ActivityLevel) -> Result<i32, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            sedentary: kcal(ActivityLevel::Sedentary)?,
            lightly_active: kcal(ActivityLevel::LightlyActive)?,
            moderately_active: kcal(ActivityLevel::ModeratelyActive)?,
            very_active: kcal(ActivityLevel::VeryActive)?,
            extra_active: kcal(ActivityLevel::ExtraActive)?,
        })
    }

    /// Energy need for one level
    #[must_use]
    pub const fn get(&self, level: ActivityLevel) -> i32 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// `(level, kcal)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (ActivityLevel, i32)> + '_ {
        ActivityLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// Basal metabolic rate plus activity-scaled daily energy needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// Rounded Mifflin-St Jeor BMR (kcal/day)
    pub bmr: i32,
    /// Daily energy needs per activity level
    pub energy_needs: EnergyNeeds,
}

/// Qualitative strength tier
///
/// `Novice` is part of the interface but the classifier never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    /// difficulty < 0.4
    Beginner,
    /// Not produced by the classifier
    Novice,
    /// 0.4 <= difficulty < 0.8
    Intermediate,
    /// 0.8 <= difficulty < 1.2
    Advanced,
    /// difficulty >= 1.2
    GymLord,
}

impl StrengthLevel {
    /// Every declared tier, weakest first
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::GymLord,
    ];

    /// Tiers the classifier can return
    pub const REACHABLE: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::GymLord,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::GymLord => "GymLord",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrengthLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_format(format!("Unknown strength level: '{s}'")))
    }
}

/// Full breakdown of a strength classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthAssessment {
    /// Unrounded BMI of the lifter
    pub bmi: f64,
    /// Lift load divided by body weight
    pub strength_index: f64,
    /// BMI-based adjustment applied to the strength index
    pub bmi_index: f64,
    /// Gender factor applied to the strength index
    pub gender_factor: f64,
    /// `strength_index * bmi_index * gender_factor`
    pub difficulty: f64,
    /// Resulting tier
    pub level: StrengthLevel,
}
