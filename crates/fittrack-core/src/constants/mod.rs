// ABOUTME: Default coefficients and thresholds for body-composition and strength formulas
// ABOUTME: Pure data constants grouped by formula, consumed by the configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Constants module
//!
//! Default values for every tunable number in the metrics engine. The runtime
//! configuration starts from these and may override them from the environment.

/// BMI category thresholds (kg/m²), applied to the BMI rounded to one decimal
pub mod bmi {
    /// Below this: Underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Normal weight is `[UNDERWEIGHT_BELOW, NORMAL_BELOW)`
    pub const NORMAL_BELOW: f64 = 22.9;
    /// Overweight starts here (the 22.9-23 gap falls through to Obesity level II)
    pub const OVERWEIGHT_FROM: f64 = 23.0;
    /// Overweight is `[OVERWEIGHT_FROM, OVERWEIGHT_BELOW)`
    pub const OVERWEIGHT_BELOW: f64 = 24.9;
    /// Obesity level I starts here
    pub const OBESITY_I_FROM: f64 = 25.0;
    /// Obesity level I is `[OBESITY_I_FROM, OBESITY_I_BELOW)`
    pub const OBESITY_I_BELOW: f64 = 29.9;
}

/// Mifflin-St Jeor coefficients as used by the tracking app
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
pub mod bmr {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 9.99;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -4.92;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers applied to the rounded BMR
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Twice-daily training or physical job
    pub const EXTRA_ACTIVE: f64 = 1.9;
}

/// Strength-level classification
pub mod strength {
    /// BMI below which the underweight index applies
    pub const UNDERWEIGHT_BMI: f64 = 18.5;
    /// BMI above which the transition index applies
    pub const NORMAL_BMI: f64 = 22.9;
    /// BMI above which the overweight index applies (and below which the transition index applies)
    pub const OVERWEIGHT_BMI: f64 = 25.0;

    /// Index for underweight lifters
    pub const UNDERWEIGHT_INDEX: f64 = 1.0;
    /// Index for `NORMAL_BMI < bmi < OVERWEIGHT_BMI`
    pub const TRANSITION_INDEX: f64 = 0.95;
    /// Index for `bmi > OVERWEIGHT_BMI`
    pub const OVERWEIGHT_INDEX: f64 = 0.85;
    /// Index when no band matches
    pub const DEFAULT_INDEX: f64 = 1.0;

    /// Gender factor for male lifters
    pub const MALE_FACTOR: f64 = 1.0;
    /// Gender factor for everyone else
    pub const FEMALE_FACTOR: f64 = 0.75;

    /// Difficulty below which a lift is Beginner
    pub const BEGINNER_BELOW: f64 = 0.4;
    /// Difficulty below which a lift is Intermediate
    pub const INTERMEDIATE_BELOW: f64 = 0.8;
    /// Difficulty below which a lift is Advanced; at or above is `GymLord`
    pub const ADVANCED_BELOW: f64 = 1.2;
}

/// Estimated one-rep max
pub mod one_rep_max {
    /// Rep counts above this are capped; the regression formulas degrade past it
    pub const MAX_RELIABLE_REPS: u32 = 15;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the command-line tool and library in log records
    pub const FITTRACK_METRICS: &str = "fittrack-metrics";
}
