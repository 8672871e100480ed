// ABOUTME: Metrics engine: body composition, energy expenditure, and strength classification
// ABOUTME: Pure functions over caller-supplied inputs plus a configuration-bound facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Intelligence Module
//!
//! All calculators are pure: no I/O, no clock, no shared mutable state. Any
//! number of callers may use them concurrently.

/// Age and BMI
pub mod body_composition;
/// Mifflin-St Jeor BMR and activity-scaled energy needs
pub mod energy_calculator;
/// Facade binding the calculators to a configuration
pub mod metrics_calculator;
/// Strength-level classification and one-rep max estimation
pub mod strength_level;

pub use body_composition::{classify_bmi, compute_age, compute_bmi, raw_bmi, round_to_tenth};
pub use energy_calculator::{
    calculate_energy_needs, calculate_mifflin_st_jeor, compute_bmr_and_tdee, round_kcal,
};
pub use metrics_calculator::{BodyMetricsReport, LiftAttemptAssessment, MetricsCalculator};
pub use strength_level::{
    assess_strength, bmi_index, classify_difficulty, compute_strength_level, estimate_one_rep_max,
};
