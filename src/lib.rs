// ABOUTME: Main library entry point for the Fittrack metrics engine
// ABOUTME: BMI, BMR/TDEE, and strength-level classification over caller-supplied profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack Metrics
//!
//! The calculation core behind the Fittrack fitness backends. Given a user's
//! height, weight, date of birth and gender, and optionally a lift, it computes:
//!
//! - **BMI** rounded to one decimal, with its category
//! - **BMR** (Mifflin-St Jeor) and daily energy needs for five activity levels
//! - **Strength level** of a lift relative to the lifter's body
//!
//! Everything is a pure function of its inputs. The current date is always a
//! parameter; the library never reads the clock.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fittrack_metrics::config::MetricsConfig;
//! use fittrack_metrics::intelligence::MetricsCalculator;
//! use fittrack_metrics::models::{AnthropometricProfile, Gender};
//!
//! # fn main() -> fittrack_metrics::errors::AppResult<()> {
//! let config = MetricsConfig::default();
//! let calculator = MetricsCalculator::new(&config);
//!
//! let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default();
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//! let profile = AnthropometricProfile::new(175.0, 70.0, dob, Gender::Male);
//!
//! let energy = calculator.compute_bmr_and_tdee(&profile, today)?;
//! assert_eq!(energy.bmr, 1626);
//! assert_eq!(energy.energy_needs.sedentary, 1951);
//! # Ok(())
//! # }
//! ```

/// Metrics configuration (thresholds, coefficients, multipliers)
pub mod config;

/// Calculators and the `MetricsCalculator` facade
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Error types re-exported from `fittrack-core`
pub mod errors {
    pub use fittrack_core::errors::*;
}

/// Data models re-exported from `fittrack-core`
pub mod models {
    pub use fittrack_core::models::*;
}

/// Formula constants re-exported from `fittrack-core`
pub mod constants {
    pub use fittrack_core::constants::*;
}
