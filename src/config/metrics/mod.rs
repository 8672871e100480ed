// ABOUTME: Metrics engine configuration: thresholds, coefficients, and multipliers
// ABOUTME: Loads defaults, applies environment overrides, validates, and exposes a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Metrics Configuration Module
//!
//! Every tunable number used by the calculators lives here, organized by formula:
//! - `body_composition` - BMI category thresholds
//! - `energy` - Mifflin-St Jeor coefficients and activity factors
//! - `strength` - strength-level bands, factors, and tiers
//!
//! Defaults reproduce the tracking app's behavior exactly. Environment variables
//! prefixed with `FITTRACK_` override individual values; any override moves
//! results away from the reference values (e.g. the 1.2 sedentary multiplier or
//! the 0.75 female strength factor), so each applied override is logged at
//! `warn` and [`MetricsConfig::is_reference`] reports whether the configuration
//! still matches the defaults.

pub mod body_composition;
pub mod energy;
pub mod error;
pub mod strength;

pub use body_composition::BodyCompositionConfig;
pub use energy::{ActivityFactorsConfig, BmrConfig};
pub use error::ConfigError;
pub use strength::StrengthConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static METRICS_CONFIG: OnceLock<MetricsConfig> = OnceLock::new();

/// Main metrics configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// BMI category thresholds
    pub body_composition: BodyCompositionConfig,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for daily energy needs
    pub activity_factors: ActivityFactorsConfig,
    /// Strength-level classification
    pub strength: StrengthConfig,
}

impl MetricsConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once on first use; an invalid environment falls back to defaults.
    pub fn global() -> &'static Self {
        METRICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load metrics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "metrics configuration loaded");
        Ok(config)
    }

    /// Whether every value equals its reference default
    #[must_use]
    pub fn is_reference(&self) -> bool {
        *self == Self::default()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.body_composition.validate()?;
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.strength.validate()?;
        Ok(())
    }

    /// Parse and apply a single environment variable if set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
            warn!(
                variable = env_var_name,
                value = %val.trim(),
                "metrics default overridden from environment; results differ from reference values"
            );
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMI thresholds
        let bmi = &mut self.body_composition;
        Self::apply_env_var("FITTRACK_BMI_UNDERWEIGHT_BELOW", &mut bmi.underweight_below)?;
        Self::apply_env_var("FITTRACK_BMI_NORMAL_BELOW", &mut bmi.normal_below)?;
        Self::apply_env_var("FITTRACK_BMI_OVERWEIGHT_FROM", &mut bmi.overweight_from)?;
        Self::apply_env_var("FITTRACK_BMI_OVERWEIGHT_BELOW", &mut bmi.overweight_below)?;
        Self::apply_env_var("FITTRACK_BMI_OBESITY_I_FROM", &mut bmi.obesity_i_from)?;
        Self::apply_env_var("FITTRACK_BMI_OBESITY_I_BELOW", &mut bmi.obesity_i_below)?;

        // Mifflin-St Jeor coefficients
        let bmr = &mut self.bmr;
        Self::apply_env_var("FITTRACK_BMR_WEIGHT_COEF", &mut bmr.weight_coef)?;
        Self::apply_env_var("FITTRACK_BMR_HEIGHT_COEF", &mut bmr.height_coef)?;
        Self::apply_env_var("FITTRACK_BMR_AGE_COEF", &mut bmr.age_coef)?;
        Self::apply_env_var("FITTRACK_BMR_MALE_CONSTANT", &mut bmr.male_constant)?;
        Self::apply_env_var("FITTRACK_BMR_FEMALE_CONSTANT", &mut bmr.female_constant)?;

        // Activity factors
        let factors = &mut self.activity_factors;
        Self::apply_env_var("FITTRACK_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_LIGHTLY_ACTIVE", &mut factors.lightly_active)?;
        Self::apply_env_var(
            "FITTRACK_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("FITTRACK_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_EXTRA_ACTIVE", &mut factors.extra_active)?;

        // Strength classification
        let strength = &mut self.strength;
        Self::apply_env_var("FITTRACK_STRENGTH_MALE_FACTOR", &mut strength.male_factor)?;
        Self::apply_env_var("FITTRACK_STRENGTH_FEMALE_FACTOR", &mut strength.female_factor)?;
        Self::apply_env_var(
            "FITTRACK_STRENGTH_BEGINNER_BELOW",
            &mut strength.beginner_below,
        )?;
        Self::apply_env_var(
            "FITTRACK_STRENGTH_INTERMEDIATE_BELOW",
            &mut strength.intermediate_below,
        )?;
        Self::apply_env_var(
            "FITTRACK_STRENGTH_ADVANCED_BELOW",
            &mut strength.advanced_below,
        )?;

        Ok(self)
    }
}
