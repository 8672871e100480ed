// ABOUTME: Configuration module for the metrics engine
// ABOUTME: Re-exports formula thresholds, coefficients, and the global configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors
//! Configuration module
//!
//! - **Metrics**: BMI thresholds, Mifflin-St Jeor coefficients, activity factors,
//!   and strength classification bands

/// Metrics engine configuration
pub mod metrics;

pub use metrics::{
    ActivityFactorsConfig, BmrConfig, BodyCompositionConfig, ConfigError, MetricsConfig,
    StrengthConfig,
};
