// ABOUTME: Core data models for the metrics engine
// ABOUTME: Re-exports profile inputs and metric result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Data Models
//!
//! Inputs ([`AnthropometricProfile`], [`LiftAttempt`]) arrive from the caller and
//! outputs ([`BmiResult`], [`EnergyResult`], [`StrengthAssessment`]) are returned to
//! it. Nothing here is stored; every model serializes to camelCase JSON so the
//! transport layer can embed it in its own envelope.

mod metrics;
mod profile;

pub use metrics::{
    ActivityLevel, BmiCategory, BmiResult, EnergyNeeds, EnergyResult, StrengthAssessment,
    StrengthLevel,
};
pub use profile::{
    ensure_non_negative, ensure_positive, AnthropometricProfile, Gender, LiftAttempt,
    ValidatedProfile,
};
