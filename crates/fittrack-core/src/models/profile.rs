// ABOUTME: Caller-supplied inputs for metric calculations: body profile, gender, lift attempt
// ABOUTME: Validation turns optional wire fields into a fully-present, positive profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used by the sex-specific formulas
///
/// Parsing is a binary fallback: only the label `male` selects [`Gender::Male`],
/// every other non-blank label selects [`Gender::Female`]. A blank label counts
/// as no gender at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    /// Male formulas (+5 BMR constant, strength factor 1.0)
    Male,
    /// Female formulas (-161 BMR constant, strength factor 0.75)
    Female,
}

impl Gender {
    /// Map a free-form label onto the binary gender used by the formulas
    ///
    /// Returns `None` for empty or whitespace-only labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            None
        } else if label.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else {
            Some(Self::Female)
        }
    }

    /// Canonical lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| AppError::missing_field("gender"))
    }
}

impl TryFrom<String> for Gender {
    type Error = AppError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_owned()
    }
}

/// Read an optional gender label, treating a blank label as absent
fn deserialize_optional_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Gender::from_label))
}

/// Body profile as received from the profile store
///
/// Every field is optional on the wire. Call [`AnthropometricProfile::validate`]
/// before doing arithmetic so absent values are reported instead of producing `NaN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnthropometricProfile {
    /// Height in centimeters
    #[serde(default, alias = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(default, alias = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Calendar date of birth
    #[serde(default, alias = "dob", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender for sex-specific formulas; a blank label deserializes as `None`
    #[serde(
        default,
        deserialize_with = "deserialize_optional_gender",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
}

impl AnthropometricProfile {
    /// Build a profile with every field present
    #[must_use]
    pub const fn new(height_cm: f64, weight_kg: f64, date_of_birth: NaiveDate, gender: Gender) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            date_of_birth: Some(date_of_birth),
            gender: Some(gender),
        }
    }

    /// Check that all fields are present and height/weight are positive
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` listing every absent field
    /// - `InvalidInput` if height or weight is not a positive finite number
    pub fn validate(&self) -> AppResult<ValidatedProfile> {
        let mut missing = Vec::new();
        if self.height_cm.is_none() {
            missing.push("heightCm");
        }
        if self.weight_kg.is_none() {
            missing.push("weightKg");
        }
        if self.date_of_birth.is_none() {
            missing.push("dateOfBirth");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }

        match (self.height_cm, self.weight_kg, self.date_of_birth, self.gender) {
            (Some(height_cm), Some(weight_kg), Some(date_of_birth), Some(gender)) => {
                ensure_positive("heightCm", height_cm)?;
                ensure_positive("weightKg", weight_kg)?;
                Ok(ValidatedProfile {
                    height_cm,
                    weight_kg,
                    date_of_birth,
                    gender,
                })
            }
            _ => Err(AppError::missing_fields(&missing)),
        }
    }
}

/// Profile whose fields are all present and whose height/weight are positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Calendar date of birth
    pub date_of_birth: NaiveDate,
    /// Gender for sex-specific formulas
    pub gender: Gender,
}

/// One performed set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftAttempt {
    /// Load lifted in kilograms
    pub load_kg: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl LiftAttempt {
    /// Create a lift attempt
    #[must_use]
    pub const fn new(load_kg: f64, reps: u32) -> Self {
        Self { load_kg, reps }
    }

    /// Check that the load is a non-negative finite number and at least one rep was done
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the load is negative/non-finite or reps is zero
    pub fn validate(&self) -> AppResult<()> {
        ensure_non_negative("loadKg", self.load_kg)?;
        if self.reps == 0 {
            return Err(AppError::invalid_input("reps must be at least 1"));
        }
        Ok(())
    }
}

/// Reject zero, negative, `NaN` and infinite values
///
/// # Errors
///
/// Returns `InvalidInput` naming the field
pub fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

/// Reject negative, `NaN` and infinite values
///
/// # Errors
///
/// Returns `InvalidInput` naming the field
pub fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}
