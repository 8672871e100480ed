// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, date construction, and standard profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack_metrics`

use chrono::NaiveDate;
use fittrack_metrics::models::{AnthropometricProfile, Gender};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 175 cm, 70 kg, born 1990-01-01
pub fn reference_profile(gender: Gender) -> AnthropometricProfile {
    AnthropometricProfile::new(175.0, 70.0, date(1990, 1, 1), gender)
}

/// Reference date in 2025 used across the energy tests
pub fn reference_date() -> NaiveDate {
    date(2025, 6, 1)
}
