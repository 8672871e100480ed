// ABOUTME: Core types and constants for the Fittrack metrics engine
// ABOUTME: Foundation crate with error handling, domain models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing shared types and constants for the Fittrack
//! metrics engine.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **models**: Profile inputs and metric result records
//! - **constants**: Default formula coefficients and classification thresholds

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Profile inputs and metric results
pub mod models;

/// Default formula coefficients and thresholds organized by formula
pub mod constants;
