// ABOUTME: Tests for logging configuration defaults and environment handling
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_metrics::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "fittrack-metrics");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "fittrack-api");

    let config = LoggingConfig::from_env();

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "fittrack-api");
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_compact() {
    env::set_var("LOG_FORMAT", "xml");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
fn test_with_level_overrides() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
}

#[test]
fn test_directives_cover_library_and_cli_targets() {
    let directives = LoggingConfig::default().with_level("debug").directives();
    assert!(directives.contains(&"fittrack_metrics=debug".to_owned()));
    assert!(directives.contains(&"fittrack_cli=debug".to_owned()));
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    let config = LoggingConfig::default();
    assert!(config.init().is_ok());
    assert!(config.init().is_err(), "second init should fail");
}
