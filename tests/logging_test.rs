// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling and format selection for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use formtrack::config::{Environment, LogLevel};
use formtrack::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "FORMTRACK_ENV",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
];

fn clear_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("FORMTRACK_ENV", "production");
    env::set_var("SERVICE_NAME", "formtrack-edge");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.service_name, "formtrack-edge");
    // Production always includes location and thread details
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_defaults_without_env() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.service_name, "formtrack");
    assert!(!config.include_location);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_second_init_reports_error() {
    clear_env();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}

#[test]
#[serial]
fn test_per_crate_rust_log_directive_is_kept() {
    clear_env();
    env::set_var("RUST_LOG", "warn,formtrack_intelligence=debug");

    let config = LoggingConfig::from_env();
    clear_env();

    let filter = config.env_filter().to_string();
    assert!(filter.contains("formtrack_intelligence=debug"), "{filter}");
    assert!(!filter.contains("formtrack_intelligence=info"), "{filter}");
    assert!(!filter.contains("formtrack=info"), "{filter}");
}

#[test]
#[serial]
fn test_unset_rust_log_uses_default_level() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.filter_directives, None);
    assert_eq!(config.env_filter().to_string(), "info");
}

#[test]
fn test_crate_level_override_pins_formtrack_targets() {
    let config = LoggingConfig {
        filter_directives: Some("warn".to_owned()),
        ..LoggingConfig::default()
    }
    .with_crate_level(LogLevel::Debug);

    let filter = config.env_filter().to_string();
    assert_eq!(config.level, LogLevel::Debug);
    assert!(filter.contains("formtrack=debug"), "{filter}");
    assert!(filter.contains("formtrack_intelligence=debug"), "{filter}");
    assert!(filter.contains("warn"), "{filter}");
}
