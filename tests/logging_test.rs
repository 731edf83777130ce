// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates format parsing, environment-driven settings, and CLI defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_progress::config::{Environment, LogLevel};
use pierre_progress::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default(""), LogFormat::Pretty);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "pierre-progress");
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_production_logging_includes_location() {
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);

    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_cli_logging_is_compact() {
    env::remove_var("LOG_FORMAT");
    let quiet = LoggingConfig::for_cli(LogLevel::Warn, false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);

    let configured = LoggingConfig::for_cli(LogLevel::Error, false);
    assert_eq!(configured.level, "error");

    let verbose = LoggingConfig::for_cli(LogLevel::Error, true);
    assert_eq!(verbose.level, "debug");
    assert!(verbose.env_filter().to_string().contains("reqwest=warn"));
}
