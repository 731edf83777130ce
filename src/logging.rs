// ABOUTME: Logging configuration and structured logging setup for the progress engine hosts
// ABOUTME: Configures log levels and formatters, and provides structured store/report events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, LogLevel};
use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse a format name, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::PIERRE_PROGRESS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default());
        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());

        // Production logs carry location and thread for correlation
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PIERRE_PROGRESS.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Configuration for command-line use: compact output at the configured
    /// level, raised to debug when verbose
    #[must_use]
    pub fn for_cli(level: LogLevel, verbose: bool) -> Self {
        let level = if verbose { LogLevel::Debug } else { level };
        Self {
            level: level.to_string(),
            format: LogFormat::Compact,
            ..Self::from_env()
        }
    }

    /// Filter combining the configured level with noise reduction for HTTP internals
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive("hyper=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
            .add_directive(
                "hyper_util=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            .add_directive("reqwest=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
            .add_directive("rustls=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {}",
            config_summary
        );
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a store fetch
    pub fn log_store_fetch(
        service: &str,
        resource: &str,
        client_id: Option<i64>,
        success: bool,
        duration_ms: u64,
    ) {
        if success {
            info!(
                store.service = %service,
                store.resource = %resource,
                client.id = client_id.unwrap_or_default(),
                store.duration_ms = duration_ms,
                "Store fetch"
            );
        } else {
            warn!(
                store.service = %service,
                store.resource = %resource,
                client.id = client_id.unwrap_or_default(),
                store.duration_ms = duration_ms,
                "Store fetch failed"
            );
        }
    }

    /// Log a tracking write and whether the server value replaced the local one
    pub fn log_tracking_write(key: &str, operation: &str, reconciled: bool, details: Option<&str>) {
        if reconciled {
            info!(
                tracking.key = %key,
                tracking.operation = %operation,
                "Tracking write reconciled"
            );
        } else {
            error!(
                tracking.key = %key,
                tracking.operation = %operation,
                tracking.details = details.unwrap_or(""),
                "Tracking write failed, keeping local value"
            );
        }
    }

    /// Log a finished report build
    pub fn log_report_built(
        request_id: &str,
        subject: &str,
        tracked_days: usize,
        set_records: usize,
        notices: usize,
    ) {
        if notices == 0 {
            info!(
                report.request_id = %request_id,
                report.subject = %subject,
                report.tracked_days = tracked_days,
                report.set_records = set_records,
                "Progress report built"
            );
        } else {
            warn!(
                report.request_id = %request_id,
                report.subject = %subject,
                report.tracked_days = tracked_days,
                report.set_records = set_records,
                report.notices = notices,
                "Progress report built with missing data"
            );
        }
    }

    /// Log a session event
    pub fn log_session_event(client_id: Option<i64>, event: &str, success: bool) {
        info!(
            client.id = client_id.unwrap_or_default(),
            session.event = %event,
            session.success = success,
            "Session event"
        );
    }
}
