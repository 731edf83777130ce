// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses service endpoints, HTTP timeouts, and session verification from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the progress engine hosts

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output, including skipped records
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(level)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Base URLs of the program and tracking services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Program service base URL
    pub program_service_url: Url,
    /// Tracking service base URL
    pub tracking_service_url: Url,
}

impl ServiceEndpoints {
    /// Endpoints from explicit base URLs
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a URL does not parse or is not HTTP(S).
    pub fn new(program_service_url: &str, tracking_service_url: &str) -> AppResult<Self> {
        Ok(Self {
            program_service_url: parse_base_url(
                env_config::PROGRAM_SERVICE_URL,
                program_service_url,
            )?,
            tracking_service_url: parse_base_url(
                env_config::TRACKING_SERVICE_URL,
                tracking_service_url,
            )?,
        })
    }

    /// Endpoints of services running locally on their default ports
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the default URLs fail to parse.
    pub fn local() -> AppResult<Self> {
        Self::new(defaults::PROGRAM_SERVICE_URL, defaults::TRACKING_SERVICE_URL)
    }

    /// Full URL of a program service route
    #[must_use]
    pub fn program_url(&self, path: &str) -> String {
        join_path(&self.program_service_url, path)
    }

    /// Full URL of a tracking service route
    #[must_use]
    pub fn tracking_url(&self, path: &str) -> String {
        join_path(&self.tracking_service_url, path)
    }
}

/// Timeouts of the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Session token verification settings
#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// HS256 secret shared with the auth service
    pub jwt_secret: String,
    /// Clock skew tolerated on expiry, in seconds
    pub leeway_secs: u64,
}

impl SessionConfig {
    /// Whether the development secret is in use
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == defaults::DEV_JWT_SECRET
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: defaults::DEV_JWT_SECRET.to_owned(),
            leeway_secs: defaults::JWT_LEEWAY_SECS,
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Complete configuration of a progress engine host
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Service base URLs
    pub endpoints: ServiceEndpoints,
    /// Shared HTTP client timeouts
    pub http: HttpClientConfig,
    /// Session verification
    pub session: SessionConfig,
}

impl ProgressConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed URLs or numbers, or when
    /// `JWT_SECRET` is missing in production.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));

        let endpoints = ServiceEndpoints::new(
            &env_var_or(env_config::PROGRAM_SERVICE_URL, defaults::PROGRAM_SERVICE_URL),
            &env_var_or(env_config::TRACKING_SERVICE_URL, defaults::TRACKING_SERVICE_URL),
        )?;

        let http = HttpClientConfig {
            timeout_secs: parse_u64(env_config::HTTP_TIMEOUT_SECS, defaults::HTTP_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_u64(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let jwt_secret = match env::var(env_config::JWT_SECRET) {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::config_missing(env_config::JWT_SECRET));
            }
            _ => {
                warn!("JWT_SECRET not set, using the development secret");
                defaults::DEV_JWT_SECRET.to_owned()
            }
        };

        let config = Self {
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            endpoints,
            http,
            session: SessionConfig {
                jwt_secret,
                leeway_secs: parse_u64(env_config::JWT_LEEWAY_SECS, defaults::JWT_LEEWAY_SECS)?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero timeouts or a production
    /// deployment running on the development secret.
    pub fn validate(&self) -> AppResult<()> {
        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(AppError::config("HTTP timeouts must be greater than zero"));
        }
        if self.environment.is_production() && self.session.uses_dev_secret() {
            return Err(AppError::config(
                "JWT_SECRET must not be the development secret in production",
            ));
        }
        if self.http.connect_timeout_secs > self.http.timeout_secs {
            warn!(
                connect_timeout_secs = self.http.connect_timeout_secs,
                timeout_secs = self.http.timeout_secs,
                "Connect timeout exceeds request timeout"
            );
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Progress Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Program Service: {}\n\
             - Tracking Service: {}\n\
             - HTTP Timeout: {}s (connect {}s)\n\
             - JWT Secret: {}",
            self.environment,
            self.log_level,
            self.endpoints.program_service_url,
            self.endpoints.tracking_service_url,
            self.http.timeout_secs,
            self.http.connect_timeout_secs,
            if self.session.uses_dev_secret() {
                "development default"
            } else {
                "configured"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a numeric environment variable, falling back when unset
fn parse_u64(key: &str, default: u64) -> AppResult<u64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!("{key} must be a non-negative integer, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}

/// Parse a service base URL
fn parse_base_url(key: &str, raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("{key} is not a valid URL: {e}")).with_source(e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config(format!(
            "{key} must use http or https, got '{other}'"
        ))),
    }
}

/// Append a route to a base URL, keeping any path prefix of the base
fn join_path(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
