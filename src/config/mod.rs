// ABOUTME: Configuration module exposing environment-driven settings
// ABOUTME: Service endpoints, HTTP timeouts, session verification, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables with development defaults.

/// Environment variable parsing and typed configuration
pub mod environment;

pub use environment::{
    Environment, HttpClientConfig, LogLevel, ProgressConfig, ServiceEndpoints, SessionConfig,
};
