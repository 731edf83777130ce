// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Weekday labels, tracking wire keys, service routes, defaults and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Service names used in logs and error messages
pub mod service_names {
    /// The progress engine itself
    pub const PIERRE_PROGRESS: &str = "pierre-progress";
    /// Coach-authored program store
    pub const PROGRAM_SERVICE: &str = "program-service";
    /// Client tracking store
    pub const TRACKING_SERVICE: &str = "tracking-service";
}

/// Routes exposed by the program and tracking services
pub mod routes {
    /// Programs assigned to a client: `/program/client/{client_id}`
    pub const PROGRAMS_FOR_CLIENT: &str = "/program/client";
    /// Tracking week of the authenticated client
    pub const TRACKING_MY_WEEK: &str = "/tracking/me/week";
    /// Partial update of one tracking day of the authenticated client
    pub const TRACKING_MY_UPDATE: &str = "/tracking/me/update";
    /// Exercise sets of the authenticated client (GET) and set upsert (POST)
    pub const TRACKING_MY_EXERCISES: &str = "/tracking/me/exercises";
    /// Prefix for coach views of a client: `/tracking/client/{client_id}/...`
    pub const TRACKING_CLIENT: &str = "/tracking/client";
    /// Prefix for a coach's overview: `/tracking/coach/{coach_id}/clients-stats`
    pub const TRACKING_COACH: &str = "/tracking/coach";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the program service
    pub const PROGRAM_SERVICE_URL: &str = "PROGRAM_SERVICE_URL";
    /// Base URL of the tracking service
    pub const TRACKING_SERVICE_URL: &str = "TRACKING_SERVICE_URL";
    /// Shared HS256 secret used to verify session tokens
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Clock skew tolerated when checking token expiry
    pub const JWT_LEEWAY_SECS: &str = "JWT_LEEWAY_SECS";
    /// Whole-request timeout for store calls
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Connection timeout for store calls
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Program service base URL in local development
    pub const PROGRAM_SERVICE_URL: &str = "http://127.0.0.1:8002";
    /// Tracking service base URL in local development
    pub const TRACKING_SERVICE_URL: &str = "http://127.0.0.1:8003";
    /// Development-only signing secret shared with the auth service
    pub const DEV_JWT_SECRET: &str = "change-me";
    /// Default clock skew tolerance in seconds
    pub const JWT_LEEWAY_SECS: u64 = 30;
    /// Lifetime of tokens issued by the auth service, in minutes
    pub const TOKEN_LIFETIME_MINUTES: i64 = 60;
    /// Default whole-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Workout label shown for a program day without training
    pub const REST_DAY_LABEL: &str = "Repos";
}

/// Limits applied to tracking data
pub mod limits {
    /// Number of boolean actions tracked per day (three meals and the workout)
    pub const TRACKED_ACTIONS_PER_DAY: u32 = 4;
    /// Highest set index placed in a charge row; larger indices are dropped
    pub const MAX_SET_INDEX: i64 = 64;
    /// Decimal places kept on averaged compliance rates
    pub const COMPLIANCE_DECIMALS: i32 = 2;
}

/// Wire keys of the tracking-day flags
pub mod tracking_keys {
    /// Morning meal flag
    pub const MEAL_MORNING_DONE: &str = "meal_morning_done";
    /// Noon meal flag
    pub const MEAL_NOON_DONE: &str = "meal_noon_done";
    /// Evening meal flag
    pub const MEAL_EVENING_DONE: &str = "meal_evening_done";
    /// Workout flag
    pub const WORKOUT_DONE: &str = "workout_done";
    /// Legacy alias of the morning meal flag
    pub const LEGACY_MEAL_MORNING_DONE: &str = "meal_matin_done";
    /// Legacy alias of the noon meal flag
    pub const LEGACY_MEAL_NOON_DONE: &str = "meal_midi_done";
    /// Legacy alias of the evening meal flag
    pub const LEGACY_MEAL_EVENING_DONE: &str = "meal_soir_done";
}
