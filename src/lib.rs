// ABOUTME: Main library entry point for the Pierre progress aggregation engine
// ABOUTME: Reconciles coach programs with client tracking into compliance and volume reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Progress
//!
//! Derives the metrics a coach/client dashboard displays from two snapshots:
//! the weekly program a coach authored and the facts the client tracked.
//!
//! ## Features
//!
//! - **Compliance**: daily rate from three meal flags and the workout flag, weekly average
//! - **Volume**: `weight × reps` per workout label, and as a dense time series
//! - **Charge table**: logged weights per workout, date, and exercise
//! - **Optimistic tracking**: local toggles and set logs reconciled with the tracking service
//!
//! ## Architecture
//!
//! - **intelligence**: pure aggregation engine over immutable snapshots
//! - **stores**: async program and tracking stores with HTTP implementations
//! - **session**: verified identity at the session boundary
//! - **report**: joins the stores and the engine into one report
//! - **`tracking_sync`**: optimistic writes serialized per tracking key
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_progress::config::ProgressConfig;
//! use pierre_progress::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ProgressConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

// Foundation types live in the core crate
pub use pierre_progress_core::{constants, errors, models};

/// Environment-based configuration
pub mod config;

/// Structured logging setup and event helpers
pub mod logging;

/// Aggregation engine
pub mod intelligence;

/// Session verification and client identity
pub mod session;

/// Program and tracking stores
pub mod stores;

/// Optimistic tracking writes
pub mod tracking_sync;

/// Report assembly from stores and engine
pub mod report;

/// Offline snapshots for reports without the services
pub mod snapshot;
