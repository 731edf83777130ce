// ABOUTME: Core types and constants for the Pierre progress aggregation engine
// ABOUTME: Foundation crate with error handling, constants, and program/tracking models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Progress Core
//!
//! Foundation crate providing the shared types of the progress aggregation engine.
//! It holds no I/O and changes infrequently, so the engine and its hosts can
//! compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Weekday labels, tracking wire keys, defaults and limits
//! - **models**: Program, tracking, and derived report data shapes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Program, tracking, and report data models
pub mod models;
