// ABOUTME: Progress and volume aggregation engine over program and tracking snapshots
// ABOUTME: Pure, synchronous transforms recomputed whenever a fresh snapshot arrives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation Engine
//!
//! Reconciles a coach-authored weekly program with the facts a client tracks:
//!
//! - [`ProgramIndex`] resolves weekdays and logged sets against the program
//! - [`ComplianceAggregator`] keeps daily compliance rates and weekly averages
//! - [`VolumeAggregator`] sums training volume per workout label
//! - [`VolumeEvolutionBuilder`] turns the same volumes into a dense time series
//! - [`ChargeDetailGrouper`] lays logged weights out per session
//!
//! None of these hold state between snapshots.

/// Weekday lookup and logged-set resolution
pub mod program_index;

/// Compliance toggle and weekly averages
pub mod compliance;

/// Per-workout training volume
pub mod volume;

/// Volume time series
pub mod evolution;

/// Per-session charge table
pub mod charge_detail;

/// Label ordering for report tables
pub mod collation;

/// Today's plan
pub mod today;

pub use charge_detail::ChargeDetailGrouper;
pub use collation::locale_cmp;
pub use compliance::ComplianceAggregator;
pub use evolution::VolumeEvolutionBuilder;
pub use program_index::{ProgramIndex, ResolvedSet, SkipReason};
pub use today::{MealCheck, TodayPlan};
pub use volume::{SetVolume, VolumeAggregator};
