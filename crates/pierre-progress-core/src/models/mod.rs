// ABOUTME: Data models shared by the progress engine and its hosts
// ABOUTME: Re-exports program, tracking, weekday, and derived report structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire shapes follow the program and tracking services (snake_case JSON).
//! Input models are tolerant: optional or nullable service fields default
//! instead of failing the whole snapshot.
//!
//! - `Program`, `ProgramDay`, `Exercise`, `Meal`: coach-authored weekly plan
//! - `TrackingDay`, `TrackingField`: daily completion flags and compliance
//! - `ExerciseSetRecord`, `ExerciseSetUpsert`: logged charges per set
//! - `AggregatedVolumePoint`, `VolumeEvolutionRow`, `ChargeGroup`: derived views

mod program;
mod report;
mod tracking;
mod weekday;

pub use program::{Exercise, Food, Meal, Program, ProgramDay};
pub use report::{
    AggregatedVolumePoint, ChargeGroup, ChargeRow, ClientComplianceSummary, ProgressReport,
    ReportWindow, VolumeEvolutionRow, WeeklyCompliance,
};
pub use tracking::{
    compliance_rate_for, ExerciseSetKey, ExerciseSetRecord, ExerciseSetUpsert, TrackingDay,
    TrackingField,
};
pub use weekday::{weekday_key, Weekday};
