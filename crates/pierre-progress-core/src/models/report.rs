// ABOUTME: Derived report structures produced by the aggregation engine
// ABOUTME: Volume points, evolution rows, charge groups, compliance summaries, report window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tracking::TrackingDay;

/// Training volume of one workout label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedVolumePoint {
    /// Workout label ("Dos"), or the weekday when the program day has no label
    pub workout_label: String,
    /// Sum of `weight × reps`, rounded to the nearest integer
    pub volume: f64,
}

/// One date of the volume time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeEvolutionRow {
    /// Session date
    pub date: NaiveDate,
    /// Volume per workout label; every discovered label is present
    pub per_workout_volume: BTreeMap<String, f64>,
}

impl VolumeEvolutionRow {
    /// Volume of one label on this date, zero when the label is unknown
    #[must_use]
    pub fn volume(&self, workout_label: &str) -> f64 {
        self.per_workout_volume
            .get(workout_label)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Logged weights of one exercise within a charge group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRow {
    /// Exercise name
    pub exercise_name: String,
    /// `weights[i]` is the weight of set `i + 1`, `None` when not logged
    pub weights: Vec<Option<f64>>,
}

/// Logged charges of one workout on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeGroup {
    /// Workout label
    pub workout_label: String,
    /// Session date
    pub date: NaiveDate,
    /// One row per exercise seen in the session
    pub rows: Vec<ChargeRow>,
}

/// Compliance over the tracked days of a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyCompliance {
    /// Mean compliance rate, absent when no day was tracked
    pub average: Option<f64>,
    /// Rate of each tracked day, in snapshot order
    pub daily_rates: Vec<f64>,
    /// Number of tracked days contributing to the average
    pub tracked_days: usize,
}

/// Compliance line of one client in a coach overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientComplianceSummary {
    /// Client identifier
    pub client_id: i64,
    /// Client e-mail
    pub email: String,
    /// Mean compliance rate, zero when nothing was tracked
    pub average_compliance: f64,
}

/// Inclusive date range restricting the volume aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First date included
    pub start: NaiveDate,
    /// Last date included
    pub end: NaiveDate,
}

impl ReportWindow {
    /// Window between two dates, in either order
    #[must_use]
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Monday-to-Sunday week containing `date`
    #[must_use]
    pub fn week_of(date: NaiveDate) -> Self {
        let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Everything the report screen and its PDF export display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressReport {
    /// Title of the program in effect
    pub program_title: Option<String>,
    /// Weekly compliance summary
    pub weekly_compliance: WeeklyCompliance,
    /// Tracked days with their compliance rates
    pub tracking: Vec<TrackingDay>,
    /// Volume per workout label for the reporting window
    pub volume_by_workout: Vec<AggregatedVolumePoint>,
    /// Dense volume time series
    pub volume_evolution: Vec<VolumeEvolutionRow>,
    /// Per-session charge table
    pub charge_details: Vec<ChargeGroup>,
    /// User-visible messages about data that could not be loaded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}
