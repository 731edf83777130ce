// ABOUTME: Benchmark test fixtures for generating program and tracking snapshots
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating program and tracking snapshots.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use pierre_progress::models::{
    Exercise, ExerciseSetRecord, Program, ProgramDay, TrackingDay, TrackingField, Weekday,
};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of sessions
    Month,
    /// One year of sessions
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn weeks(self) -> usize {
        match self {
            Self::Month => 4,
            Self::Year => 52,
        }
    }
}

const WORKOUTS: [&str; 5] = ["Dos", "Pectoraux", "Jambes", "Épaules", "Bras"];

/// Five training days, Monday to Friday, four exercises each
#[must_use]
pub fn generate_program() -> Program {
    let days = Weekday::ALL
        .iter()
        .take(WORKOUTS.len())
        .zip(WORKOUTS)
        .map(|(weekday, workout)| ProgramDay {
            day: weekday.label().to_owned(),
            workout: Some(workout.to_owned()),
            daily_calories: 2500.0,
            meals: BTreeMap::new(),
            exercises: (1..=4)
                .map(|n| Exercise {
                    name: format!("{workout} {n}"),
                    sets: 4,
                    reps: 6 + n * 2,
                })
                .collect(),
        })
        .collect();

    Program {
        id: 1,
        title: "Benchmark".to_owned(),
        coach_id: Some(1),
        client_id: Some(2),
        notes: None,
        calories: 17_500.0,
        days,
    }
}

/// Every set of every programmed session over `size`, with a gap every seventh set
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_sets(program: &Program, size: HistorySize) -> Vec<ExerciseSetRecord> {
    let first_monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
    let mut records = Vec::new();

    for week in 0..size.weeks() {
        for (offset, day) in program.days.iter().enumerate() {
            let date = first_monday + Duration::days((week * 7 + offset) as i64);
            for exercise in &day.exercises {
                for set_index in 1..=i64::from(exercise.sets) {
                    let position = records.len();
                    records.push(ExerciseSetRecord {
                        id: Some(position as i64),
                        client_id: Some(2),
                        day: day.day.clone(),
                        date,
                        exercise_name: exercise.name.clone(),
                        set_index,
                        weight: (position % 7 != 0)
                            .then(|| 20.0 + (week as f64) * 0.5 + (set_index as f64) * 2.5),
                    });
                }
            }
        }
    }
    records
}

/// A full tracked week with a varied completion pattern
#[must_use]
pub fn generate_week() -> Vec<TrackingDay> {
    Weekday::ALL
        .iter()
        .enumerate()
        .map(|(i, weekday)| {
            let mut day = TrackingDay::new(weekday.label());
            for (j, field) in TrackingField::ALL.into_iter().enumerate() {
                day.set_flag(field, (i + j) % 3 != 0);
            }
            day
        })
        .collect()
}
