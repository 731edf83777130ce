// ABOUTME: Training volume aggregation per workout label from logged sets
// ABOUTME: Applies the program resolution and missing-data rules shared with the time series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::program_index::{ProgramIndex, SkipReason};
use crate::models::{AggregatedVolumePoint, ExerciseSetRecord, ReportWindow};

/// Volume contributed by one logged set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetVolume<'r> {
    /// Resolved workout label
    pub workout_label: &'r str,
    /// Session date
    pub date: NaiveDate,
    /// `weight × reps`
    pub volume: f64,
}

/// Sums `weight × reps` per workout label
#[derive(Debug, Clone, Copy)]
pub struct VolumeAggregator<'a> {
    index: &'a ProgramIndex,
    window: Option<ReportWindow>,
}

impl<'a> VolumeAggregator<'a> {
    /// Aggregator over every date in the snapshot
    #[must_use]
    pub const fn new(index: &'a ProgramIndex) -> Self {
        Self {
            index,
            window: None,
        }
    }

    /// Restrict aggregation to a reporting window
    #[must_use]
    pub const fn with_window(mut self, window: ReportWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Volume of one set, or the reason it does not count
    ///
    /// A logged weight of zero is a real set and contributes zero; an
    /// unlogged weight does not contribute at all.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] for records outside the window, unresolved
    /// against the program, without a weight, or for zero-rep exercises.
    pub fn contribution<'r>(
        &self,
        record: &'r ExerciseSetRecord,
    ) -> Result<SetVolume<'r>, SkipReason>
    where
        'a: 'r,
    {
        if let Some(window) = self.window {
            if !window.contains(record.date) {
                return Err(SkipReason::OutsideWindow);
            }
        }
        let index: &'r ProgramIndex = self.index;
        let resolved = index.resolve(record)?;
        let weight = record.weight.ok_or(SkipReason::UnloggedWeight)?;
        if resolved.exercise.reps == 0 {
            return Err(SkipReason::ZeroReps);
        }
        Ok(SetVolume {
            workout_label: resolved.workout_label,
            date: record.date,
            volume: weight * f64::from(resolved.exercise.reps),
        })
    }

    /// Unrounded totals per workout label, in order of first appearance
    #[must_use]
    pub fn totals(&self, records: &[ExerciseSetRecord]) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for record in records {
            match self.contribution(record) {
                Ok(set) => {
                    let position = *positions.entry(set.workout_label).or_insert_with(|| {
                        totals.push((set.workout_label.to_owned(), 0.0));
                        totals.len() - 1
                    });
                    totals[position].1 += set.volume;
                }
                Err(reason) => {
                    debug!(
                        day = %record.day,
                        exercise = %record.exercise_name,
                        set_index = record.set_index,
                        %reason,
                        "Set skipped from volume"
                    );
                }
            }
        }
        totals
    }

    /// Volume per workout label, rounded for display
    #[must_use]
    pub fn aggregate(&self, records: &[ExerciseSetRecord]) -> Vec<AggregatedVolumePoint> {
        self.totals(records)
            .into_iter()
            .map(|(workout_label, volume)| AggregatedVolumePoint {
                workout_label,
                volume: volume.round(),
            })
            .collect()
    }
}
