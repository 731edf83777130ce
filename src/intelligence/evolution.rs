// ABOUTME: Dense volume time series keyed by session date and workout label
// ABOUTME: Every discovered label appears on every discovered date, zero when unobserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use super::program_index::ProgramIndex;
use super::volume::VolumeAggregator;
use crate::models::{ExerciseSetRecord, VolumeEvolutionRow};

/// Builds the volume-over-time series for multi-series charts
#[derive(Debug, Clone, Copy)]
pub struct VolumeEvolutionBuilder<'a> {
    volume: VolumeAggregator<'a>,
}

impl<'a> VolumeEvolutionBuilder<'a> {
    /// Builder over a program index
    ///
    /// The series covers every date present in the snapshot; it applies the
    /// same skip rules as the per-workout totals.
    #[must_use]
    pub const fn new(index: &'a ProgramIndex) -> Self {
        Self {
            volume: VolumeAggregator::new(index),
        }
    }

    /// One row per date, ascending, each holding every workout label
    #[must_use]
    pub fn build(&self, records: &[ExerciseSetRecord]) -> Vec<VolumeEvolutionRow> {
        let mut sums: HashMap<(NaiveDate, &str), f64> = HashMap::new();
        let mut dates = BTreeSet::new();
        let mut labels = BTreeSet::new();

        for set in records
            .iter()
            .filter_map(|record| self.volume.contribution(record).ok())
        {
            *sums.entry((set.date, set.workout_label)).or_insert(0.0) += set.volume;
            dates.insert(set.date);
            labels.insert(set.workout_label);
        }

        dates
            .into_iter()
            .map(|date| VolumeEvolutionRow {
                date,
                per_workout_volume: labels
                    .iter()
                    .map(|label| {
                        let volume = sums.get(&(date, *label)).copied().unwrap_or(0.0);
                        ((*label).to_owned(), volume)
                    })
                    .collect::<BTreeMap<_, _>>(),
            })
            .collect()
    }
}
