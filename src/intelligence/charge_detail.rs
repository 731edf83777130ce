// ABOUTME: Per-session charge table grouping logged weights by workout, date, and exercise
// ABOUTME: Unlogged sets and unresolved references stay visible as gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::collation::locale_cmp;
use super::program_index::ProgramIndex;
use crate::constants::limits::MAX_SET_INDEX;
use crate::models::{ChargeGroup, ChargeRow, ExerciseSetRecord};

/// Rows of one group while records are being placed
#[derive(Default)]
struct GroupRows {
    order: Vec<String>,
    weights: HashMap<String, Vec<Option<f64>>>,
}

impl GroupRows {
    fn row(&mut self, exercise_name: &str, prescribed_sets: usize) -> &mut Vec<Option<f64>> {
        if !self.weights.contains_key(exercise_name) {
            self.order.push(exercise_name.to_owned());
        }
        self.weights
            .entry(exercise_name.to_owned())
            .or_insert_with(|| vec![None; prescribed_sets])
    }
}

/// Groups logged sets into the table shown per session
pub struct ChargeDetailGrouper<'a> {
    index: &'a ProgramIndex,
}

impl<'a> ChargeDetailGrouper<'a> {
    /// Grouper over a program index
    #[must_use]
    pub const fn new(index: &'a ProgramIndex) -> Self {
        Self { index }
    }

    /// Charge groups sorted by date, then by workout label in locale order
    ///
    /// Rows follow the program's exercise order, followed by exercises the
    /// program does not prescribe in the order they were logged. Rows of
    /// prescribed exercises have one slot per prescribed set. When the same
    /// set is logged twice, the later record wins.
    #[must_use]
    pub fn group(&self, records: &[ExerciseSetRecord]) -> Vec<ChargeGroup> {
        let mut groups: HashMap<(String, NaiveDate), GroupRows> = HashMap::new();

        for record in records {
            let slot = match usize::try_from(record.set_index - 1) {
                Ok(slot) if record.set_index <= MAX_SET_INDEX => slot,
                _ => {
                    debug!(
                        exercise = %record.exercise_name,
                        set_index = record.set_index,
                        "Set index cannot be placed in charge table"
                    );
                    continue;
                }
            };
            let label = self.index.label_for(&record.day).to_owned();
            let prescribed = self
                .index
                .get(&record.day)
                .and_then(|day| day.exercise(&record.exercise_name))
                .map_or(0, |exercise| exercise.sets as usize);

            let row = groups
                .entry((label, record.date))
                .or_default()
                .row(&record.exercise_name, prescribed);
            if row.len() <= slot {
                row.resize(slot + 1, None);
            }
            row[slot] = record.weight;
        }

        let mut charge_groups: Vec<ChargeGroup> = groups
            .into_iter()
            .map(|((workout_label, date), rows)| {
                let rows = self.ordered_rows(&workout_label, rows, records, date);
                ChargeGroup {
                    workout_label,
                    date,
                    rows,
                }
            })
            .collect();

        charge_groups.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| locale_cmp(&a.workout_label, &b.workout_label))
        });
        charge_groups
    }

    /// Rows in program order, then unknown exercises in first-seen order
    fn ordered_rows(
        &self,
        workout_label: &str,
        mut rows: GroupRows,
        records: &[ExerciseSetRecord],
        date: NaiveDate,
    ) -> Vec<ChargeRow> {
        let program_order: Vec<&str> = records
            .iter()
            .filter(|record| record.date == date)
            .filter(|record| self.index.label_for(&record.day) == workout_label)
            .find_map(|record| self.index.get(&record.day))
            .map(|day| day.exercises.iter().map(|e| e.name.as_str()).collect())
            .unwrap_or_default();

        let mut order = rows.order;
        order.sort_by_key(|name| {
            program_order
                .iter()
                .position(|known| known == name)
                .unwrap_or(usize::MAX)
        });

        order
            .into_iter()
            .filter_map(|exercise_name| {
                rows.weights
                    .remove(&exercise_name)
                    .map(|weights| ChargeRow {
                        exercise_name,
                        weights,
                    })
            })
            .collect()
    }
}
