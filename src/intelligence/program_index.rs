// ABOUTME: Weekday lookup over a program snapshot and resolution of logged sets
// ABOUTME: Maps any-case weekday names to program days and explains why a set is skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::models::{weekday_key, Exercise, ExerciseSetRecord, Program, ProgramDay, Weekday};

/// Why a logged set does not contribute to volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The record's weekday has no program day
    UnknownDay,
    /// The program day has no exercise with the record's name
    UnknownExercise,
    /// The set index is outside `1..=exercise.sets`
    SetOutOfRange,
    /// No weight was logged for the set
    UnloggedWeight,
    /// The exercise prescribes zero repetitions
    ZeroReps,
    /// The session date is outside the reporting window
    OutsideWindow,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UnknownDay => "day not in program",
            Self::UnknownExercise => "exercise not in program day",
            Self::SetOutOfRange => "set index outside prescribed sets",
            Self::UnloggedWeight => "weight not logged",
            Self::ZeroReps => "exercise has zero reps",
            Self::OutsideWindow => "date outside reporting window",
        };
        f.write_str(reason)
    }
}

/// A logged set matched against its program day and exercise
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSet<'a> {
    /// Program day of the record's weekday
    pub day: &'a ProgramDay,
    /// Prescribed exercise
    pub exercise: &'a Exercise,
    /// Workout label, or the record's weekday when the day has none
    pub workout_label: &'a str,
}

/// Lookup from weekday to program day, built once per program snapshot
#[derive(Debug, Clone, Default)]
pub struct ProgramIndex {
    days: HashMap<String, ProgramDay>,
}

impl ProgramIndex {
    /// Index the days of a program
    ///
    /// Weekdays are keyed case-insensitively. When a weekday appears twice the
    /// first occurrence is kept.
    #[must_use]
    pub fn new(days: &[ProgramDay]) -> Self {
        let mut index = HashMap::with_capacity(days.len());
        for day in days {
            let key = weekday_key(&day.day);
            if index.contains_key(&key) {
                debug!(day = %day.day, "Duplicate program weekday ignored");
                continue;
            }
            index.insert(key, day.clone());
        }
        Self { days: index }
    }

    /// Index the program in effect, or an empty index when there is none
    #[must_use]
    pub fn from_program(program: Option<&Program>) -> Self {
        program.map_or_else(Self::default, |program| Self::new(&program.days))
    }

    /// Program day for a weekday name in any case
    #[must_use]
    pub fn get(&self, day: &str) -> Option<&ProgramDay> {
        self.days.get(&weekday_key(day))
    }

    /// Program day for a weekday, whichever language the program was authored in
    #[must_use]
    pub fn day_for(&self, weekday: Weekday) -> Option<&ProgramDay> {
        self.get(weekday.label())
            .or_else(|| self.get(weekday.english_name()))
    }

    /// Number of indexed weekdays
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the program has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Grouping label of a weekday
    ///
    /// The program day's workout label when it has one, otherwise the weekday
    /// itself. Weekdays absent from the program are labelled by their name too.
    #[must_use]
    pub fn label_for<'a>(&'a self, day: &'a str) -> &'a str {
        match self.get(day).map(ProgramDay::workout_label) {
            Some(label) if !label.is_empty() => label,
            _ => day.trim(),
        }
    }

    /// Match a logged set against the program
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when the weekday, the exercise, or the set
    /// index cannot be resolved. Weight and reps are not inspected here.
    pub fn resolve<'a>(
        &'a self,
        record: &'a ExerciseSetRecord,
    ) -> Result<ResolvedSet<'a>, SkipReason> {
        let day = self.get(&record.day).ok_or(SkipReason::UnknownDay)?;
        let exercise = day
            .exercise(&record.exercise_name)
            .ok_or(SkipReason::UnknownExercise)?;
        if !exercise.accepts_set(record.set_index) {
            return Err(SkipReason::SetOutOfRange);
        }
        let label = day.workout_label();
        Ok(ResolvedSet {
            day,
            exercise,
            workout_label: if label.is_empty() {
                record.day.trim()
            } else {
                label
            },
        })
    }
}
