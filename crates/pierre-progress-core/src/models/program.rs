// ABOUTME: Coach-authored weekly program models as returned by the program service
// ABOUTME: Program, ProgramDay, Exercise, Meal, and Food definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Individual food item within a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Food description including portion
    pub name: String,
    /// Estimated calories
    #[serde(default)]
    pub calories: f64,
}

/// One meal of a program day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Foods composing the meal
    #[serde(default)]
    pub foods: Vec<Food>,
    /// Total calories of the meal
    #[serde(default)]
    pub meal_calories: f64,
}

/// Prescribed exercise of a program day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, matched exactly against logged sets
    pub name: String,
    /// Number of sets; logged set indices are valid in `1..=sets`
    #[serde(deserialize_with = "negative_as_zero")]
    pub sets: u32,
    /// Repetitions per set; zero makes the exercise unusable for volume
    #[serde(deserialize_with = "negative_as_zero")]
    pub reps: u32,
}

impl Exercise {
    /// Whether a logged set index lies within the prescribed sets
    #[must_use]
    pub fn accepts_set(&self, set_index: i64) -> bool {
        set_index >= 1 && set_index <= i64::from(self.sets)
    }
}

/// Unvalidated counts from the program service; negatives read as zero
fn negative_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = i64::deserialize(deserializer)?;
    Ok(u32::try_from(count.max(0)).unwrap_or(u32::MAX))
}

/// One weekday of a program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
    /// Weekday name as authored ("Lundi")
    pub day: String,
    /// Workout label, the training focus of the day ("Dos")
    #[serde(default)]
    pub workout: Option<String>,
    /// Total calories of the day
    #[serde(default)]
    pub daily_calories: f64,
    /// Meals keyed by meal identifier ("breakfast", "lunch", ...)
    #[serde(default)]
    pub meals: BTreeMap<String, Meal>,
    /// Ordered exercise list
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl ProgramDay {
    /// Workout label with surrounding whitespace removed, empty when unset
    #[must_use]
    pub fn workout_label(&self) -> &str {
        self.workout.as_deref().map_or("", str::trim)
    }

    /// Find an exercise by exact name
    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.name == name)
    }
}

/// Weekly program assigned by a coach to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program identifier
    pub id: i64,
    /// Program title
    #[serde(default)]
    pub title: String,
    /// Authoring coach
    #[serde(default)]
    pub coach_id: Option<i64>,
    /// Assigned client
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Free-form coach notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Weekly calorie total
    #[serde(default)]
    pub calories: f64,
    /// Program days
    #[serde(default)]
    pub days: Vec<ProgramDay>,
}

impl Program {
    /// Pick the program in effect from a client's program list
    ///
    /// The program service returns programs in creation order; the last one
    /// is the current program.
    #[must_use]
    pub fn current(mut programs: Vec<Self>) -> Option<Self> {
        programs.pop()
    }
}
