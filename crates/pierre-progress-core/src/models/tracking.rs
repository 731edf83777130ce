// ABOUTME: Client tracking models: daily completion flags and logged exercise sets
// ABOUTME: TrackingDay keeps its compliance rate derived from the four tracked flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{limits::TRACKED_ACTIONS_PER_DAY, tracking_keys};
use crate::errors::{AppError, AppResult};
use crate::models::weekday::weekday_key;

/// The four boolean actions tracked each day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackingField {
    /// Morning meal eaten as planned
    #[serde(rename = "meal_morning_done", alias = "meal_matin_done")]
    MealMorning,
    /// Noon meal eaten as planned
    #[serde(rename = "meal_noon_done", alias = "meal_midi_done")]
    MealNoon,
    /// Evening meal eaten as planned
    #[serde(rename = "meal_evening_done", alias = "meal_soir_done")]
    MealEvening,
    /// Workout completed
    #[serde(rename = "workout_done")]
    Workout,
}

impl TrackingField {
    /// All tracked fields in display order
    pub const ALL: [Self; 4] = [
        Self::MealMorning,
        Self::MealNoon,
        Self::MealEvening,
        Self::Workout,
    ];

    /// Canonical wire key of the flag
    #[must_use]
    pub const fn wire_key(self) -> &'static str {
        match self {
            Self::MealMorning => tracking_keys::MEAL_MORNING_DONE,
            Self::MealNoon => tracking_keys::MEAL_NOON_DONE,
            Self::MealEvening => tracking_keys::MEAL_EVENING_DONE,
            Self::Workout => tracking_keys::WORKOUT_DONE,
        }
    }

    /// Resolve a wire key, accepting the legacy French meal keys
    #[must_use]
    pub fn from_wire_key(key: &str) -> Option<Self> {
        match key {
            tracking_keys::MEAL_MORNING_DONE | tracking_keys::LEGACY_MEAL_MORNING_DONE => {
                Some(Self::MealMorning)
            }
            tracking_keys::MEAL_NOON_DONE | tracking_keys::LEGACY_MEAL_NOON_DONE => {
                Some(Self::MealNoon)
            }
            tracking_keys::MEAL_EVENING_DONE | tracking_keys::LEGACY_MEAL_EVENING_DONE => {
                Some(Self::MealEvening)
            }
            tracking_keys::WORKOUT_DONE => Some(Self::Workout),
            _ => None,
        }
    }

    /// Map a program meal identifier to the flag that tracks it
    ///
    /// # Errors
    ///
    /// Returns `UnknownMeal` for identifiers outside the closed mapping.
    pub fn from_meal(meal: &str) -> AppResult<Self> {
        match meal.trim().to_lowercase().as_str() {
            "breakfast" | "morning" | "matin" => Ok(Self::MealMorning),
            "lunch" | "noon" | "midi" => Ok(Self::MealNoon),
            "dinner" | "evening" | "soir" => Ok(Self::MealEvening),
            _ => Err(AppError::unknown_meal(meal)),
        }
    }

    /// Whether this flag tracks a meal
    #[must_use]
    pub const fn is_meal(self) -> bool {
        !matches!(self, Self::Workout)
    }
}

impl FromStr for TrackingField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = Self::from_wire_key(s) {
            return Ok(field);
        }
        if s.trim().eq_ignore_ascii_case("workout") {
            return Ok(Self::Workout);
        }
        Self::from_meal(s)
    }
}

impl fmt::Display for TrackingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// Nullable booleans from the tracking service read as `false`
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Compliance rate for a number of completed actions
#[must_use]
pub fn compliance_rate_for(done: u32) -> f64 {
    f64::from(done.min(TRACKED_ACTIONS_PER_DAY)) / f64::from(TRACKED_ACTIONS_PER_DAY) * 100.0
}

/// Tracking record of one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingDay {
    /// Server identifier, absent until the day was first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Weekday name ("Lundi")
    pub day: String,
    /// Calendar date the record was created for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Morning meal flag
    #[serde(default, alias = "meal_matin_done", deserialize_with = "null_as_false")]
    pub meal_morning_done: bool,
    /// Noon meal flag
    #[serde(default, alias = "meal_midi_done", deserialize_with = "null_as_false")]
    pub meal_noon_done: bool,
    /// Evening meal flag
    #[serde(default, alias = "meal_soir_done", deserialize_with = "null_as_false")]
    pub meal_evening_done: bool,
    /// Workout flag
    #[serde(default, deserialize_with = "null_as_false")]
    pub workout_done: bool,
    /// Percentage of the four actions completed
    #[serde(default)]
    pub compliance_rate: f64,
}

impl TrackingDay {
    /// Zero-valued record for a weekday that has not been tracked yet
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            id: None,
            client_id: None,
            day: day.into(),
            date: None,
            meal_morning_done: false,
            meal_noon_done: false,
            meal_evening_done: false,
            workout_done: false,
            compliance_rate: 0.0,
        }
    }

    /// Current value of a flag
    #[must_use]
    pub const fn flag(&self, field: TrackingField) -> bool {
        match field {
            TrackingField::MealMorning => self.meal_morning_done,
            TrackingField::MealNoon => self.meal_noon_done,
            TrackingField::MealEvening => self.meal_evening_done,
            TrackingField::Workout => self.workout_done,
        }
    }

    /// Set a flag and recompute the compliance rate
    pub fn set_flag(&mut self, field: TrackingField, value: bool) {
        match field {
            TrackingField::MealMorning => self.meal_morning_done = value,
            TrackingField::MealNoon => self.meal_noon_done = value,
            TrackingField::MealEvening => self.meal_evening_done = value,
            TrackingField::Workout => self.workout_done = value,
        }
        self.recompute_compliance();
    }

    /// Number of completed actions
    #[must_use]
    pub fn done_count(&self) -> u32 {
        let count = TrackingField::ALL
            .into_iter()
            .filter(|field| self.flag(*field))
            .count();
        u32::try_from(count).unwrap_or(TRACKED_ACTIONS_PER_DAY)
    }

    /// Compliance rate implied by the flags
    #[must_use]
    pub fn derived_compliance_rate(&self) -> f64 {
        compliance_rate_for(self.done_count())
    }

    /// Overwrite the stored rate with the one implied by the flags
    pub fn recompute_compliance(&mut self) {
        self.compliance_rate = self.derived_compliance_rate();
    }

    /// Copy with the stored rate recomputed from the flags
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.recompute_compliance();
        self
    }

    /// Lookup key of the weekday
    #[must_use]
    pub fn key(&self) -> String {
        weekday_key(&self.day)
    }
}

/// Logical identity of one logged set in one session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseSetKey {
    /// Normalized weekday
    pub day: String,
    /// Exercise name
    pub exercise_name: String,
    /// Set index as logged; only `1..` is meaningful
    pub set_index: i64,
    /// Session date
    pub date: NaiveDate,
}

impl fmt::Display for ExerciseSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.day, self.date, self.exercise_name, self.set_index
        )
    }
}

/// Weight logged for one set of one exercise on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSetRecord {
    /// Server identifier, absent for optimistic local records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Weekday name of the program day the set belongs to
    pub day: String,
    /// Session date
    pub date: NaiveDate,
    /// Exercise name
    pub exercise_name: String,
    /// One-based set index; the service does not validate it
    pub set_index: i64,
    /// Weight lifted, `None` when the set was not logged
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ExerciseSetRecord {
    /// Logical key of the record
    #[must_use]
    pub fn key(&self) -> ExerciseSetKey {
        ExerciseSetKey {
            day: weekday_key(&self.day),
            exercise_name: self.exercise_name.clone(),
            set_index: self.set_index,
            date: self.date,
        }
    }
}

/// Create-or-update payload for one logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSetUpsert {
    /// Weekday name of the program day
    pub day: String,
    /// Session date; the current date is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Exercise name
    pub exercise_name: String,
    /// One-based set index
    pub set_index: i64,
    /// Weight lifted, `None` clears the set
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ExerciseSetUpsert {
    /// Check the payload before it is applied or sent
    ///
    /// # Errors
    ///
    /// Returns an error for an empty day or exercise name, a set index below 1,
    /// or a negative or non-finite weight.
    pub fn validate(&self) -> AppResult<()> {
        if self.day.trim().is_empty() {
            return Err(AppError::invalid_input("Field 'day' is required"));
        }
        if self.exercise_name.trim().is_empty() {
            return Err(AppError::invalid_input("Field 'exercise_name' is required"));
        }
        if self.set_index < 1 {
            return Err(AppError::out_of_range("Set index starts at 1"));
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "Weight must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }

    /// Fill in the session date when the payload has none
    #[must_use]
    pub fn dated(mut self, today: NaiveDate) -> Self {
        self.date.get_or_insert(today);
        self
    }

    /// Local record standing in for the server's answer until it arrives
    #[must_use]
    pub fn to_record(&self, today: NaiveDate) -> ExerciseSetRecord {
        ExerciseSetRecord {
            id: None,
            client_id: None,
            day: self.day.clone(),
            date: self.date.unwrap_or(today),
            exercise_name: self.exercise_name.clone(),
            set_index: self.set_index,
            weight: self.weight,
        }
    }
}
