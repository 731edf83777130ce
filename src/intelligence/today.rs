// ABOUTME: Today's plan for a client: workout label, meal checklist, and tracking state
// ABOUTME: Joins one program day with the matching tracking record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::program_index::ProgramIndex;
use crate::constants::defaults::REST_DAY_LABEL;
use crate::models::{Exercise, TrackingDay, TrackingField, Weekday};

/// One meal of the day with its completion state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCheck {
    /// Meal identifier as authored in the program
    pub meal: String,
    /// Tracking flag of the meal
    pub field: TrackingField,
    /// Calories planned for the meal
    pub calories: f64,
    /// Whether the client marked it done
    pub done: bool,
}

/// What a client should do on one weekday and what they already did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayPlan {
    /// Weekday of the plan
    pub weekday: Weekday,
    /// Workout label, "Repos" on rest days
    pub workout_label: String,
    /// Calories planned for the day
    pub daily_calories: f64,
    /// Meals the tracking flags cover
    pub meals: Vec<MealCheck>,
    /// Meal identifiers without a tracking flag
    pub unmapped_meals: Vec<String>,
    /// Prescribed exercises
    pub exercises: Vec<Exercise>,
    /// Tracking record of the day, zero-valued when nothing was tracked
    pub tracking: TrackingDay,
    /// Whether the program has a day for this weekday
    pub has_program_day: bool,
}

impl TodayPlan {
    /// Build the plan of `weekday` from a program index and a tracking week
    #[must_use]
    pub fn build(index: &ProgramIndex, tracking: &[TrackingDay], weekday: Weekday) -> Self {
        let tracking = tracking
            .iter()
            .rev()
            .find(|day| Weekday::from_name(&day.day) == Some(weekday))
            .cloned()
            .map_or_else(|| TrackingDay::new(weekday.label()), TrackingDay::normalized);

        let Some(day) = index.day_for(weekday) else {
            return Self {
                weekday,
                workout_label: REST_DAY_LABEL.to_owned(),
                daily_calories: 0.0,
                meals: Vec::new(),
                unmapped_meals: Vec::new(),
                exercises: Vec::new(),
                tracking,
                has_program_day: false,
            };
        };

        let mut meals = Vec::with_capacity(day.meals.len());
        let mut unmapped_meals = Vec::new();
        for (name, meal) in &day.meals {
            match TrackingField::from_meal(name) {
                Ok(field) => meals.push(MealCheck {
                    meal: name.clone(),
                    field,
                    calories: meal.meal_calories,
                    done: tracking.flag(field),
                }),
                Err(_) => unmapped_meals.push(name.clone()),
            }
        }
        meals.sort_by_key(|check| TrackingField::ALL.iter().position(|f| *f == check.field));

        let label = day.workout_label();
        Self {
            weekday,
            workout_label: if label.is_empty() {
                REST_DAY_LABEL.to_owned()
            } else {
                label.to_owned()
            },
            daily_calories: day.daily_calories,
            meals,
            unmapped_meals,
            exercises: day.exercises.clone(),
            tracking,
            has_program_day: true,
        }
    }

    /// Whether every tracked action of the day is done
    #[must_use]
    pub fn is_complete(&self) -> bool {
        TrackingField::ALL
            .into_iter()
            .all(|field| self.tracking.flag(field))
    }
}
