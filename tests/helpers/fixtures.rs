// ABOUTME: Program, tracking, and session fixtures for integration tests
// ABOUTME: A small French weekly program with matching tracking days and logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use pierre_progress::config::SessionConfig;
use pierre_progress::models::{
    Exercise, ExerciseSetRecord, Food, Meal, Program, ProgramDay, TrackingDay, TrackingField,
};
use pierre_progress::session::{ClientIdentity, Role, Session, SessionManager};

/// Client used by most tests
pub const CLIENT_ID: i64 = 7;
/// Coach of [`CLIENT_ID`]
pub const COACH_ID: i64 = 3;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn exercise(name: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        name: name.to_owned(),
        sets,
        reps,
    }
}

pub fn program_day(day: &str, workout: Option<&str>, exercises: Vec<Exercise>) -> ProgramDay {
    ProgramDay {
        day: day.to_owned(),
        workout: workout.map(str::to_owned),
        daily_calories: 0.0,
        meals: BTreeMap::new(),
        exercises,
    }
}

pub fn meal(food: &str, calories: f64) -> Meal {
    Meal {
        foods: vec![Food {
            name: food.to_owned(),
            calories,
        }],
        meal_calories: calories,
    }
}

pub fn program(id: i64, title: &str, days: Vec<ProgramDay>) -> Program {
    Program {
        id,
        title: title.to_owned(),
        coach_id: Some(COACH_ID),
        client_id: Some(CLIENT_ID),
        notes: None,
        calories: 0.0,
        days,
    }
}

/// Weekly program: back on Monday, chest on Tuesday, legs on Thursday,
/// an unlabelled core day on Saturday
pub fn sample_program() -> Program {
    let mut monday = program_day(
        "Lundi",
        Some("Dos"),
        vec![exercise("Tractions", 4, 8), exercise("Rowing", 3, 10)],
    );
    monday.daily_calories = 2400.0;
    monday
        .meals
        .insert("breakfast".to_owned(), meal("Flocons d'avoine 80g", 450.0));
    monday
        .meals
        .insert("lunch".to_owned(), meal("Riz et poulet", 800.0));
    monday
        .meals
        .insert("dinner".to_owned(), meal("Saumon et légumes", 700.0));
    monday
        .meals
        .insert("snack".to_owned(), meal("Amandes 30g", 180.0));

    program(
        1,
        "Prise de masse",
        vec![
            monday,
            program_day(
                "Mardi",
                Some("Pectoraux"),
                vec![exercise("Développé couché", 3, 10)],
            ),
            program_day("Jeudi", Some("Jambes"), vec![exercise("Squat", 3, 5)]),
            program_day("Samedi", None, vec![exercise("Gainage", 3, 0), exercise("Burpees", 2, 12)]),
        ],
    )
}

pub fn set(
    day: &str,
    on: NaiveDate,
    exercise_name: &str,
    set_index: i64,
    weight: Option<f64>,
) -> ExerciseSetRecord {
    ExerciseSetRecord {
        id: None,
        client_id: Some(CLIENT_ID),
        day: day.to_owned(),
        date: on,
        exercise_name: exercise_name.to_owned(),
        set_index,
        weight,
    }
}

/// Tracking day with the four flags in display order
pub fn tracking(day: &str, flags: [bool; 4]) -> TrackingDay {
    let mut record = TrackingDay::new(day);
    for (field, value) in TrackingField::ALL.into_iter().zip(flags) {
        record.set_flag(field, value);
    }
    record
}

pub fn session_manager() -> SessionManager {
    SessionManager::new(&SessionConfig::default())
}

pub fn session_for(client_id: i64, role: Role) -> Session {
    let manager = session_manager();
    let token = manager
        .issue_token(ClientIdentity { client_id, role }, Duration::minutes(60))
        .unwrap();
    manager.login(&token).unwrap()
}

pub fn client_session() -> Session {
    session_for(CLIENT_ID, Role::Client)
}

pub fn coach_session() -> Session {
    session_for(COACH_ID, Role::Coach)
}
