// ABOUTME: Integration tests for optimistic tracking writes
// ABOUTME: Validates local-first updates, reconciliation, failure handling, and per-key ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use helpers::fixtures::{client_session, date, set, tracking, CLIENT_ID};
use helpers::stores::InMemoryStore;
use pierre_progress::errors::ErrorCode;
use pierre_progress::models::{ExerciseSetUpsert, TrackingField};
use pierre_progress::tracking_sync::TrackingSync;

fn upsert(set_index: i64, weight: Option<f64>) -> ExerciseSetUpsert {
    ExerciseSetUpsert {
        day: "Lundi".to_owned(),
        date: Some(date(2025, 3, 3)),
        exercise_name: "Tractions".to_owned(),
        set_index,
        weight,
    }
}

#[tokio::test]
async fn test_toggle_reconciles_with_stored_day() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    let outcome = sync
        .toggle(&session, "Lundi", TrackingField::MealMorning)
        .await;

    assert!(outcome.reconciled);
    assert!(outcome.value.meal_morning_done);
    assert!(outcome.value.id.is_some());
    assert!((outcome.value.compliance_rate - 25.0).abs() < f64::EPSILON);
    assert_eq!(sync.day("lundi").unwrap(), outcome.value);
    assert_eq!(store.stored_tracking(CLIENT_ID).len(), 1);
}

#[tokio::test]
async fn test_failed_toggle_keeps_optimistic_value() {
    let store = Arc::new(InMemoryStore::new().failing_writes());
    let sync = TrackingSync::new(Arc::clone(&store));
    sync.load(vec![tracking("Mardi", [true, false, false, false])], Vec::new());
    let session = client_session();

    let outcome = sync.toggle(&session, "Mardi", TrackingField::Workout).await;

    assert!(!outcome.reconciled);
    assert!(outcome.value.workout_done);
    assert!((outcome.value.compliance_rate - 50.0).abs() < f64::EPSILON);
    assert!(sync.day("Mardi").unwrap().workout_done);
    assert_eq!(store.write_calls.load(Ordering::SeqCst), 1);
    assert!(store.stored_tracking(CLIENT_ID).is_empty());
}

#[tokio::test]
async fn test_concurrent_toggles_apply_in_order() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    let (first, second) = tokio::join!(
        sync.toggle(&session, "Jeudi", TrackingField::Workout),
        sync.toggle(&session, "jeudi", TrackingField::Workout),
    );

    assert!(first.reconciled && second.reconciled);
    assert!(!sync.day("Jeudi").unwrap().workout_done);

    let sent: Vec<bool> = store
        .sent_updates
        .lock()
        .unwrap()
        .iter()
        .map(|(_, _, value)| *value)
        .collect();
    assert_eq!(sent, vec![true, false]);
}

#[tokio::test]
async fn test_write_locks_are_released() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    let (_, _, _) = tokio::join!(
        sync.toggle(&session, "Lundi", TrackingField::Workout),
        sync.toggle(&session, "Lundi", TrackingField::MealNoon),
        sync.save_set(&session, upsert(1, Some(40.0))),
    );
    for set_index in 1..=20 {
        sync.save_set(&session, upsert(set_index, Some(42.0)))
            .await
            .unwrap();
    }

    assert_eq!(sync.sets().len(), 20);
    assert_eq!(sync.pending_writes(), 0);
}

#[tokio::test]
async fn test_failed_writes_release_locks() {
    let store = Arc::new(InMemoryStore::new().failing_writes());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    sync.toggle(&session, "Mardi", TrackingField::Workout).await;
    sync.save_set(&session, upsert(3, Some(60.0))).await.unwrap();

    assert_eq!(sync.pending_writes(), 0);
}

#[tokio::test]
async fn test_save_set_reconciles_with_stored_record() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    let outcome = sync
        .save_set(&session, upsert(2, Some(12.5)))
        .await
        .unwrap();

    assert!(outcome.reconciled);
    assert!(outcome.value.id.is_some());
    assert_eq!(outcome.value.weight, Some(12.5));
    assert_eq!(sync.sets(), vec![outcome.value.clone()]);
    assert_eq!(store.stored_sets(CLIENT_ID), vec![outcome.value]);
}

#[tokio::test]
async fn test_failed_save_set_keeps_local_record() {
    let store = Arc::new(InMemoryStore::new().failing_writes());
    let sync = TrackingSync::new(Arc::clone(&store));
    sync.load(
        Vec::new(),
        vec![set("Lundi", date(2025, 3, 3), "Tractions", 1, Some(10.0))],
    );
    let session = client_session();

    let outcome = sync
        .save_set(&session, upsert(1, Some(0.0)))
        .await
        .unwrap();

    assert!(!outcome.reconciled);
    assert!(outcome.value.id.is_none());
    let sets = sync.sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].weight, Some(0.0));
}

#[tokio::test]
async fn test_invalid_set_is_not_written() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();

    let err = sync
        .save_set(&session, upsert(1, Some(-20.0)))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(sync.sets().is_empty());
    assert_eq!(store.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_undated_set_uses_given_day() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(Arc::clone(&store));
    let session = client_session();
    let mut payload = upsert(3, None);
    payload.date = None;

    let outcome = sync
        .save_set_on(&session, payload, date(2025, 3, 10))
        .await
        .unwrap();

    assert_eq!(outcome.value.date, date(2025, 3, 10));
    assert_eq!(outcome.value.weight, None);
}

#[tokio::test]
async fn test_load_replaces_state_and_orders_days() {
    let store = Arc::new(InMemoryStore::new());
    let sync = TrackingSync::new(store);
    sync.load(
        vec![
            tracking("Vendredi", [true, false, false, false]),
            tracking("Lundi", [false, false, false, true]),
        ],
        Vec::new(),
    );
    sync.load(
        vec![
            tracking("Mercredi", [true, true, false, false]),
            tracking("Lundi", [true, true, true, true]),
        ],
        Vec::new(),
    );

    let days: Vec<String> = sync.days().into_iter().map(|day| day.day).collect();
    assert_eq!(days, vec!["Lundi".to_owned(), "Mercredi".to_owned()]);
    assert!(sync.day("Vendredi").is_none());
}
