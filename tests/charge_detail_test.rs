// ABOUTME: Unit tests for charge detail grouping and label collation
// ABOUTME: Validates per-session rows, gaps for unlogged sets, ordering, and locale sorting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::cmp::Ordering;

use helpers::fixtures::{date, exercise, program_day, sample_program, set};
use pierre_progress::intelligence::collation::collation_key;
use pierre_progress::intelligence::{locale_cmp, ChargeDetailGrouper, ProgramIndex};

#[test]
fn test_weights_keep_gaps_for_unlogged_sets() {
    let index = ProgramIndex::new(&[program_day(
        "Lundi",
        Some("Pectoraux"),
        vec![exercise("Bench", 3, 10)],
    )]);
    let on = date(2025, 1, 6);
    let records = vec![
        set("Lundi", on, "Bench", 1, Some(50.0)),
        set("Lundi", on, "Bench", 2, Some(55.0)),
        set("Lundi", on, "Bench", 3, None),
    ];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].workout_label, "Pectoraux");
    assert_eq!(groups[0].date, on);
    assert_eq!(groups[0].rows.len(), 1);
    assert_eq!(groups[0].rows[0].exercise_name, "Bench");
    assert_eq!(groups[0].rows[0].weights, vec![Some(50.0), Some(55.0), None]);
}

#[test]
fn test_rows_are_padded_to_prescribed_sets() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![set("Lundi", date(2025, 3, 3), "Tractions", 2, Some(5.0))];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    assert_eq!(groups[0].rows[0].weights, vec![None, Some(5.0), None, None]);
}

#[test]
fn test_rows_follow_program_order() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let on = date(2025, 3, 3);
    let records = vec![
        set("Lundi", on, "Hors programme", 1, Some(12.0)),
        set("Lundi", on, "Rowing", 1, Some(40.0)),
        set("Lundi", on, "Tractions", 1, Some(0.0)),
    ];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    let names: Vec<&str> = groups[0]
        .rows
        .iter()
        .map(|row| row.exercise_name.as_str())
        .collect();
    assert_eq!(names, vec!["Tractions", "Rowing", "Hors programme"]);

    // Exercises outside the program only get the slots that were logged
    assert_eq!(groups[0].rows[2].weights, vec![Some(12.0)]);
}

#[test]
fn test_unknown_days_are_kept_under_their_name() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![set(" Dimanche ", date(2025, 3, 9), "Marche", 2, Some(0.0))];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].workout_label, "Dimanche");
    assert_eq!(groups[0].rows[0].weights, vec![None, Some(0.0)]);
}

#[test]
fn test_set_beyond_prescription_extends_row() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![set("Jeudi", date(2025, 3, 6), "Squat", 5, Some(90.0))];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    assert_eq!(
        groups[0].rows[0].weights,
        vec![None, None, None, None, Some(90.0)]
    );
}

#[test]
fn test_unplaceable_set_indices_are_dropped() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let on = date(2025, 3, 6);
    let records = vec![
        set("Jeudi", on, "Squat", 0, Some(90.0)),
        set("Jeudi", on, "Squat", -1, Some(90.0)),
        set("Jeudi", on, "Squat", 1_000_000, Some(90.0)),
    ];

    assert!(ChargeDetailGrouper::new(&index).group(&records).is_empty());
}

#[test]
fn test_later_record_wins_for_same_set() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let on = date(2025, 3, 6);
    let records = vec![
        set("Jeudi", on, "Squat", 1, Some(90.0)),
        set("Jeudi", on, "Squat", 1, Some(95.0)),
    ];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    assert_eq!(groups[0].rows[0].weights[0], Some(95.0));
}

#[test]
fn test_groups_sorted_by_date_then_label() {
    let days = vec![
        program_day("Lundi", Some("Épaules"), vec![exercise("Militaire", 3, 8)]),
        program_day("Mardi", Some("dos"), vec![exercise("Rowing", 3, 10)]),
        program_day("Mercredi", Some("Fessiers"), vec![exercise("Hip thrust", 3, 10)]),
    ];
    let index = ProgramIndex::new(&days);
    let early = date(2025, 3, 3);
    let late = date(2025, 3, 10);
    let records = vec![
        set("Mercredi", late, "Hip thrust", 1, Some(80.0)),
        set("Lundi", late, "Militaire", 1, Some(30.0)),
        set("Mardi", late, "Rowing", 1, Some(50.0)),
        set("Mercredi", early, "Hip thrust", 1, Some(70.0)),
    ];

    let groups = ChargeDetailGrouper::new(&index).group(&records);
    let order: Vec<(chrono::NaiveDate, &str)> = groups
        .iter()
        .map(|group| (group.date, group.workout_label.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (early, "Fessiers"),
            (late, "dos"),
            (late, "Épaules"),
            (late, "Fessiers"),
        ]
    );
}

#[test]
fn test_collation_folds_case_and_accents() {
    assert_eq!(collation_key("Épaules"), "epaules");
    assert_eq!(collation_key("Cœur"), "coeur");
    assert_eq!(locale_cmp("dos", "Épaules"), Ordering::Less);
    assert_eq!(locale_cmp("écarté", "Fessiers"), Ordering::Less);
    assert_eq!(locale_cmp("Zumba", "abdos"), Ordering::Greater);
}

#[test]
fn test_collation_is_total() {
    assert_ne!(locale_cmp("Dos", "dos"), Ordering::Equal);
    assert_eq!(locale_cmp("Dos", "Dos"), Ordering::Equal);
    assert_eq!(
        locale_cmp("Dos", "dos"),
        locale_cmp("dos", "Dos").reverse()
    );
}
