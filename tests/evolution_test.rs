// ABOUTME: Unit tests for volume evolution functionality
// ABOUTME: Validates date ordering, dense label coverage, and shared skip rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{date, sample_program, set};
use pierre_progress::intelligence::{ProgramIndex, VolumeAggregator, VolumeEvolutionBuilder};

#[test]
fn test_rows_are_dense_and_sorted_by_date() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![
        set("Jeudi", date(2025, 3, 6), "Squat", 1, Some(100.0)),
        set("Lundi", date(2025, 3, 3), "Rowing", 1, Some(40.0)),
        set("Lundi", date(2025, 3, 3), "Rowing", 2, Some(45.0)),
        set("Mardi", date(2025, 3, 4), "Développé couché", 1, Some(60.0)),
    ];

    let rows = VolumeEvolutionBuilder::new(&index).build(&records);
    let dates: Vec<_> = rows.iter().map(|row| row.date).collect();
    assert_eq!(dates, vec![date(2025, 3, 3), date(2025, 3, 4), date(2025, 3, 6)]);

    for row in &rows {
        assert_eq!(row.per_workout_volume.len(), 3);
        assert!(row.per_workout_volume.contains_key("Dos"));
        assert!(row.per_workout_volume.contains_key("Pectoraux"));
        assert!(row.per_workout_volume.contains_key("Jambes"));
    }

    assert!((rows[0].volume("Dos") - 850.0).abs() < f64::EPSILON);
    assert!((rows[0].volume("Jambes") - 0.0).abs() < f64::EPSILON);
    assert!((rows[1].volume("Pectoraux") - 600.0).abs() < f64::EPSILON);
    assert!((rows[2].volume("Jambes") - 500.0).abs() < f64::EPSILON);
    assert!((rows[2].volume("Dos") - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_dates_with_only_skipped_sets_are_absent() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![
        set("Lundi", date(2025, 3, 3), "Rowing", 1, None),
        set("Mercredi", date(2025, 3, 5), "Tractions", 1, Some(10.0)),
        set("Jeudi", date(2025, 3, 6), "Squat", 1, Some(80.0)),
    ];

    let rows = VolumeEvolutionBuilder::new(&index).build(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, date(2025, 3, 6));
    assert_eq!(rows[0].per_workout_volume.len(), 1);
}

#[test]
fn test_series_sums_match_per_workout_totals() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    let records = vec![
        set("Lundi", date(2025, 3, 3), "Tractions", 1, Some(12.5)),
        set("Lundi", date(2025, 3, 10), "Tractions", 1, Some(15.0)),
        set("Jeudi", date(2025, 3, 6), "Squat", 2, Some(101.3)),
    ];

    let rows = VolumeEvolutionBuilder::new(&index).build(&records);
    let totals = VolumeAggregator::new(&index).totals(&records);

    for (label, total) in totals {
        let series_sum: f64 = rows.iter().map(|row| row.volume(&label)).sum();
        assert!((series_sum - total).abs() < 1e-9, "{label}: {series_sum} != {total}");
    }
}

#[test]
fn test_empty_input_yields_empty_series() {
    let program = sample_program();
    let index = ProgramIndex::from_program(Some(&program));
    assert!(VolumeEvolutionBuilder::new(&index).build(&[]).is_empty());
}
