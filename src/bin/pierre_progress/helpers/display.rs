// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-progress
// ABOUTME: Plain-text tables for reports, today's plan, and tracking writes

use pierre_progress::{
    errors::AppResult,
    intelligence::TodayPlan,
    models::{
        ClientComplianceSummary, ExerciseSetRecord, ProgressReport, TrackingDay, TrackingField,
    },
    tracking_sync::SyncOutcome,
};
use serde::Serialize;

/// Print any value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn check(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn format_weight(weight: Option<f64>) -> String {
    weight.map_or_else(|| "-".to_owned(), |w| format!("{w}"))
}

/// Display a full progress report
pub fn display_report(report: &ProgressReport) {
    println!(
        "\nProgram: {}",
        report.program_title.as_deref().unwrap_or("(none)")
    );
    println!("{}", "=".repeat(60));

    for notice in &report.notices {
        println!("! {notice}");
    }

    println!("\nCompliance");
    match report.weekly_compliance.average {
        Some(average) => println!(
            "   Weekly average: {average:.2}% over {} tracked day(s)",
            report.weekly_compliance.tracked_days
        ),
        None => println!("   Weekly average: no tracked days"),
    }
    for day in &report.tracking {
        println!(
            "   {:<10} {} {} {} {}  {:>6.2}%",
            day.day,
            check(day.meal_morning_done),
            check(day.meal_noon_done),
            check(day.meal_evening_done),
            check(day.workout_done),
            day.compliance_rate
        );
    }

    println!("\nVolume by workout");
    if report.volume_by_workout.is_empty() {
        println!("   (no logged sets)");
    }
    for point in &report.volume_by_workout {
        println!("   {:<20} {:>10}", point.workout_label, point.volume);
    }

    println!("\nVolume evolution");
    for row in &report.volume_evolution {
        let cells: Vec<String> = row
            .per_workout_volume
            .iter()
            .map(|(label, volume)| format!("{label}={volume}"))
            .collect();
        println!("   {}  {}", row.date, cells.join("  "));
    }

    println!("\nCharge details");
    for group in &report.charge_details {
        println!("   {} - {}", group.date, group.workout_label);
        for row in &group.rows {
            let weights: Vec<String> = row.weights.iter().copied().map(format_weight).collect();
            println!("      {:<24} {}", row.exercise_name, weights.join(" / "));
        }
    }
}

/// Display today's plan
pub fn display_today(plan: &TodayPlan) {
    println!("\n{} - {}", plan.weekday, plan.workout_label);
    println!("{}", "=".repeat(40));
    if !plan.has_program_day {
        println!("No program day for {}", plan.weekday);
    }
    if plan.daily_calories > 0.0 {
        println!("Calories: {}", plan.daily_calories);
    }
    for meal in &plan.meals {
        println!("   {} {:<12} {} kcal", check(meal.done), meal.meal, meal.calories);
    }
    for meal in &plan.unmapped_meals {
        println!("   ?   {meal} (not tracked)");
    }
    println!("   {} workout", check(plan.tracking.flag(TrackingField::Workout)));
    for exercise in &plan.exercises {
        println!("      {} {}x{}", exercise.name, exercise.sets, exercise.reps);
    }
    println!("Compliance: {:.2}%", plan.tracking.compliance_rate);
    if plan.is_complete() {
        println!("Day complete");
    }
}

/// Display the result of a toggle
pub fn display_toggle_outcome(field: TrackingField, outcome: &SyncOutcome<TrackingDay>) {
    println!(
        "{} {} on {}: compliance {:.2}%",
        check(outcome.value.flag(field)),
        field,
        outcome.value.day,
        outcome.value.compliance_rate
    );
    if !outcome.reconciled {
        println!("Warning: the tracking service did not confirm the change");
    }
}

/// Display the result of a set log
pub fn display_set_outcome(outcome: &SyncOutcome<ExerciseSetRecord>) {
    let record = &outcome.value;
    println!(
        "{} {} set {} on {}: {}",
        record.day,
        record.exercise_name,
        record.set_index,
        record.date,
        format_weight(record.weight)
    );
    if !outcome.reconciled {
        println!("Warning: the tracking service did not confirm the change");
    }
}

/// Display a coach overview
pub fn display_overview(coach_id: i64, summaries: &[ClientComplianceSummary]) {
    println!("\nClients of coach {coach_id}");
    println!("{}", "=".repeat(50));
    if summaries.is_empty() {
        println!("   (no clients)");
    }
    for summary in summaries {
        println!(
            "   {:>6}  {:<30} {:>6.2}%",
            summary.client_id, summary.email, summary.average_compliance
        );
    }
}
