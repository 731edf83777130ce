// ABOUTME: Tracking commands for pierre-progress
// ABOUTME: Toggle a daily action, log a set weight, and sign development tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use pierre_progress::{
    config::ProgressConfig,
    errors::{AppError, AppResult},
    models::{ExerciseSetUpsert, TrackingField, Weekday},
    session::{ClientIdentity, Role, SessionManager},
    stores::{HttpTrackingStore, ReportSubject, TrackingStore},
    tracking_sync::TrackingSync,
};
use tracing::info;

use super::Context;
use crate::helpers::display::{display_set_outcome, display_toggle_outcome, print_json};

/// Flip one tracked action of a day
pub async fn toggle(
    ctx: &Context<'_>,
    config: &ProgressConfig,
    day: Weekday,
    field: TrackingField,
) -> AppResult<()> {
    let session = ctx.require_session()?;
    let store = Arc::new(HttpTrackingStore::new(config.endpoints.clone()));
    let sync = TrackingSync::new(Arc::clone(&store));

    let week = store.tracking_week(session, ReportSubject::Me).await?;
    sync.load(week, Vec::new());

    info!("Toggling {} on {}", field, day);
    let outcome = sync.toggle(session, day.label(), field).await;
    if ctx.json {
        print_json(&outcome.value)
    } else {
        display_toggle_outcome(field, &outcome);
        Ok(())
    }
}

/// Log the weight of one set
pub async fn log_set(
    ctx: &Context<'_>,
    config: &ProgressConfig,
    day: Weekday,
    exercise_name: String,
    set_index: i64,
    weight: Option<f64>,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let session = ctx.require_session()?;
    let store = Arc::new(HttpTrackingStore::new(config.endpoints.clone()));
    let sync = TrackingSync::new(store);

    let outcome = sync
        .save_set(
            session,
            ExerciseSetUpsert {
                day: day.label().to_owned(),
                date,
                exercise_name,
                set_index,
                weight,
            },
        )
        .await?;

    if ctx.json {
        print_json(&outcome.value)
    } else {
        display_set_outcome(&outcome);
        Ok(())
    }
}

/// Sign a development token
pub fn issue_token(
    sessions: &SessionManager,
    client_id: i64,
    role: Role,
    minutes: i64,
) -> AppResult<()> {
    let lifetime = Duration::try_minutes(minutes)
        .filter(|lifetime| *lifetime > Duration::zero())
        .ok_or_else(|| AppError::out_of_range("Token lifetime must be positive"))?;
    let token = sessions.issue_token(ClientIdentity { client_id, role }, lifetime)?;
    println!("{token}");
    Ok(())
}
