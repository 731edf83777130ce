// ABOUTME: Report commands for pierre-progress
// ABOUTME: Offline snapshot reports, live reports, today's plan, and coach overviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::NaiveDate;
use pierre_progress::{
    errors::AppResult,
    models::{ReportWindow, Weekday},
    report::ProgressService,
    snapshot::ProgressSnapshot,
    stores::{ProgramStore, ReportSubject, TrackingStore},
};
use tracing::info;

use super::Context;
use crate::helpers::display::{display_overview, display_report, display_today, print_json};

/// Report computed from a snapshot file
pub async fn offline(
    ctx: &Context<'_>,
    snapshot: &Path,
    week: Option<NaiveDate>,
) -> AppResult<()> {
    info!("Loading snapshot {}", snapshot.display());
    let snapshot = ProgressSnapshot::load(snapshot).await?;
    let report = snapshot.report(week.map(ReportWindow::week_of));

    if ctx.json {
        print_json(&report)
    } else {
        display_report(&report);
        Ok(())
    }
}

/// Report fetched from the services
pub async fn fetch<P, T>(
    ctx: &Context<'_>,
    service: &ProgressService<P, T>,
    client: Option<i64>,
    week: Option<NaiveDate>,
) -> AppResult<()>
where
    P: ProgramStore + ?Sized,
    T: TrackingStore + ?Sized,
{
    let subject = client.map_or(ReportSubject::Me, ReportSubject::Client);
    let report = service
        .load_report(ctx.session, subject, week.map(ReportWindow::week_of))
        .await;

    if ctx.json {
        print_json(&report)
    } else {
        display_report(&report);
        Ok(())
    }
}

/// Plan and tracking state of one weekday
pub async fn today<P, T>(
    ctx: &Context<'_>,
    service: &ProgressService<P, T>,
    weekday: Weekday,
) -> AppResult<()>
where
    P: ProgramStore + ?Sized,
    T: TrackingStore + ?Sized,
{
    let plan = service.load_today(ctx.session, weekday).await?;
    if ctx.json {
        print_json(&plan)
    } else {
        display_today(&plan);
        Ok(())
    }
}

/// Average compliance of every client of a coach
pub async fn overview<P, T>(
    ctx: &Context<'_>,
    service: &ProgressService<P, T>,
    coach: Option<i64>,
) -> AppResult<()>
where
    P: ProgramStore + ?Sized,
    T: TrackingStore + ?Sized,
{
    let session = ctx.require_session()?;
    let coach_id = coach.unwrap_or_else(|| session.client_id());
    let summaries = service.coach_overview(Some(session), coach_id).await?;
    if ctx.json {
        print_json(&summaries)
    } else {
        display_overview(coach_id, &summaries);
        Ok(())
    }
}
