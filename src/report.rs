// ABOUTME: Progress report assembly from program and tracking snapshots
// ABOUTME: Concurrent store fetches that degrade to a partial report with user-visible notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    ChargeDetailGrouper, ComplianceAggregator, ProgramIndex, TodayPlan, VolumeAggregator,
    VolumeEvolutionBuilder,
};
use crate::logging::AppLogger;
use crate::models::{
    ClientComplianceSummary, ExerciseSetRecord, Program, ProgressReport, ReportWindow,
    TrackingDay, Weekday,
};
use crate::session::Session;
use crate::stores::{ProgramStore, ReportSubject, TrackingStore};

/// Build a report from snapshots already in hand
///
/// `window` restricts the per-workout volume only; the time series and the
/// charge table cover every date in the snapshot.
#[must_use]
pub fn build_report(
    program: Option<&Program>,
    tracking: &[TrackingDay],
    sets: &[ExerciseSetRecord],
    window: Option<ReportWindow>,
) -> ProgressReport {
    let index = ProgramIndex::from_program(program);

    let volume = VolumeAggregator::new(&index);
    let volume = match window {
        Some(window) => volume.with_window(window),
        None => volume,
    };

    ProgressReport {
        program_title: program.map(|p| p.title.clone()),
        weekly_compliance: ComplianceAggregator::weekly_summary(tracking),
        tracking: tracking
            .iter()
            .cloned()
            .map(TrackingDay::normalized)
            .collect(),
        volume_by_workout: volume.aggregate(sets),
        volume_evolution: VolumeEvolutionBuilder::new(&index).build(sets),
        charge_details: ChargeDetailGrouper::new(&index).group(sets),
        notices: Vec::new(),
    }
}

/// Unwrap a fetch result, turning a failure into a notice
fn or_notice<T: Default>(result: AppResult<T>, notices: &mut Vec<String>) -> T {
    result.unwrap_or_else(|e| {
        warn!(code = ?e.code, "Report data unavailable: {}", e.message);
        notices.push(e.user_message());
        T::default()
    })
}

/// Loads snapshots from the stores and runs the engine over them
pub struct ProgressService<P: ProgramStore + ?Sized, T: TrackingStore + ?Sized> {
    programs: Arc<P>,
    tracking: Arc<T>,
}

impl<P: ProgramStore + ?Sized, T: TrackingStore + ?Sized> ProgressService<P, T> {
    /// Service over a program store and a tracking store
    pub const fn new(programs: Arc<P>, tracking: Arc<T>) -> Self {
        Self { programs, tracking }
    }

    /// Load and build the report of a subject
    ///
    /// Without a session nothing is fetched and the report is empty. The three
    /// snapshots are fetched concurrently; any that fails leaves its part of
    /// the report empty and adds a notice.
    pub async fn load_report(
        &self,
        session: Option<&Session>,
        subject: ReportSubject,
        window: Option<ReportWindow>,
    ) -> ProgressReport {
        let Some(session) = session else {
            warn!(%subject, "No client identity resolved, skipping report fetches");
            return ProgressReport::default();
        };

        let request_id = Uuid::new_v4().to_string();
        let client_id = subject.client_id(session);
        let span = info_span!("progress_report", %request_id, %subject, client_id);

        async {
            let (program, tracking, sets) = tokio::join!(
                self.programs.current_program(session, client_id),
                self.tracking.tracking_week(session, subject),
                self.tracking.exercise_sets(session, subject),
            );

            let mut notices = Vec::new();
            let program = or_notice(program, &mut notices);
            let tracking = or_notice(tracking, &mut notices);
            let sets = or_notice(sets, &mut notices);

            let mut report = build_report(program.as_ref(), &tracking, &sets, window);
            report.notices = notices;

            AppLogger::log_report_built(
                &request_id,
                &subject.to_string(),
                tracking.len(),
                sets.len(),
                report.notices.len(),
            );
            report
        }
        .instrument(span)
        .await
    }

    /// Today's plan of the session's client
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a session, or the first store failure.
    pub async fn load_today(
        &self,
        session: Option<&Session>,
        weekday: Weekday,
    ) -> AppResult<TodayPlan> {
        let session = session.ok_or_else(AppError::auth_required)?;
        let (program, tracking) = tokio::try_join!(
            self.programs.current_program(session, session.client_id()),
            self.tracking.tracking_week(session, ReportSubject::Me),
        )?;
        let index = ProgramIndex::from_program(program.as_ref());
        Ok(TodayPlan::build(&index, &tracking, weekday))
    }

    /// Compliance overview of a coach's clients
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a session, or the store failure.
    pub async fn coach_overview(
        &self,
        session: Option<&Session>,
        coach_id: i64,
    ) -> AppResult<Vec<ClientComplianceSummary>> {
        let session = session.ok_or_else(AppError::auth_required)?;
        self.tracking.coach_overview(session, coach_id).await
    }
}
