// ABOUTME: Program and tracking store abstractions consumed by the report service
// ABOUTME: Async traits with HTTP implementations against the program and tracking services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stores
//!
//! The engine reads two independent snapshots: the program a coach authored and
//! the facts a client tracked. Both are behind async traits so hosts can swap the
//! HTTP implementations for in-memory ones.

use std::fmt;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{
    ClientComplianceSummary, ExerciseSetRecord, ExerciseSetUpsert, Program, TrackingDay,
    TrackingField,
};
use crate::session::Session;

/// Shared HTTP client with connection pooling
pub mod http_client;

/// HTTP implementations of the stores
pub mod http;

pub use http::{HttpProgramStore, HttpTrackingStore};

/// Whose data a read is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSubject {
    /// The client the session belongs to
    Me,
    /// A specific client, as seen by their coach
    Client(i64),
}

impl ReportSubject {
    /// Client identifier the subject resolves to for a session
    #[must_use]
    pub const fn client_id(self, session: &Session) -> i64 {
        match self {
            Self::Me => session.client_id(),
            Self::Client(client_id) => client_id,
        }
    }
}

impl fmt::Display for ReportSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str("me"),
            Self::Client(client_id) => write!(f, "client:{client_id}"),
        }
    }
}

/// Source of coach-authored programs
#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// Programs assigned to a client, oldest first
    ///
    /// A client without any program yields an empty list.
    async fn programs_for_client(
        &self,
        session: &Session,
        client_id: i64,
    ) -> AppResult<Vec<Program>>;

    /// Program currently in effect for a client
    async fn current_program(
        &self,
        session: &Session,
        client_id: i64,
    ) -> AppResult<Option<Program>> {
        let programs = self.programs_for_client(session, client_id).await?;
        Ok(Program::current(programs))
    }
}

/// Source and sink of client tracking facts
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Tracking days of the subject's week
    async fn tracking_week(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<TrackingDay>>;

    /// Logged exercise sets of the subject
    async fn exercise_sets(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<ExerciseSetRecord>>;

    /// Set flags of one of the session client's days, returning the stored day
    async fn update_day(
        &self,
        session: &Session,
        day: &str,
        updates: &[(TrackingField, bool)],
    ) -> AppResult<TrackingDay>;

    /// Create or update one logged set of the session client, returning the stored record
    async fn upsert_set(
        &self,
        session: &Session,
        upsert: &ExerciseSetUpsert,
    ) -> AppResult<ExerciseSetRecord>;

    /// Average compliance of every client of a coach
    async fn coach_overview(
        &self,
        session: &Session,
        coach_id: i64,
    ) -> AppResult<Vec<ClientComplianceSummary>>;
}
