// ABOUTME: In-memory program and tracking stores for service and sync tests
// ABOUTME: Each read and write path can be switched to fail independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Local;
use pierre_progress::constants::service_names;
use pierre_progress::errors::{AppError, AppResult};
use pierre_progress::intelligence::ComplianceAggregator;
use pierre_progress::models::{
    ClientComplianceSummary, ExerciseSetRecord, ExerciseSetUpsert, Program, TrackingDay,
    TrackingField,
};
use pierre_progress::session::Session;
use pierre_progress::stores::{ProgramStore, ReportSubject, TrackingStore};

/// Program and tracking data held in memory, keyed by client
#[derive(Default)]
pub struct InMemoryStore {
    programs: Mutex<HashMap<i64, Vec<Program>>>,
    tracking: Mutex<HashMap<i64, Vec<TrackingDay>>>,
    sets: Mutex<HashMap<i64, Vec<ExerciseSetRecord>>>,
    overview: Mutex<HashMap<i64, Vec<ClientComplianceSummary>>>,
    pub fail_programs: AtomicBool,
    pub fail_tracking: AtomicBool,
    pub fail_sets: AtomicBool,
    pub fail_writes: AtomicBool,
    pub write_calls: AtomicUsize,
    /// Flag values sent by `update_day`, in arrival order
    pub sent_updates: Mutex<Vec<(String, TrackingField, bool)>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_programs(self, client_id: i64, programs: Vec<Program>) -> Self {
        self.programs.lock().unwrap().insert(client_id, programs);
        self
    }

    pub fn with_tracking(self, client_id: i64, days: Vec<TrackingDay>) -> Self {
        self.tracking.lock().unwrap().insert(client_id, days);
        self
    }

    pub fn with_sets(self, client_id: i64, sets: Vec<ExerciseSetRecord>) -> Self {
        self.sets.lock().unwrap().insert(client_id, sets);
        self
    }

    pub fn with_overview(self, coach_id: i64, summaries: Vec<ClientComplianceSummary>) -> Self {
        self.overview.lock().unwrap().insert(coach_id, summaries);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn stored_tracking(&self, client_id: i64) -> Vec<TrackingDay> {
        self.tracking
            .lock()
            .unwrap()
            .get(&client_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn stored_sets(&self, client_id: i64) -> Vec<ExerciseSetRecord> {
        self.sets
            .lock()
            .unwrap()
            .get(&client_id)
            .cloned()
            .unwrap_or_default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 100
    }

    fn tracking_down() -> AppError {
        AppError::service_unavailable(service_names::TRACKING_SERVICE, "connection refused")
    }
}

#[async_trait]
impl ProgramStore for InMemoryStore {
    async fn programs_for_client(
        &self,
        _session: &Session,
        client_id: i64,
    ) -> AppResult<Vec<Program>> {
        if self.fail_programs.load(Ordering::SeqCst) {
            return Err(AppError::service_unavailable(
                service_names::PROGRAM_SERVICE,
                "connection refused",
            ));
        }
        Ok(self
            .programs
            .lock()
            .unwrap()
            .get(&client_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl TrackingStore for InMemoryStore {
    async fn tracking_week(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<TrackingDay>> {
        if self.fail_tracking.load(Ordering::SeqCst) {
            return Err(AppError::external_service(
                service_names::TRACKING_SERVICE,
                "HTTP 500",
            ));
        }
        Ok(self.stored_tracking(subject.client_id(session)))
    }

    async fn exercise_sets(
        &self,
        session: &Session,
        subject: ReportSubject,
    ) -> AppResult<Vec<ExerciseSetRecord>> {
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(Self::tracking_down());
        }
        Ok(self.stored_sets(subject.client_id(session)))
    }

    async fn update_day(
        &self,
        session: &Session,
        day: &str,
        updates: &[(TrackingField, bool)],
    ) -> AppResult<TrackingDay> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        {
            let mut sent = self.sent_updates.lock().unwrap();
            for (field, value) in updates {
                sent.push((day.to_owned(), *field, *value));
            }
        }
        tokio::task::yield_now().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::tracking_down());
        }

        let client_id = session.client_id();
        let mut tracking = self.tracking.lock().unwrap();
        let days = tracking.entry(client_id).or_default();
        let key = day.trim().to_lowercase();
        let position = days.iter().position(|existing| existing.key() == key);
        let mut stored = ComplianceAggregator::apply(
            position.map(|i| &days[i]),
            day,
            updates,
        );
        stored.client_id = Some(client_id);
        if stored.id.is_none() {
            stored.id = Some(self.next_id());
        }
        match position {
            Some(i) => days[i] = stored.clone(),
            None => days.push(stored.clone()),
        }
        Ok(stored)
    }

    async fn upsert_set(
        &self,
        session: &Session,
        upsert: &ExerciseSetUpsert,
    ) -> AppResult<ExerciseSetRecord> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::tracking_down());
        }
        upsert.validate()?;

        let client_id = session.client_id();
        let mut record = upsert.to_record(Local::now().date_naive());
        record.client_id = Some(client_id);

        let mut sets = self.sets.lock().unwrap();
        let records = sets.entry(client_id).or_default();
        match records.iter().position(|existing| existing.key() == record.key()) {
            Some(i) => {
                record.id = records[i].id;
                records[i] = record.clone();
            }
            None => {
                record.id = Some(self.next_id());
                records.push(record.clone());
            }
        }
        Ok(record)
    }

    async fn coach_overview(
        &self,
        _session: &Session,
        coach_id: i64,
    ) -> AppResult<Vec<ClientComplianceSummary>> {
        if self.fail_tracking.load(Ordering::SeqCst) {
            return Err(Self::tracking_down());
        }
        Ok(self
            .overview
            .lock()
            .unwrap()
            .get(&coach_id)
            .cloned()
            .unwrap_or_default())
    }
}
