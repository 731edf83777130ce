// ABOUTME: Optimistic tracking writes: local state first, server value on success
// ABOUTME: Writes for the same tracking key are serialized so reconciliation follows issue order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Optimistic Tracking Sync
//!
//! Toggling a flag or logging a weight updates the local snapshot before the
//! tracking service answers. A successful write replaces the local value with the
//! stored one; a failed write keeps the local value and is only logged. There is
//! no rollback and no retry.

use std::future::Future;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::errors::AppResult;
use crate::intelligence::ComplianceAggregator;
use crate::logging::AppLogger;
use crate::models::{
    weekday_key, ExerciseSetKey, ExerciseSetRecord, ExerciseSetUpsert, TrackingDay,
    TrackingField, Weekday,
};
use crate::session::Session;
use crate::stores::TrackingStore;

/// Result of an optimistic write
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome<T> {
    /// Value now held locally
    pub value: T,
    /// Whether the server confirmed the write
    pub reconciled: bool,
}

/// Local tracking snapshot kept in step with the tracking service
pub struct TrackingSync<S: TrackingStore + ?Sized> {
    store: Arc<S>,
    days: DashMap<String, TrackingDay>,
    sets: DashMap<ExerciseSetKey, ExerciseSetRecord>,
    write_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<S: TrackingStore + ?Sized> TrackingSync<S> {
    /// Empty local state writing through `store`
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            days: DashMap::new(),
            sets: DashMap::new(),
            write_locks: DashMap::new(),
        }
    }

    /// Replace the local state with freshly fetched snapshots
    pub fn load(&self, days: Vec<TrackingDay>, sets: Vec<ExerciseSetRecord>) {
        self.days.clear();
        for day in days {
            self.days.insert(day.key(), day.normalized());
        }
        self.sets.clear();
        for record in sets {
            self.sets.insert(record.key(), record);
        }
    }

    /// Local tracking days, Monday first, unknown weekday names last
    pub fn days(&self) -> Vec<TrackingDay> {
        let rank = |day: &TrackingDay| {
            Weekday::from_name(&day.day)
                .and_then(|weekday| Weekday::ALL.iter().position(|w| *w == weekday))
                .unwrap_or(usize::MAX)
        };
        let mut days: Vec<TrackingDay> = self
            .days
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        days.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.key().cmp(&b.key())));
        days
    }

    /// Local tracking record of one weekday
    pub fn day(&self, day: &str) -> Option<TrackingDay> {
        self.days.get(&weekday_key(day)).map(|entry| entry.value().clone())
    }

    /// Local exercise sets ordered by weekday, date, exercise, and set
    pub fn sets(&self) -> Vec<ExerciseSetRecord> {
        let mut sets: Vec<(ExerciseSetKey, ExerciseSetRecord)> = self
            .sets
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        sets.sort_by(|a, b| a.0.cmp(&b.0));
        sets.into_iter().map(|(_, record)| record).collect()
    }

    /// Number of tracking keys with a write queued or in flight
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.write_locks.len()
    }

    /// Run `write` while holding the lock of one tracking key
    ///
    /// The lock entry is dropped once no other write waits on it, so the map
    /// only holds keys with writes in flight.
    async fn serialized<T>(&self, key: String, write: impl Future<Output = T>) -> T {
        let lock = self
            .write_locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        let result = {
            let _guard = lock.lock().await;
            write.await
        };

        // One reference in the map, one here
        self.write_locks
            .remove_if(&key, |_, held| Arc::strong_count(held) == 2);
        result
    }

    /// Flip one flag of a day
    ///
    /// The local day changes before the tracking service is called; its
    /// compliance rate is recomputed from the flags either way.
    pub async fn toggle(
        &self,
        session: &Session,
        day: &str,
        field: TrackingField,
    ) -> SyncOutcome<TrackingDay> {
        let key = weekday_key(day);
        self.serialized(format!("day:{key}"), async {
            let current = self.day(day);
            let optimistic = ComplianceAggregator::toggle(current.as_ref(), day, field);
            let value = optimistic.flag(field);
            self.days.insert(key.clone(), optimistic.clone());

            match self.store.update_day(session, day, &[(field, value)]).await {
                Ok(stored) => {
                    let stored = stored.normalized();
                    self.days.insert(key.clone(), stored.clone());
                    AppLogger::log_tracking_write(&key, "toggle", true, None);
                    SyncOutcome {
                        value: stored,
                        reconciled: true,
                    }
                }
                Err(e) => {
                    AppLogger::log_tracking_write(&key, "toggle", false, Some(&e.to_string()));
                    SyncOutcome {
                        value: optimistic,
                        reconciled: false,
                    }
                }
            }
        })
        .await
    }

    /// Log the weight of one set, dated today when the payload has no date
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid payload; nothing is written then.
    pub async fn save_set(
        &self,
        session: &Session,
        upsert: ExerciseSetUpsert,
    ) -> AppResult<SyncOutcome<ExerciseSetRecord>> {
        self.save_set_on(session, upsert, Local::now().date_naive()).await
    }

    /// Log the weight of one set, using `today` for an undated payload
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid payload; nothing is written then.
    pub async fn save_set_on(
        &self,
        session: &Session,
        upsert: ExerciseSetUpsert,
        today: NaiveDate,
    ) -> AppResult<SyncOutcome<ExerciseSetRecord>> {
        upsert.validate()?;
        let upsert = upsert.dated(today);
        let optimistic = upsert.to_record(today);
        let key = optimistic.key();

        let outcome = self
            .serialized(format!("set:{key}"), async {
                self.sets.insert(key.clone(), optimistic.clone());

                match self.store.upsert_set(session, &upsert).await {
                    Ok(stored) => {
                        let stored_key = stored.key();
                        if stored_key != key {
                            self.sets.remove(&key);
                        }
                        self.sets.insert(stored_key, stored.clone());
                        AppLogger::log_tracking_write(&key.to_string(), "save_set", true, None);
                        SyncOutcome {
                            value: stored,
                            reconciled: true,
                        }
                    }
                    Err(e) => {
                        AppLogger::log_tracking_write(
                            &key.to_string(),
                            "save_set",
                            false,
                            Some(&e.to_string()),
                        );
                        SyncOutcome {
                            value: optimistic.clone(),
                            reconciled: false,
                        }
                    }
                }
            })
            .await;
        Ok(outcome)
    }
}
