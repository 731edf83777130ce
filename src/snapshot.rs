// ABOUTME: Offline program and tracking snapshots read from JSON files
// ABOUTME: Lets reports be computed without reaching the program or tracking services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseSetRecord, Program, ProgressReport, ReportWindow, TrackingDay};
use crate::report::build_report;

/// Everything the engine needs, as the services would return it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Program in effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
    /// Program list of the client, used when `program` is absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<Program>,
    /// Tracking week
    #[serde(default)]
    pub tracking: Vec<TrackingDay>,
    /// Logged exercise sets
    #[serde(default)]
    pub exercise_sets: Vec<ExerciseSetRecord>,
}

impl ProgressSnapshot {
    /// Parse a snapshot document
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the file cannot be read and a
    /// serialization error when it is not a snapshot.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).await.map_err(|e| {
            AppError::not_found(format!("Snapshot {}", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// Program in effect: the explicit one, else the last of the list
    #[must_use]
    pub fn current_program(&self) -> Option<&Program> {
        self.program.as_ref().or_else(|| self.programs.last())
    }

    /// Compute the report of this snapshot
    #[must_use]
    pub fn report(&self, window: Option<ReportWindow>) -> ProgressReport {
        build_report(
            self.current_program(),
            &self.tracking,
            &self.exercise_sets,
            window,
        )
    }
}
