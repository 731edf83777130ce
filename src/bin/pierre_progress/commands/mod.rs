// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-progress
// ABOUTME: Provides access to report and tracking commands

use pierre_progress::errors::{AppError, AppResult};
use pierre_progress::session::Session;

pub mod report;
pub mod tracking;

/// State shared by every command
pub struct Context<'a> {
    /// Verified session, absent when no valid token was given
    pub session: Option<&'a Session>,
    /// Print JSON instead of tables
    pub json: bool,
}

impl Context<'_> {
    /// Session of commands that cannot run anonymously
    pub fn require_session(&self) -> AppResult<&Session> {
        self.session.ok_or_else(|| {
            AppError::auth_required().with_details(serde_json::json!({
                "hint": "pass --token or set PIERRE_TOKEN"
            }))
        })
    }
}
