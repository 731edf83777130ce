// ABOUTME: Daily compliance toggling and weekly compliance averages
// ABOUTME: Rates are always derived from the four tracked flags, never taken as input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use crate::constants::limits::COMPLIANCE_DECIMALS;
use crate::models::{ClientComplianceSummary, TrackingDay, TrackingField, WeeklyCompliance};

/// Round to the number of decimals the tracking service reports
fn round_rate(value: f64) -> f64 {
    let factor = 10_f64.powi(COMPLIANCE_DECIMALS);
    (value * factor).round() / factor
}

/// Compliance calculations over tracking snapshots
pub struct ComplianceAggregator;

impl ComplianceAggregator {
    /// Flip one flag of a day and recompute its rate
    ///
    /// `current` is the day's record when one exists; otherwise a zero-valued
    /// record for `day` is the starting point. Toggling the same field twice
    /// returns the starting record.
    #[must_use]
    pub fn toggle(current: Option<&TrackingDay>, day: &str, field: TrackingField) -> TrackingDay {
        let mut next = current
            .cloned()
            .unwrap_or_else(|| TrackingDay::new(day))
            .normalized();
        next.set_flag(field, !next.flag(field));
        next
    }

    /// Set several flags at once, as a partial update payload does
    #[must_use]
    pub fn apply(
        current: Option<&TrackingDay>,
        day: &str,
        updates: &[(TrackingField, bool)],
    ) -> TrackingDay {
        let mut next = current.cloned().unwrap_or_else(|| TrackingDay::new(day));
        for (field, value) in updates {
            next.set_flag(*field, *value);
        }
        next.normalized()
    }

    /// Mean compliance rate over the tracked days
    ///
    /// Weekdays without a record are not part of the mean: no data is not
    /// the same as a missed day. Returns `None` when nothing was tracked.
    #[must_use]
    pub fn weekly_average(days: &[TrackingDay]) -> Option<f64> {
        if days.is_empty() {
            return None;
        }
        let total: f64 = days.iter().map(TrackingDay::derived_compliance_rate).sum();
        Some(round_rate(total / days.len() as f64))
    }

    /// Weekly summary with the per-day rates
    #[must_use]
    pub fn weekly_summary(days: &[TrackingDay]) -> WeeklyCompliance {
        WeeklyCompliance {
            average: Self::weekly_average(days),
            daily_rates: days
                .iter()
                .map(TrackingDay::derived_compliance_rate)
                .collect(),
            tracked_days: days.len(),
        }
    }

    /// One client's line of a coach overview
    ///
    /// A client who tracked nothing reports zero.
    #[must_use]
    pub fn client_summary(
        client_id: i64,
        email: impl Into<String>,
        days: &[TrackingDay],
    ) -> ClientComplianceSummary {
        ClientComplianceSummary {
            client_id,
            email: email.into(),
            average_compliance: Self::weekly_average(days).unwrap_or(0.0),
        }
    }

    /// Tracking records keyed by normalized weekday, with derived rates
    ///
    /// A later record for the same weekday replaces an earlier one.
    #[must_use]
    pub fn by_day(days: &[TrackingDay]) -> HashMap<String, TrackingDay> {
        days.iter()
            .map(|day| (day.key(), day.clone().normalized()))
            .collect()
    }
}
