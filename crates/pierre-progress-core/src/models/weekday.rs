// ABOUTME: Weekday model with French canonical labels and English aliases
// ABOUTME: Case-insensitive parsing and conversion from chrono weekdays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local, Weekday as ChronoWeekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Normalized lookup key for a weekday name as stored by the services
///
/// Program days and tracking records carry free-form weekday strings; they are
/// compared after trimming and lowercasing.
#[must_use]
pub fn weekday_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Day of the week, labelled the way coaches author programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Lundi
    #[serde(rename = "Lundi", alias = "Monday")]
    Monday,
    /// Mardi
    #[serde(rename = "Mardi", alias = "Tuesday")]
    Tuesday,
    /// Mercredi
    #[serde(rename = "Mercredi", alias = "Wednesday")]
    Wednesday,
    /// Jeudi
    #[serde(rename = "Jeudi", alias = "Thursday")]
    Thursday,
    /// Vendredi
    #[serde(rename = "Vendredi", alias = "Friday")]
    Friday,
    /// Samedi
    #[serde(rename = "Samedi", alias = "Saturday")]
    Saturday,
    /// Dimanche
    #[serde(rename = "Dimanche", alias = "Sunday")]
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Canonical label used in programs and tracking records
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Lundi",
            Self::Tuesday => "Mardi",
            Self::Wednesday => "Mercredi",
            Self::Thursday => "Jeudi",
            Self::Friday => "Vendredi",
            Self::Saturday => "Samedi",
            Self::Sunday => "Dimanche",
        }
    }

    /// English name, accepted as an alias when parsing
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Parse a weekday name in either language, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = weekday_key(name);
        Self::ALL.into_iter().find(|day| {
            key == day.label().to_lowercase() || key == day.english_name().to_lowercase()
        })
    }

    /// Weekday of the local calendar date
    #[must_use]
    pub fn today() -> Self {
        Self::from(Local::now().weekday())
    }
}

impl From<ChronoWeekday> for Weekday {
    fn from(day: ChronoWeekday) -> Self {
        match day {
            ChronoWeekday::Mon => Self::Monday,
            ChronoWeekday::Tue => Self::Tuesday,
            ChronoWeekday::Wed => Self::Wednesday,
            ChronoWeekday::Thu => Self::Thursday,
            ChronoWeekday::Fri => Self::Friday,
            ChronoWeekday::Sat => Self::Saturday,
            ChronoWeekday::Sun => Self::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::invalid_input(format!("Unknown weekday '{s}'")))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
