// ABOUTME: Plan generation error types raised before any workout is scheduled
// ABOUTME: Separates unsupported configuration from goal race date range violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! # Plan Error Types
//!
//! Generation either returns a complete plan or one of these errors; there is
//! no partially built plan to recover.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by plan generation preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The generator only supports its fixed plan shape and valid parameters
    #[error("unsupported plan configuration: {0}")]
    Configuration(String),

    /// Goal race date lies before the plan start date
    #[error("goal race date {goal_race_date} must be on or after start date {start_date}")]
    RaceBeforeStart {
        /// Requested race date
        goal_race_date: NaiveDate,
        /// Requested plan start
        start_date: NaiveDate,
    },

    /// Goal race date lies outside the final (race) week of the plan
    #[error(
        "goal race date {goal_race_date} must fall in the final week ({window_start}..{window_end})"
    )]
    RaceOutsideFinalWeek {
        /// Requested race date
        goal_race_date: NaiveDate,
        /// First day of the race week
        window_start: NaiveDate,
        /// Last day of the race week
        window_end: NaiveDate,
    },

    /// A plan date would fall outside the representable calendar
    #[error("date {date} shifted by {days} days falls outside the supported calendar")]
    DateOutOfRange {
        /// Date being shifted
        date: NaiveDate,
        /// Signed day offset that overflowed
        days: i64,
    },
}

impl PlanError {
    /// Whether this error is a date range violation rather than a configuration one
    #[must_use]
    pub const fn is_date_range(&self) -> bool {
        matches!(
            self,
            Self::RaceBeforeStart { .. }
                | Self::RaceOutsideFinalWeek { .. }
                | Self::DateOutOfRange { .. }
        )
    }
}

impl From<ConfigError> for PlanError {
    fn from(error: ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}
