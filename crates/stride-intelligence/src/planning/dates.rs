// ABOUTME: Calendar helpers that snap dates onto Monday week boundaries
// ABOUTME: Resolves plan start and race dates when either or both are omitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use chrono::{Datelike, Duration, NaiveDate};
use stride_core::config::PlanParameters;
use stride_core::constants::plan_shape::DAYS_IN_WEEK;
use stride_core::errors::PlanError;

/// Move `date` by a signed number of days
///
/// # Errors
///
/// Returns [`PlanError::DateOutOfRange`] when the result leaves the
/// representable calendar.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, PlanError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(PlanError::DateOutOfRange { date, days })
}

/// The given date if it is a Monday, otherwise the following Monday
///
/// # Errors
///
/// Returns [`PlanError::DateOutOfRange`] past the end of the calendar.
pub fn align_to_next_monday(date: NaiveDate) -> Result<NaiveDate, PlanError> {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    shift_days(date, (7 - weekday) % 7)
}

/// The Monday on or before the given date
///
/// # Errors
///
/// Returns [`PlanError::DateOutOfRange`] before the start of the calendar.
pub fn monday_of_week(date: NaiveDate) -> Result<NaiveDate, PlanError> {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// Fill in missing plan dates
///
/// - neither: start on the next Monday on or after `today`, race on the last
///   day of the plan
/// - race only: start `weeks - 1` weeks before the race week's Monday
/// - start only: start aligned to the next Monday, race on the last day
/// - both: start aligned to the next Monday, race as given
///
/// Returns `(start_date, goal_race_date)`. The race date is not checked
/// against the final week here; generation does that.
///
/// # Errors
///
/// Returns [`PlanError::DateOutOfRange`] when a derived date falls off the
/// calendar.
pub fn resolve_plan_dates(
    start_date: Option<NaiveDate>,
    goal_race_date: Option<NaiveDate>,
    today: NaiveDate,
    params: &PlanParameters,
) -> Result<(NaiveDate, NaiveDate), PlanError> {
    let last_day_offset = i64::from(params.weeks) * DAYS_IN_WEEK - 1;
    match (start_date, goal_race_date) {
        (None, None) => {
            let start = align_to_next_monday(today)?;
            Ok((start, shift_days(start, last_day_offset)?))
        }
        (None, Some(race)) => {
            let start = shift_days(monday_of_week(race)?, -params.race_week_offset_days())?;
            Ok((start, race))
        }
        (Some(start), None) => {
            let start = align_to_next_monday(start)?;
            Ok((start, shift_days(start, last_day_offset)?))
        }
        (Some(start), Some(race)) => Ok((align_to_next_monday(start)?, race)),
    }
}
