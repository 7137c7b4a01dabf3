// ABOUTME: Race time parsing from MM:SS or HH:MM:SS and compact time formatting
// ABOUTME: Rejects negative fields, seconds of 60 or more, and minutes of 60 or more with hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use crate::errors::{AppError, AppResult};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Parse a race time into whole seconds
///
/// `MM:SS` allows any non-negative minutes (`90:00` is 5400 s); `HH:MM:SS`
/// requires minutes below 60. Seconds must be below 60 in both forms.
///
/// # Errors
///
/// Returns an invalid format error for the wrong number of fields or
/// non-integer fields, and an out of range error for negative or overflowing
/// fields.
pub fn parse_race_time(input: &str) -> AppResult<u32> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [mm, ss] => ("0", *mm, *ss),
        [hh, mm, ss] => (*hh, *mm, *ss),
        _ => return Err(AppError::invalid_format("time must be MM:SS or HH:MM:SS")),
    };

    let hours = parse_field(hours)?;
    let minutes = parse_field(minutes)?;
    let seconds = parse_field(seconds)?;

    let minutes_bounded = parts.len() == 3;
    if hours < 0
        || minutes < 0
        || seconds < 0
        || seconds >= SECONDS_PER_MINUTE
        || (minutes_bounded && minutes >= 60)
    {
        return Err(AppError::out_of_range(format!(
            "invalid time '{}': fields must be non-negative, seconds < 60, and minutes < 60 with hours",
            input.trim()
        )));
    }

    let total = hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| minutes.checked_mul(SECONDS_PER_MINUTE).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(|| AppError::out_of_range(format!("time '{}' is too large", input.trim())))?;
    Ok(total)
}

fn parse_field(field: &str) -> AppResult<i64> {
    field
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_format("time must contain only integers"))
}

/// Format seconds as `H:MM:SS` from one hour up, otherwise `M:SS`
#[must_use]
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
