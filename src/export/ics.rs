// ABOUTME: iCalendar export with one all-day event per scheduled workout
// ABOUTME: Escapes text per RFC 5545 and joins lines with CRLF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! iCalendar (`.ics`) export
//!
//! Each workout becomes a `VEVENT` with `DTSTART;VALUE=DATE`, which calendar
//! apps show as an all-day event. UIDs are random per export, so importing
//! the same plan twice creates duplicate events.

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::formatters::render_workout;
use crate::models::TrainingPlan;
use crate::utils::fs::write_creating_parents;

/// Product identifier written into the calendar header
pub const PRODUCT_ID: &str = "-//stride-planner//EN";

const LINE_ENDING: &str = "\r\n";

/// Escape a text value: backslash, semicolon, comma, and newline
#[must_use]
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Render the full calendar for a plan
///
/// `generated_at` becomes every event's `DTSTAMP`.
#[must_use]
pub fn render_ics(plan: &TrainingPlan, generated_at: DateTime<Utc>) -> String {
    let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_owned(),
        "VERSION:2.0".to_owned(),
        format!("PRODID:{PRODUCT_ID}"),
        "CALSCALE:GREGORIAN".to_owned(),
    ];

    for workout in &plan.workouts {
        let rendered = render_workout(workout);
        lines.extend([
            "BEGIN:VEVENT".to_owned(),
            format!("UID:{}", Uuid::new_v4()),
            format!("DTSTAMP:{stamp}"),
            format!("DTSTART;VALUE=DATE:{}", workout.date.format("%Y%m%d")),
            format!("SUMMARY:{}", escape_text(&rendered.summary)),
            format!("DESCRIPTION:{}", escape_text(&rendered.description)),
            "END:VEVENT".to_owned(),
        ]);
    }
    lines.push("END:VCALENDAR".to_owned());

    let mut calendar = lines.join(LINE_ENDING);
    calendar.push_str(LINE_ENDING);
    calendar
}

/// Write a plan as an `.ics` file, creating parent directories
///
/// # Errors
///
/// Returns an error if the file write fails
pub async fn export_plan_to_ics(plan: &TrainingPlan, path: &Path) -> AppResult<()> {
    let calendar = render_ics(plan, Utc::now());
    write_creating_parents(path, calendar.as_bytes()).await?;
    debug!(path = %path.display(), events = plan.workouts.len(), "Wrote calendar export");
    Ok(())
}
