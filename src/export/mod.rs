// ABOUTME: Plan export to JSON and iCalendar files
// ABOUTME: Selects an output format and writes both standard exports into a directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Plan export
//!
//! ## Supported Formats
//!
//! - **JSON**: full plan model, pretty printed, ISO dates
//! - **ICS**: one all-day `VEVENT` per workout, rendered for calendars

/// iCalendar export
pub mod ics;

/// JSON export
pub mod json;

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::AppResult;
use crate::models::TrainingPlan;

pub use ics::{escape_text, export_plan_to_ics, render_ics};
pub use json::{export_plan_to_json, plan_to_json};

/// Export file format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// iCalendar
    Ics,
}

impl ExportFormat {
    /// Every supported format, in export order
    pub const ALL: [Self; 2] = [Self::Json, Self::Ics];

    /// File extension without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ics => "ics",
        }
    }

    /// Standard file name inside an export directory
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "plan.json",
            Self::Ics => "plan.ics",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serialize a plan in the requested format
///
/// `generated_at` stamps calendar events; JSON output ignores it.
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_plan(
    plan: &TrainingPlan,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> AppResult<String> {
    match format {
        ExportFormat::Json => plan_to_json(plan),
        ExportFormat::Ics => Ok(render_ics(plan, generated_at)),
    }
}

/// Write `plan.json` and `plan.ics` into `export_dir`, creating it if needed
///
/// # Errors
///
/// Returns an error if serialization or any file write fails
pub async fn export_plan(plan: &TrainingPlan, export_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ExportFormat::ALL.len());
    for format in ExportFormat::ALL {
        let path = export_dir.join(format.file_name());
        match format {
            ExportFormat::Json => export_plan_to_json(plan, &path).await?,
            ExportFormat::Ics => export_plan_to_ics(plan, &path).await?,
        }
        written.push(path);
    }
    info!(dir = %export_dir.display(), files = written.len(), "Exported plan");
    Ok(written)
}
