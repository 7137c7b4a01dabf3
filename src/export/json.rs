// ABOUTME: JSON export of a complete training plan
// ABOUTME: Pretty prints the plan model with ISO-8601 dates and typed workout structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use std::path::Path;
use tracing::debug;

use crate::errors::AppResult;
use crate::models::TrainingPlan;
use crate::utils::fs::write_creating_parents;

/// Serialize a plan to pretty-printed JSON (two-space indent)
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn plan_to_json(plan: &TrainingPlan) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write a plan as JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if serialization or the file write fails
pub async fn export_plan_to_json(plan: &TrainingPlan, path: &Path) -> AppResult<()> {
    let json = plan_to_json(plan)?;
    write_creating_parents(path, json.as_bytes()).await?;
    debug!(path = %path.display(), bytes = json.len(), "Wrote JSON export");
    Ok(())
}
