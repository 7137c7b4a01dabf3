// ABOUTME: Re-exports command modules for stride-cli
// ABOUTME: Provides plan generation, pace display, and profile management commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

pub mod generate;
pub mod paces;
pub mod profile;

use stride_planner::errors::{AppError, AppResult};
use stride_planner::storage::ProfileRecord;

use crate::BaselineArgs;

/// Baseline distance when neither the flag nor the stored profile sets one (km)
pub const DEFAULT_BASELINE_DISTANCE_KM: f64 = 5.0;

/// Baseline time when neither the flag nor the stored profile sets one (20:00)
pub const DEFAULT_BASELINE_TIME_SEC: u32 = 1200;

/// Baseline resolved from flags, then the stored profile, then defaults
pub fn resolve_baseline(args: &BaselineArgs, record: &ProfileRecord) -> AppResult<(f64, u32)> {
    let distance = args
        .baseline_distance
        .or(record.baseline_distance_km)
        .unwrap_or(DEFAULT_BASELINE_DISTANCE_KM);
    let time = args
        .baseline_time
        .or(record.baseline_time_sec)
        .unwrap_or(DEFAULT_BASELINE_TIME_SEC);

    if !distance.is_finite() || distance <= 0.0 {
        return Err(AppError::invalid_input("baseline-distance must be > 0"));
    }
    if time == 0 {
        return Err(AppError::invalid_input("baseline-time must be > 0 seconds"));
    }
    Ok((distance, time))
}
