// ABOUTME: Pace calibration that converts one race result into four training paces
// ABOUTME: Uses fixed second-per-km offsets around threshold to guarantee pace ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Pace calibration heuristic
//!
//! Threshold sits slightly slower than baseline race pace, the easy range is
//! well slower than threshold, and interval pace is faster than threshold:
//!
//! ```text
//! threshold = race_pace + 8
//! easy_min  = threshold + 40
//! easy_max  = threshold + 80
//! interval  = threshold - 15
//! ```
//!
//! Callers must reject non-positive distance or time before calling; this
//! module performs no validation of its own.

use stride_core::constants::pace_offsets;
use stride_core::models::{RunningPaces, RunningProfile, Sport};

/// Average race pace in seconds per km
#[must_use]
pub fn race_pace_sec_per_km(race_distance_km: f64, race_time_sec: f64) -> f64 {
    race_time_sec / race_distance_km
}

/// Derive the four training paces from a race pace
#[must_use]
pub fn calibrate_paces(race_pace: f64) -> RunningPaces {
    let threshold = race_pace + pace_offsets::THRESHOLD_OVER_RACE;
    RunningPaces {
        easy_min: threshold + pace_offsets::EASY_MIN_OVER_THRESHOLD,
        easy_max: threshold + pace_offsets::EASY_MAX_OVER_THRESHOLD,
        threshold,
        interval: threshold - pace_offsets::INTERVAL_UNDER_THRESHOLD,
    }
}

/// Calibrate a runner profile from a recent race result
///
/// # Example
///
/// ```rust
/// use stride_intelligence::calibrate_from_race;
///
/// let profile = calibrate_from_race(5.0, 1200.0); // 5K in 20:00
/// assert_eq!(profile.paces.threshold, 248.0);
/// ```
#[must_use]
pub fn calibrate_from_race(race_distance_km: f64, race_time_sec: f64) -> RunningProfile {
    let paces = calibrate_paces(race_pace_sec_per_km(race_distance_km, race_time_sec));
    RunningProfile {
        sport: Sport::Run,
        baseline_race_distance_km: race_distance_km,
        baseline_race_time_sec: race_time_sec,
        paces,
    }
}
