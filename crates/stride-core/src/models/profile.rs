// ABOUTME: Calibrated running paces and the immutable runner profile
// ABOUTME: Provides pace formatting helpers shared by workout builders and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use serde::{Deserialize, Serialize};

use super::sport::Sport;

/// Four training paces in seconds per kilometer
///
/// Calibration guarantees `interval < threshold < easy_min < easy_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningPaces {
    /// Lower (faster) bound of the easy range
    pub easy_min: f64,
    /// Upper (slower) bound of the easy range
    pub easy_max: f64,
    /// Threshold (tempo) pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
}

impl RunningPaces {
    /// Whether the paces keep their required strict ordering
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.interval < self.threshold
            && self.threshold < self.easy_min
            && self.easy_min < self.easy_max
    }

    /// Interval pace as `M:SS/km`
    #[must_use]
    pub fn interval_label(&self) -> String {
        format_pace(self.interval)
    }

    /// Threshold pace as `M:SS/km`
    #[must_use]
    pub fn threshold_label(&self) -> String {
        format_pace(self.threshold)
    }

    /// Easy range as `M:SS/km–M:SS/km`
    #[must_use]
    pub fn easy_range_label(&self) -> String {
        format!("{}–{}", format_pace(self.easy_min), format_pace(self.easy_max))
    }
}

/// Runner profile produced once per calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningProfile {
    /// Sport (always running)
    #[serde(default)]
    pub sport: Sport,
    /// Baseline race distance (km)
    pub baseline_race_distance_km: f64,
    /// Baseline race time (seconds)
    pub baseline_race_time_sec: f64,
    /// Paces derived from the baseline race
    pub paces: RunningPaces,
}

/// Format a pace in seconds per km as `M:SS/km`
///
/// The pace is rounded to whole seconds first so the seconds field never
/// reads `60`.
#[must_use]
pub fn format_pace(sec_per_km: f64) -> String {
    let total = sec_per_km.max(0.0).round() as u64;
    format!("{}:{:02}/km", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pace_whole_seconds() {
        assert_eq!(format_pace(233.0), "3:53/km");
        assert_eq!(format_pace(248.0), "4:08/km");
        assert_eq!(format_pace(300.0), "5:00/km");
    }

    #[test]
    fn test_format_pace_carries_rounded_minute() {
        assert_eq!(format_pace(299.6), "5:00/km");
        assert_eq!(format_pace(299.4), "4:59/km");
    }

    #[test]
    fn test_easy_range_label() {
        let paces = RunningPaces {
            easy_min: 288.0,
            easy_max: 328.0,
            threshold: 248.0,
            interval: 233.0,
        };
        assert_eq!(paces.easy_range_label(), "4:48/km–5:28/km");
        assert!(paces.is_ordered());
    }
}
