// ABOUTME: Plan parameter snapshot used by a single plan generation call
// ABOUTME: Handles defaults, STRIDE_* environment overrides, and validation of the snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

use super::error::ConfigError;
use crate::constants::{plan_shape, race_week, session_split, volume};

/// Immutable configuration snapshot for plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Plan length in weeks (the generator only supports 7)
    pub weeks: u32,
    /// Sessions per build week (the generator only supports 3)
    pub days_per_week: u32,
    /// Week-over-week growth rate
    pub weekly_growth: f64,
    /// Zero-based index of the cutback week
    pub cutback_week_index: u32,
    /// Volume multiplier for the cutback week
    pub cutback_factor: f64,
    /// Share of weekly volume for intervals
    pub fraction_intervals: f64,
    /// Share of weekly volume for tempo
    pub fraction_tempo: f64,
    /// Share of weekly volume for the long run
    pub fraction_long: f64,
    /// Longest allowed long run (km)
    pub long_run_cap_km: f64,
    /// Race week easy + strides distance (km)
    pub race_week_easy_km: f64,
    /// Race week sharpening tempo distance (km)
    pub race_week_tempo_km: f64,
    /// Race distance (km)
    pub half_marathon_km: f64,
    /// Replaces the baseline-derived week one volume when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_weekly_km: Option<f64>,
}

impl Default for PlanParameters {
    fn default() -> Self {
        Self {
            weeks: plan_shape::WEEKS,
            days_per_week: plan_shape::DAYS_PER_WEEK,
            weekly_growth: volume::WEEKLY_GROWTH,
            cutback_week_index: volume::CUTBACK_WEEK_INDEX,
            cutback_factor: volume::CUTBACK_FACTOR,
            fraction_intervals: session_split::FRACTION_INTERVALS,
            fraction_tempo: session_split::FRACTION_TEMPO,
            fraction_long: session_split::FRACTION_LONG,
            long_run_cap_km: session_split::LONG_RUN_CAP_KM,
            race_week_easy_km: race_week::EASY_KM,
            race_week_tempo_km: race_week::TEMPO_KM,
            half_marathon_km: race_week::HALF_MARATHON_KM,
            start_weekly_km: None,
        }
    }
}

impl PlanParameters {
    /// Load plan parameters from environment, falling back to defaults
    ///
    /// Plan shape (weeks, days per week) is fixed and never read from the
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weekly_growth: env_or("STRIDE_WEEKLY_GROWTH", defaults.weekly_growth),
            cutback_week_index: env_or("STRIDE_CUTBACK_WEEK_INDEX", defaults.cutback_week_index),
            cutback_factor: env_or("STRIDE_CUTBACK_FACTOR", defaults.cutback_factor),
            fraction_intervals: env_or("STRIDE_FRACTION_INTERVALS", defaults.fraction_intervals),
            fraction_tempo: env_or("STRIDE_FRACTION_TEMPO", defaults.fraction_tempo),
            fraction_long: env_or("STRIDE_FRACTION_LONG", defaults.fraction_long),
            long_run_cap_km: env_or("STRIDE_LONG_RUN_CAP_KM", defaults.long_run_cap_km),
            race_week_easy_km: env_or("STRIDE_RACE_WEEK_EASY_KM", defaults.race_week_easy_km),
            race_week_tempo_km: env_or("STRIDE_RACE_WEEK_TEMPO_KM", defaults.race_week_tempo_km),
            half_marathon_km: env_or("STRIDE_HALF_MARATHON_KM", defaults.half_marathon_km),
            ..defaults
        }
    }

    /// Use a fixed week one volume instead of the baseline-derived seed
    #[must_use]
    pub fn with_start_weekly_km(mut self, start_weekly_km: f64) -> Self {
        self.start_weekly_km = Some(start_weekly_km);
        self
    }

    /// Number of build weeks preceding the race week
    #[must_use]
    pub const fn build_weeks(&self) -> u32 {
        self.weeks.saturating_sub(1)
    }

    /// Days from plan start to the Monday of the race week
    #[must_use]
    pub const fn race_week_offset_days(&self) -> i64 {
        self.build_weeks() as i64 * plan_shape::DAYS_IN_WEEK
    }

    /// Validate the numeric parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any session fraction is negative or the fractions don't sum to 1.0
    /// - Growth rate is negative or not finite
    /// - Cutback factor is outside (0, 1]
    /// - Cutback week index is not one of the build weeks after week one
    /// - Any distance is non-positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            self.fraction_intervals,
            self.fraction_tempo,
            self.fraction_long,
        ];
        if fractions.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "session fractions must be non-negative",
            ));
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > session_split::FRACTION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "session fractions must sum to 1.0",
            ));
        }

        if !self.weekly_growth.is_finite() || self.weekly_growth < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weekly growth must be a non-negative number",
            ));
        }

        if !(self.cutback_factor > 0.0 && self.cutback_factor <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "cutback factor must be in (0, 1]",
            ));
        }

        if self.cutback_week_index == 0 || self.cutback_week_index >= self.build_weeks() {
            return Err(ConfigError::InvalidRange(
                "cutback week must be a build week after the first",
            ));
        }

        let distances = [
            self.long_run_cap_km,
            self.race_week_easy_km,
            self.race_week_tempo_km,
            self.half_marathon_km,
        ];
        if distances.iter().any(|km| !km.is_finite() || *km <= 0.0) {
            return Err(ConfigError::ValueOutOfRange("distances must be positive"));
        }

        if self
            .start_weekly_km
            .is_some_and(|km| !km.is_finite() || km <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "start weekly volume must be positive",
            ));
        }

        Ok(())
    }
}

/// Read and parse an environment variable, keeping the default when unset or invalid
fn env_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "Ignoring unparseable plan parameter");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        let params = PlanParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.build_weeks(), 6);
        assert_eq!(params.race_week_offset_days(), 42);
    }

    #[test]
    fn test_fractions_must_sum_to_one() {
        let params = PlanParameters {
            fraction_long: 0.40,
            ..PlanParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_cutback_index_must_be_inside_build_weeks() {
        for index in [0, 6, 9] {
            let params = PlanParameters {
                cutback_week_index: index,
                ..PlanParameters::default()
            };
            assert!(params.validate().is_err(), "index {index} accepted");
        }
    }

    #[test]
    fn test_start_weekly_override_must_be_positive() {
        let params = PlanParameters::default().with_start_weekly_km(0.0);
        assert!(params.validate().is_err());
        let params = PlanParameters::default().with_start_weekly_km(40.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_and_ignores_garbage() {
        env::set_var("STRIDE_WEEKLY_GROWTH", "0.05");
        env::set_var("STRIDE_LONG_RUN_CAP_KM", "not-a-number");
        let params = PlanParameters::from_env();
        env::remove_var("STRIDE_WEEKLY_GROWTH");
        env::remove_var("STRIDE_LONG_RUN_CAP_KM");

        assert_eq!(params.weekly_growth, 0.05);
        assert_eq!(params.long_run_cap_km, session_split::LONG_RUN_CAP_KM);
        assert_eq!(params.weeks, plan_shape::WEEKS);
    }
}
