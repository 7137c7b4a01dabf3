// ABOUTME: Splits a weekly volume into interval, tempo, and long run distances
// ABOUTME: Caps the long run, moves overflow to tempo, and rounds to the nearest 0.5 km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use serde::Serialize;
use stride_core::config::PlanParameters;
use stride_core::constants::session_split::ROUNDING_STEP_KM;

/// Round a distance to the nearest 0.5 km, ties to even
///
/// `10.25` rounds to `10.0` and `10.75` rounds to `11.0`.
#[must_use]
pub fn round_to_half_km(km: f64) -> f64 {
    (km / ROUNDING_STEP_KM).round_ties_even() * ROUNDING_STEP_KM
}

/// Distances for the three sessions of one build week (km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionAllocation {
    /// Tuesday interval session
    pub intervals_km: f64,
    /// Thursday tempo session
    pub tempo_km: f64,
    /// Sunday long run
    pub long_km: f64,
}

impl SessionAllocation {
    /// Split a weekly volume by the configured fractions
    ///
    /// When the long run share exceeds the cap, the long run is set to the
    /// cap and the whole overflow is added to tempo, so the three raw
    /// distances always sum to `weekly_km`.
    #[must_use]
    pub fn allocate(weekly_km: f64, params: &PlanParameters) -> Self {
        let intervals_km = weekly_km * params.fraction_intervals;
        let mut tempo_km = weekly_km * params.fraction_tempo;
        let mut long_km = weekly_km * params.fraction_long;

        if long_km > params.long_run_cap_km {
            tempo_km += long_km - params.long_run_cap_km;
            long_km = params.long_run_cap_km;
        }

        Self {
            intervals_km,
            tempo_km,
            long_km,
        }
    }

    /// Each session rounded independently to the nearest 0.5 km
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            intervals_km: round_to_half_km(self.intervals_km),
            tempo_km: round_to_half_km(self.tempo_km),
            long_km: round_to_half_km(self.long_km),
        }
    }

    /// Sum of the three sessions (km)
    #[must_use]
    pub fn total_km(&self) -> f64 {
        self.intervals_km + self.tempo_km + self.long_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_half_km() {
        assert_eq!(round_to_half_km(5.625), 5.5);
        assert_eq!(round_to_half_km(6.075), 6.0);
        assert_eq!(round_to_half_km(11.25), 11.0);
        assert_eq!(round_to_half_km(12.24), 12.0);
        assert_eq!(round_to_half_km(10.25), 10.0);
        assert_eq!(round_to_half_km(10.75), 11.0);
        assert_eq!(round_to_half_km(21.1), 21.0);
    }

    #[test]
    fn test_default_split() {
        let allocation = SessionAllocation::allocate(22.5, &PlanParameters::default());
        assert_eq!(allocation.intervals_km, 5.625);
        assert_eq!(allocation.tempo_km, 5.625);
        assert_eq!(allocation.long_km, 11.25);

        let rounded = allocation.rounded();
        assert_eq!(rounded.intervals_km, 5.5);
        assert_eq!(rounded.tempo_km, 5.5);
        assert_eq!(rounded.long_km, 11.0);
    }

    #[test]
    fn test_long_run_cap_moves_overflow_to_tempo() {
        let allocation = SessionAllocation::allocate(44.0, &PlanParameters::default());
        assert_eq!(allocation.long_km, 20.0);
        assert_eq!(allocation.intervals_km, 11.0);
        assert_eq!(allocation.tempo_km, 13.0);
        assert!((allocation.total_km() - 44.0).abs() < 1e-9);
    }

    #[test]
    fn test_raw_split_preserves_volume() {
        let params = PlanParameters::default();
        for weekly in [22.0, 26.244, 34.0, 39.7, 60.0] {
            let allocation = SessionAllocation::allocate(weekly, &params);
            assert!((allocation.total_km() - weekly).abs() < 1e-9);
            assert!(allocation.long_km <= params.long_run_cap_km);
        }
    }
}
