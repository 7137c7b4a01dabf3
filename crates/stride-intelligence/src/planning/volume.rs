// ABOUTME: Weekly volume seeding from the baseline race and week-over-week progression
// ABOUTME: Applies steady growth, a single cutback week, and a final week that carries forward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use stride_core::config::PlanParameters;
use stride_core::constants::volume;

/// Week one volume (km) derived from the baseline race distance
///
/// `baseline × 4.5` clamped to `[22, 34]`, unless the parameters carry an
/// explicit `start_weekly_km`, which is used as-is.
#[must_use]
pub fn seed_weekly_km(baseline_distance_km: f64, params: &PlanParameters) -> f64 {
    params.start_weekly_km.unwrap_or_else(|| {
        (baseline_distance_km * volume::SEED_MULTIPLIER)
            .clamp(volume::SEED_MIN_KM, volume::SEED_MAX_KM)
    })
}

/// Raw (unrounded) weekly volumes for every week of the plan
///
/// Each week is computed from the previous one:
/// - week 0 is the seed
/// - the cutback week multiplies by `cutback_factor`
/// - other weeks grow by `weekly_growth`
/// - the final week repeats the previous value (it is replaced by the race
///   week override, so its volume only matters for reporting)
#[must_use]
pub fn plan_weekly_volumes(baseline_distance_km: f64, params: &PlanParameters) -> Vec<f64> {
    let final_week = params.weeks.saturating_sub(1);
    (0..params.weeks)
        .scan(
            seed_weekly_km(baseline_distance_km, params),
            |running, week| {
                if week != final_week {
                    if week == params.cutback_week_index {
                        *running *= params.cutback_factor;
                    } else if week > 0 {
                        *running *= 1.0 + params.weekly_growth;
                    }
                }
                Some(*running)
            },
        )
        .collect()
}
