// ABOUTME: Assembles the dated half marathon plan from volumes, splits, and race week
// ABOUTME: Checks every precondition before building so a plan is either complete or not returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use chrono::NaiveDate;
use serde::Serialize;
use stride_core::config::PlanParameters;
use stride_core::constants::{plan_shape, schedule_offsets};
use stride_core::errors::PlanError;
use stride_core::models::{RunningPaces, RunningProfile, ScheduledWorkout, TrainingPlan};
use tracing::{debug, info};

use super::allocation::SessionAllocation;
use super::dates::shift_days;
use super::race_week::{build_race_week, RaceWeekWindow};
use super::structure::{interval_workout, long_run_workout, tempo_workout};
use super::volume::plan_weekly_volumes;

/// Volume and raw session split for one build week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildWeekPlan {
    /// Zero-based week index
    pub week_index: u32,
    /// Planned weekly volume before rounding (km)
    pub weekly_km: f64,
    /// Raw session split; sums to `weekly_km`
    pub allocation: SessionAllocation,
}

/// Per-week volumes and splits for the build weeks of a plan
///
/// Reporting helper for callers that want the volume progression without
/// dates; it performs no validation.
#[must_use]
pub fn plan_build_weeks(
    baseline_distance_km: f64,
    params: &PlanParameters,
) -> Vec<BuildWeekPlan> {
    plan_weekly_volumes(baseline_distance_km, params)
        .into_iter()
        .zip(0..params.build_weeks())
        .map(|(weekly_km, week_index)| BuildWeekPlan {
            week_index,
            weekly_km,
            allocation: SessionAllocation::allocate(weekly_km, params),
        })
        .collect()
}

/// Generate a 7-week, 3-sessions-per-week half marathon plan
///
/// Six build weeks (Tuesday intervals, Thursday tempo, Sunday long run)
/// followed by a race week anchored on `goal_race_date`. Workouts are
/// returned sorted by date; same-date workouts keep generation order.
///
/// `start_date` is used as given and is expected to be a Monday.
///
/// # Errors
///
/// Returns [`PlanError::Configuration`] when the plan shape is not 7 weeks
/// of 3 sessions or a parameter is invalid, [`PlanError::RaceBeforeStart`]
/// when the race precedes the start, [`PlanError::RaceOutsideFinalWeek`]
/// when the race is outside the final week, and [`PlanError::DateOutOfRange`]
/// when the plan would run off the calendar.
pub fn generate_half_marathon_plan(
    profile: &RunningProfile,
    start_date: NaiveDate,
    goal_race_date: NaiveDate,
    params: &PlanParameters,
) -> Result<TrainingPlan, PlanError> {
    check_plan_shape(params)?;
    if goal_race_date < start_date {
        return Err(PlanError::RaceBeforeStart {
            goal_race_date,
            start_date,
        });
    }
    params.validate()?;
    let window = RaceWeekWindow::for_plan(start_date, params)?;
    window.check(goal_race_date)?;

    let mut workouts = Vec::new();
    for week in plan_build_weeks(profile.baseline_race_distance_km, params) {
        let monday = shift_days(
            start_date,
            i64::from(week.week_index) * plan_shape::DAYS_IN_WEEK,
        )?;
        debug!(
            week = week.week_index,
            weekly_km = week.weekly_km,
            long_km = week.allocation.long_km,
            "Scheduling build week"
        );
        workouts.extend(build_week_workouts(monday, &week, &profile.paces)?);
    }
    workouts.extend(build_race_week(
        start_date,
        goal_race_date,
        &profile.paces,
        params,
    )?);

    // Stable sort keeps generation order for same-date workouts
    workouts.sort_by_key(|workout| workout.date);

    let plan = TrainingPlan {
        start_date,
        end_date: window.end,
        goal_race_date,
        workouts,
    };
    info!(
        start = %plan.start_date,
        race = %plan.goal_race_date,
        workouts = plan.workouts.len(),
        total_km = plan.total_distance_km(),
        "Generated half marathon plan"
    );
    Ok(plan)
}

fn check_plan_shape(params: &PlanParameters) -> Result<(), PlanError> {
    if params.days_per_week != plan_shape::DAYS_PER_WEEK {
        return Err(PlanError::Configuration(format!(
            "only {} sessions per week are supported, got {}",
            plan_shape::DAYS_PER_WEEK,
            params.days_per_week
        )));
    }
    if params.weeks != plan_shape::WEEKS {
        return Err(PlanError::Configuration(format!(
            "only {}-week plans are supported, got {}",
            plan_shape::WEEKS,
            params.weeks
        )));
    }
    Ok(())
}

fn build_week_workouts(
    monday: NaiveDate,
    week: &BuildWeekPlan,
    paces: &RunningPaces,
) -> Result<[ScheduledWorkout; 3], PlanError> {
    let rounded = week.allocation.rounded();
    Ok([
        ScheduledWorkout {
            date: shift_days(monday, schedule_offsets::INTERVALS_DAY)?,
            template: interval_workout(week.week_index, paces),
            target_distance_km: Some(rounded.intervals_km),
            target_duration_min: None,
        },
        ScheduledWorkout {
            date: shift_days(monday, schedule_offsets::TEMPO_DAY)?,
            template: tempo_workout(week.week_index, paces),
            target_distance_km: Some(rounded.tempo_km),
            target_duration_min: None,
        },
        ScheduledWorkout {
            date: shift_days(monday, schedule_offsets::LONG_RUN_DAY)?,
            template: long_run_workout(paces),
            target_distance_km: Some(rounded.long_km),
            target_duration_min: None,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pace_calibration::calibrate_from_race;
    use stride_core::models::WorkoutType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let profile = calibrate_from_race(5.0, 1200.0);
        let plan = generate_half_marathon_plan(
            &profile,
            date(2026, 1, 5),
            date(2026, 2, 22),
            &PlanParameters::default(),
        )
        .unwrap();

        assert_eq!(plan.start_date, date(2026, 1, 5));
        assert_eq!(plan.end_date, date(2026, 2, 22));
        assert_eq!(plan.workouts.len(), 18);

        let first = &plan.workouts[0];
        assert_eq!(first.date, date(2026, 1, 6));
        assert_eq!(first.workout_type(), WorkoutType::Intervals);
        assert_eq!(first.target_distance_km, Some(5.5));

        let race = plan.race_workout().unwrap();
        assert_eq!(race.date, date(2026, 2, 22));
        assert_eq!(race.target_distance_km, Some(21.0));
    }

    #[test]
    fn test_workouts_are_sorted() {
        let profile = calibrate_from_race(10.0, 2700.0);
        let plan = generate_half_marathon_plan(
            &profile,
            date(2026, 3, 2),
            date(2026, 4, 18),
            &PlanParameters::default(),
        )
        .unwrap();
        assert!(plan.workouts.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(plan.workouts.last().unwrap().workout_type(), WorkoutType::Race);
    }

    #[test]
    fn test_shape_is_checked_first() {
        let profile = calibrate_from_race(5.0, 1200.0);
        let params = PlanParameters {
            days_per_week: 4,
            ..PlanParameters::default()
        };
        // Race before start would also fail; shape is reported instead
        let err = generate_half_marathon_plan(&profile, date(2026, 1, 5), date(2025, 1, 1), &params)
            .unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_sunday_of_last_build_week_is_outside_window() {
        let profile = calibrate_from_race(5.0, 1200.0);
        let err = generate_half_marathon_plan(
            &profile,
            date(2026, 1, 5),
            date(2026, 2, 15),
            &PlanParameters::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::RaceOutsideFinalWeek { .. }));
    }

    #[test]
    fn test_race_before_start() {
        let profile = calibrate_from_race(5.0, 1200.0);
        let err = generate_half_marathon_plan(
            &profile,
            date(2026, 1, 5),
            date(2026, 1, 4),
            &PlanParameters::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::RaceBeforeStart { .. }));
        assert!(err.is_date_range());
    }

    #[test]
    fn test_plan_at_calendar_end_returns_error() {
        let profile = calibrate_from_race(5.0, 1200.0);
        let start = NaiveDate::MAX - chrono::Duration::days(10);
        let err = generate_half_marathon_plan(
            &profile,
            start,
            NaiveDate::MAX,
            &PlanParameters::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::DateOutOfRange { .. }));
        assert!(err.is_date_range());
    }

    #[test]
    fn test_build_weeks_preserve_volume() {
        let params = PlanParameters::default();
        let weeks = plan_build_weeks(5.0, &params);
        assert_eq!(weeks.len(), 6);
        for week in weeks {
            assert!((week.allocation.total_km() - week.weekly_km).abs() < 1e-9);
        }
    }
}
