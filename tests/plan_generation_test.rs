// ABOUTME: Integration tests for half marathon plan generation
// ABOUTME: Covers dates, volumes, session split, race week placement, and precondition errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{date, init_test_logging, reference_plan, reference_profile, reference_start};
use stride_planner::config::PlanParameters;
use stride_planner::errors::{AppError, ErrorCode, PlanError};
use stride_planner::intelligence::generate_half_marathon_plan;
use stride_planner::intelligence::planning::{plan_weekly_volumes, round_to_half_km};
use stride_planner::models::{WorkoutStructure, WorkoutType};

#[test]
fn test_reference_plan_shape() {
    let plan = reference_plan();

    assert_eq!(plan.start_date, date(2026, 1, 5));
    assert_eq!(plan.end_date, date(2026, 2, 22));
    assert_eq!(plan.span_days(), 48);
    assert_eq!(plan.workouts.len(), 18);

    assert_eq!(plan.count_of(WorkoutType::Intervals), 6);
    assert_eq!(plan.count_of(WorkoutType::Tempo), 7);
    assert_eq!(plan.count_of(WorkoutType::Long), 6);
    assert_eq!(plan.count_of(WorkoutType::Easy), 1);
    assert_eq!(plan.count_of(WorkoutType::Race), 1);
}

#[test]
fn test_first_weeks_distances() {
    let plan = reference_plan();
    let first_two_weeks: Vec<_> = plan
        .workouts
        .iter()
        .take(6)
        .map(|w| (w.date, w.workout_type(), w.target_distance_km))
        .collect();

    assert_eq!(
        first_two_weeks,
        vec![
            (date(2026, 1, 6), WorkoutType::Intervals, Some(5.5)),
            (date(2026, 1, 8), WorkoutType::Tempo, Some(5.5)),
            (date(2026, 1, 11), WorkoutType::Long, Some(11.0)),
            (date(2026, 1, 13), WorkoutType::Intervals, Some(6.0)),
            (date(2026, 1, 15), WorkoutType::Tempo, Some(6.0)),
            (date(2026, 1, 18), WorkoutType::Long, Some(12.0)),
        ]
    );
}

#[test]
fn test_race_anywhere_in_final_week() {
    init_test_logging();
    let profile = reference_profile();
    let start = reference_start();

    for offset in 42..=48 {
        let race_date = start + Duration::days(offset);
        let plan =
            generate_half_marathon_plan(&profile, start, race_date, &PlanParameters::default())
                .unwrap();

        assert_eq!(plan.span_days(), 48, "race offset {offset}");
        assert_eq!(plan.count_of(WorkoutType::Race), 1);
        assert_eq!(plan.race_workout().unwrap().date, race_date);
        assert_eq!(plan.workouts.len(), 18);
        assert!(plan.workouts.windows(2).all(|w| w[0].date <= w[1].date));
    }
}

#[test]
fn test_race_outside_final_week_is_rejected() {
    let profile = reference_profile();
    let start = reference_start();

    for offset in [41, 49, 70] {
        let err = generate_half_marathon_plan(
            &profile,
            start,
            start + Duration::days(offset),
            &PlanParameters::default(),
        )
        .unwrap_err();
        assert!(
            matches!(err, PlanError::RaceOutsideFinalWeek { .. }),
            "offset {offset}: {err:?}"
        );
        assert_eq!(AppError::from(err).code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_early_week_race_pulls_taper_into_last_build_week() {
    let plan = generate_half_marathon_plan(
        &reference_profile(),
        reference_start(),
        date(2026, 2, 16),
        &PlanParameters::default(),
    )
    .unwrap();

    let tail: Vec<_> = plan
        .workouts
        .iter()
        .rev()
        .take(6)
        .rev()
        .map(|w| (w.date, w.workout_type()))
        .collect();
    assert_eq!(
        tail,
        vec![
            (date(2026, 2, 10), WorkoutType::Intervals),
            (date(2026, 2, 11), WorkoutType::Easy),
            (date(2026, 2, 12), WorkoutType::Tempo),
            (date(2026, 2, 13), WorkoutType::Tempo),
            (date(2026, 2, 15), WorkoutType::Long),
            (date(2026, 2, 16), WorkoutType::Race),
        ]
    );
}

#[test]
fn test_same_date_workouts_keep_generation_order() {
    // Tuesday race: the easy run lands on the last build week's tempo day
    let plan = generate_half_marathon_plan(
        &reference_profile(),
        reference_start(),
        date(2026, 2, 17),
        &PlanParameters::default(),
    )
    .unwrap();

    let same_day: Vec<_> = plan
        .workouts
        .iter()
        .filter(|w| w.date == date(2026, 2, 12))
        .map(|w| w.workout_type())
        .collect();
    assert_eq!(same_day, vec![WorkoutType::Tempo, WorkoutType::Easy]);
}

#[test]
fn test_volumes_grow_except_cutback() {
    let params = PlanParameters::default();
    for baseline in [1.0, 5.0, 10.0, 21.1] {
        let volumes = plan_weekly_volumes(baseline, &params);
        let build = &volumes[..params.build_weeks() as usize];
        for week in 1..build.len() {
            if week == params.cutback_week_index as usize {
                assert!(build[week] < build[week - 1], "baseline {baseline}");
            } else {
                assert!(build[week] > build[week - 1], "baseline {baseline}");
            }
        }
    }
}

#[test]
fn test_distances_are_half_km_steps_and_long_run_capped() {
    let params = PlanParameters::default().with_start_weekly_km(60.0);
    let plan =
        generate_half_marathon_plan(&reference_profile(), reference_start(), date(2026, 2, 22), &params)
            .unwrap();

    for workout in &plan.workouts {
        let km = workout.target_distance_km.unwrap();
        assert_eq!(round_to_half_km(km), km);
        if workout.workout_type() == WorkoutType::Long {
            assert!(km <= params.long_run_cap_km);
        }
    }

    // Week one: 60 km splits to 15 / 15 + 10 overflow / 20
    let week_one: Vec<_> = plan.workouts.iter().take(3).map(|w| w.target_distance_km).collect();
    assert_eq!(week_one, vec![Some(15.0), Some(25.0), Some(20.0)]);
}

#[test]
fn test_race_target_is_rounded_but_structure_is_exact() {
    let plan = reference_plan();
    let race = plan.race_workout().unwrap();
    assert_eq!(race.target_distance_km, Some(21.0));
    match &race.template.structure {
        WorkoutStructure::Race(structure) => assert_eq!(structure.distance_km, 21.1),
        other => panic!("unexpected structure {other:?}"),
    }
}

#[test]
fn test_unsupported_shape_and_parameters() {
    let profile = reference_profile();
    let start = reference_start();
    let race = date(2026, 2, 22);

    for params in [
        PlanParameters {
            weeks: 8,
            ..PlanParameters::default()
        },
        PlanParameters {
            days_per_week: 4,
            ..PlanParameters::default()
        },
        PlanParameters {
            fraction_long: 0.6,
            ..PlanParameters::default()
        },
        PlanParameters {
            cutback_factor: 0.0,
            ..PlanParameters::default()
        },
    ] {
        let err = generate_half_marathon_plan(&profile, start, race, &params).unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)), "{params:?}");
        assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
    }
}

#[test]
fn test_race_before_start_is_rejected() {
    let err = generate_half_marathon_plan(
        &reference_profile(),
        reference_start(),
        date(2025, 12, 31),
        &PlanParameters::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PlanError::RaceBeforeStart {
            goal_race_date: date(2025, 12, 31),
            start_date: date(2026, 1, 5),
        }
    );
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(reference_plan(), reference_plan());
}
