// ABOUTME: Final week override with easy strides, a short sharpener, and the goal race
// ABOUTME: Validates that the race date falls inside the Monday-to-Sunday race week window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use chrono::NaiveDate;
use stride_core::config::PlanParameters;
use stride_core::constants::{notes, plan_shape, race_week};
use stride_core::errors::PlanError;
use stride_core::models::{
    EasyStructure, RaceStructure, RunningPaces, ScheduledWorkout, Strides, TempoStructure,
    WorkoutStructure, WorkoutTemplate,
};

use super::allocation::round_to_half_km;
use super::dates::shift_days;

/// Monday-to-Sunday window of the race week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceWeekWindow {
    /// Monday of the race week
    pub start: NaiveDate,
    /// Sunday of the race week (also the plan end date)
    pub end: NaiveDate,
}

impl RaceWeekWindow {
    /// Race week for a plan starting on `start_date`
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DateOutOfRange`] when the week runs off the calendar.
    pub fn for_plan(start_date: NaiveDate, params: &PlanParameters) -> Result<Self, PlanError> {
        let start = shift_days(start_date, params.race_week_offset_days())?;
        Ok(Self {
            start,
            end: shift_days(start, plan_shape::DAYS_IN_WEEK - 1)?,
        })
    }

    /// Whether `date` falls inside the window, inclusive on both ends
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Reject a goal race date outside the window
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::RaceOutsideFinalWeek`] when the date is outside.
    pub fn check(&self, goal_race_date: NaiveDate) -> Result<(), PlanError> {
        if self.contains(goal_race_date) {
            Ok(())
        } else {
            Err(PlanError::RaceOutsideFinalWeek {
                goal_race_date,
                window_start: self.start,
                window_end: self.end,
            })
        }
    }
}

/// Build the three race week workouts for a plan starting on `start_date`
///
/// Dates are anchored on the race, so early-week races put the easy run and
/// sharpener in the preceding build week.
///
/// # Errors
///
/// Returns [`PlanError::RaceOutsideFinalWeek`] when the race is outside the
/// final week of the plan, or [`PlanError::DateOutOfRange`] when that week
/// cannot be represented.
pub fn build_race_week(
    start_date: NaiveDate,
    goal_race_date: NaiveDate,
    paces: &RunningPaces,
    params: &PlanParameters,
) -> Result<Vec<ScheduledWorkout>, PlanError> {
    RaceWeekWindow::for_plan(start_date, params)?.check(goal_race_date)?;

    Ok(vec![
        ScheduledWorkout {
            date: shift_days(goal_race_date, -race_week::EASY_DAYS_BEFORE_RACE)?,
            template: easy_strides_workout(paces),
            target_distance_km: Some(round_to_half_km(params.race_week_easy_km)),
            target_duration_min: None,
        },
        ScheduledWorkout {
            date: shift_days(goal_race_date, -race_week::TEMPO_DAYS_BEFORE_RACE)?,
            template: sharpening_tempo_workout(paces),
            target_distance_km: Some(round_to_half_km(params.race_week_tempo_km)),
            target_duration_min: None,
        },
        ScheduledWorkout {
            date: goal_race_date,
            template: race_workout(params.half_marathon_km),
            target_distance_km: Some(round_to_half_km(params.half_marathon_km)),
            target_duration_min: None,
        },
    ])
}

fn easy_strides_workout(paces: &RunningPaces) -> WorkoutTemplate {
    let strides = Strides {
        count: race_week::STRIDE_COUNT,
        duration_sec: race_week::STRIDE_DURATION_SEC,
        recovery_sec: race_week::STRIDE_RECOVERY_SEC,
    };
    let structure = EasyStructure {
        warmup_min: 0,
        strides: Some(strides),
        easy_pace_range: paces.easy_range_label(),
        notes: Some(notes::EASY_STRIDES.to_owned()),
    };
    let description = format!(
        "Easy + strides: easy pace {}. Add {}×{}s strides with ~{}s easy between.",
        structure.easy_pace_range, strides.count, strides.duration_sec, strides.recovery_sec
    );
    WorkoutTemplate::run(description, WorkoutStructure::Easy(structure))
}

fn sharpening_tempo_workout(paces: &RunningPaces) -> WorkoutTemplate {
    let structure = TempoStructure {
        warmup_min: race_week::TEMPO_WARMUP_MIN,
        tempo_min: race_week::TEMPO_BLOCK_MIN,
        cooldown_min: race_week::TEMPO_COOLDOWN_MIN,
        target_pace: paces.threshold_label(),
        easy_pace_range: None,
        notes: Some(notes::SHARPENING_TEMPO.to_owned()),
    };
    let description = format!(
        "Short tempo: {} min easy + {} min @ {} + {} min cooldown.",
        structure.warmup_min, structure.tempo_min, structure.target_pace, structure.cooldown_min
    );
    WorkoutTemplate::run(description, WorkoutStructure::Tempo(structure))
}

fn race_workout(distance_km: f64) -> WorkoutTemplate {
    let structure = RaceStructure {
        distance_km,
        notes: notes::RACE.to_owned(),
    };
    let description = format!(
        "Half Marathon RACE ({} km). Start controlled; aim to negative split if feeling good.",
        structure.distance_km
    );
    WorkoutTemplate::run(description, WorkoutStructure::Race(structure))
}
