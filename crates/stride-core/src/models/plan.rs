// ABOUTME: The finished, date-sorted training plan returned by plan generation
// ABOUTME: Read-only accessors used by renderers, exporters, and the CLI summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sport::WorkoutType;
use super::workout::ScheduledWorkout;

/// A complete plan: build weeks followed by the race week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Monday of the first build week
    pub start_date: NaiveDate,
    /// Sunday of the race week
    pub end_date: NaiveDate,
    /// Goal race date
    pub goal_race_date: NaiveDate,
    /// Workouts sorted by date
    pub workouts: Vec<ScheduledWorkout>,
}

impl TrainingPlan {
    /// The race workout, if present
    #[must_use]
    pub fn race_workout(&self) -> Option<&ScheduledWorkout> {
        self.workouts
            .iter()
            .find(|workout| workout.workout_type() == WorkoutType::Race)
    }

    /// Number of workouts of the given type
    #[must_use]
    pub fn count_of(&self, workout_type: WorkoutType) -> usize {
        self.workouts
            .iter()
            .filter(|workout| workout.workout_type() == workout_type)
            .count()
    }

    /// Calendar days from start to end date
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Sum of all rounded target distances (km)
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.workouts
            .iter()
            .filter_map(|workout| workout.target_distance_km)
            .sum()
    }
}
