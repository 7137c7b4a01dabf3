// ABOUTME: Workout structure variants, templates, and calendar-placed workouts
// ABOUTME: Closed per-type schema consumed by renderers and exporters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sport::{Sport, WorkoutType};

/// Strides appended to an easy run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strides {
    /// Number of strides
    pub count: u32,
    /// Duration of each stride (seconds)
    pub duration_sec: u32,
    /// Easy jog between strides (seconds)
    pub recovery_sec: u32,
}

/// Interval repeats at interval pace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalStructure {
    /// Easy warmup (minutes)
    pub warmup_min: u32,
    /// Number of work repeats
    pub reps: u32,
    /// Work duration per repeat (minutes)
    pub work_min: u32,
    /// Jog recovery between repeats (minutes)
    pub rest_min: u32,
    /// Easy cooldown (minutes)
    pub cooldown_min: u32,
    /// Interval pace label
    pub target_pace: String,
    /// Easy pace range label for warmup, recoveries, and cooldown
    pub easy_pace_range: String,
}

/// Continuous block at threshold pace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoStructure {
    /// Easy warmup (minutes)
    pub warmup_min: u32,
    /// Threshold block (minutes)
    pub tempo_min: u32,
    /// Easy cooldown (minutes)
    pub cooldown_min: u32,
    /// Threshold pace label
    pub target_pace: String,
    /// Easy pace range label, absent for the race week sharpener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy_pace_range: Option<String>,
    /// Coaching note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Easy long run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRunStructure {
    /// Easy pace range label
    pub easy_pace_range: String,
    /// Coaching note
    pub notes: String,
}

/// Easy run, optionally finished with strides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasyStructure {
    /// Warmup (minutes), zero when the whole run is easy
    pub warmup_min: u32,
    /// Strides after the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strides: Option<Strides>,
    /// Easy pace range label
    pub easy_pace_range: String,
    /// Coaching note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Goal race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceStructure {
    /// Exact race distance (km), not rounded
    pub distance_km: f64,
    /// Race day note
    pub notes: String,
}

/// Machine-readable prescription, one variant per workout type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutStructure {
    /// Interval session
    Intervals(IntervalStructure),
    /// Tempo session
    Tempo(TempoStructure),
    /// Long run
    Long(LongRunStructure),
    /// Easy run
    Easy(EasyStructure),
    /// Race
    Race(RaceStructure),
}

impl WorkoutStructure {
    /// Workout type implied by this structure
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Intervals(_) => WorkoutType::Intervals,
            Self::Tempo(_) => WorkoutType::Tempo,
            Self::Long(_) => WorkoutType::Long,
            Self::Easy(_) => WorkoutType::Easy,
            Self::Race(_) => WorkoutType::Race,
        }
    }

    /// Coaching note attached to the structure, if any
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        match self {
            Self::Intervals(_) => None,
            Self::Tempo(tempo) => tempo.notes.as_deref(),
            Self::Long(long) => Some(&long.notes),
            Self::Easy(easy) => easy.notes.as_deref(),
            Self::Race(race) => Some(&race.notes),
        }
    }
}

/// A reusable workout description: sport, prose, and structure
///
/// The description is generated from the structure fields when the workout
/// is built; renderers should read the structure rather than parse prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Sport
    pub sport: Sport,
    /// One-sentence description generated from the structure
    pub description: String,
    /// Machine-readable prescription
    pub structure: WorkoutStructure,
}

impl WorkoutTemplate {
    /// Create a running workout template
    pub fn run(description: impl Into<String>, structure: WorkoutStructure) -> Self {
        Self {
            sport: Sport::Run,
            description: description.into(),
            structure,
        }
    }

    /// Workout type implied by the structure
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.structure.workout_type()
    }
}

/// A workout placed on a calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    /// Calendar date
    pub date: NaiveDate,
    /// Workout template
    pub template: WorkoutTemplate,
    /// Target distance (km), rounded to the nearest 0.5 km
    pub target_distance_km: Option<f64>,
    /// Target duration (minutes) for time-based workouts
    #[serde(default)]
    pub target_duration_min: Option<f64>,
}

impl ScheduledWorkout {
    /// Workout type implied by the structure
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.template.workout_type()
    }
}
