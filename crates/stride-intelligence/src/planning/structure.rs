// ABOUTME: Week-indexed interval and tempo prescriptions plus the long run template
// ABOUTME: Descriptions are generated from structure fields so prose and data never disagree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use stride_core::constants::{envelopes, notes};
use stride_core::models::{
    IntervalStructure, LongRunStructure, RunningPaces, TempoStructure, WorkoutStructure,
    WorkoutTemplate,
};

/// Interval and tempo prescription for one build week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgression {
    /// Interval repeats
    pub reps: u32,
    /// Work duration per repeat (minutes)
    pub work_min: u32,
    /// Jog recovery between repeats (minutes)
    pub rest_min: u32,
    /// Continuous threshold block (minutes)
    pub tempo_min: u32,
}

impl WeekProgression {
    const fn new(reps: u32, work_min: u32, rest_min: u32, tempo_min: u32) -> Self {
        Self {
            reps,
            work_min,
            rest_min,
            tempo_min,
        }
    }

    /// Prescription for a zero-based build week, falling back past the table
    #[must_use]
    pub fn for_week(week_index: u32) -> Self {
        usize::try_from(week_index)
            .ok()
            .and_then(|index| PROGRESSION_TABLE.get(index))
            .copied()
            .unwrap_or(FALLBACK_PROGRESSION)
    }
}

/// Build weeks 0..=5; week 3 is the cutback week and eases off
const PROGRESSION_TABLE: [WeekProgression; 6] = [
    WeekProgression::new(5, 2, 2, 15),
    WeekProgression::new(6, 2, 2, 18),
    WeekProgression::new(6, 2, 2, 20),
    WeekProgression::new(5, 2, 2, 15),
    WeekProgression::new(5, 3, 2, 22),
    WeekProgression::new(6, 3, 2, 25),
];

const FALLBACK_PROGRESSION: WeekProgression = WeekProgression::new(6, 2, 2, 20);

/// Tuesday interval session for a build week
#[must_use]
pub fn interval_workout(week_index: u32, paces: &RunningPaces) -> WorkoutTemplate {
    let progression = WeekProgression::for_week(week_index);
    let structure = IntervalStructure {
        warmup_min: envelopes::INTERVALS_WARMUP_MIN,
        reps: progression.reps,
        work_min: progression.work_min,
        rest_min: progression.rest_min,
        cooldown_min: envelopes::INTERVALS_COOLDOWN_MIN,
        target_pace: paces.interval_label(),
        easy_pace_range: paces.easy_range_label(),
    };
    let description = format!(
        "Intervals: {} min easy, {}×{} min @ {}, {} min jog, cooldown {} min. Easy pace: {}.",
        structure.warmup_min,
        structure.reps,
        structure.work_min,
        structure.target_pace,
        structure.rest_min,
        structure.cooldown_min,
        structure.easy_pace_range,
    );
    WorkoutTemplate::run(description, WorkoutStructure::Intervals(structure))
}

/// Thursday tempo session for a build week
#[must_use]
pub fn tempo_workout(week_index: u32, paces: &RunningPaces) -> WorkoutTemplate {
    let easy_range = paces.easy_range_label();
    let structure = TempoStructure {
        warmup_min: envelopes::TEMPO_WARMUP_MIN,
        tempo_min: WeekProgression::for_week(week_index).tempo_min,
        cooldown_min: envelopes::TEMPO_COOLDOWN_MIN,
        target_pace: paces.threshold_label(),
        easy_pace_range: Some(easy_range.clone()),
        notes: None,
    };
    let description = format!(
        "Tempo: {} min easy, {} min @ {}, cooldown {} min. Easy pace: {easy_range}.",
        structure.warmup_min, structure.tempo_min, structure.target_pace, structure.cooldown_min,
    );
    WorkoutTemplate::run(description, WorkoutStructure::Tempo(structure))
}

/// Sunday long run; identical every build week apart from distance
#[must_use]
pub fn long_run_workout(paces: &RunningPaces) -> WorkoutTemplate {
    let structure = LongRunStructure {
        easy_pace_range: paces.easy_range_label(),
        notes: notes::LONG_RUN.to_owned(),
    };
    let description = format!(
        "Long run easy. Pace: {}. Optional: last 10–15 min slightly faster if you feel great.",
        structure.easy_pace_range
    );
    WorkoutTemplate::run(description, WorkoutStructure::Long(structure))
}
