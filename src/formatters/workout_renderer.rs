// ABOUTME: Renders a scheduled workout into a calendar title and a detailed description
// ABOUTME: Appends a compact "Structure:" line built from the typed workout structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use std::fmt::Write as _;

use crate::models::{ScheduledWorkout, WorkoutStructure};

/// Text shown for a workout in calendars and detailed listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWorkout {
    /// One-line title, e.g. `Run: long (11.0 km)`
    pub summary: String,
    /// Template description followed by a `Structure:` line
    pub description: String,
}

/// Render a scheduled workout
///
/// Summary uses the target distance when set, otherwise the target
/// duration, otherwise the bare workout type.
#[must_use]
pub fn render_workout(workout: &ScheduledWorkout) -> RenderedWorkout {
    RenderedWorkout {
        summary: render_summary(workout),
        description: render_description(workout),
    }
}

fn render_summary(workout: &ScheduledWorkout) -> String {
    let mut summary = format!(
        "{}: {}",
        workout.template.sport.label(),
        workout.workout_type()
    );
    match (workout.target_distance_km, workout.target_duration_min) {
        (Some(km), _) => {
            let _ = write!(summary, " ({km:.1} km)");
        }
        (None, Some(minutes)) => {
            let _ = write!(summary, " ({minutes:.0} min)");
        }
        (None, None) => {}
    }
    summary
}

fn render_description(workout: &ScheduledWorkout) -> String {
    let description = workout.template.description.trim();
    let bits = structure_bits(&workout.template.structure);
    if bits.is_empty() {
        return description.to_owned();
    }

    let structure_line = format!("Structure: {}", bits.join(" | "));
    if description.is_empty() {
        structure_line
    } else {
        format!("{description}\n\n{structure_line}")
    }
}

/// Compact fragments describing a structure, in display order
///
/// Order: repeats, tempo block, warmup/cooldown, easy pace, strides, notes.
#[must_use]
pub fn structure_bits(structure: &WorkoutStructure) -> Vec<String> {
    let mut bits = Vec::new();
    match structure {
        WorkoutStructure::Intervals(intervals) => {
            bits.push(format!(
                "{}×{}min (rest {}min) @ {}",
                intervals.reps, intervals.work_min, intervals.rest_min, intervals.target_pace
            ));
            bits.push(warmup_cooldown(
                Some(intervals.warmup_min),
                Some(intervals.cooldown_min),
            ));
            bits.push(format!("easy pace {}", intervals.easy_pace_range));
        }
        WorkoutStructure::Tempo(tempo) => {
            bits.push(format!("tempo {}min @ {}", tempo.tempo_min, tempo.target_pace));
            bits.push(warmup_cooldown(Some(tempo.warmup_min), Some(tempo.cooldown_min)));
            if let Some(range) = &tempo.easy_pace_range {
                bits.push(format!("easy pace {range}"));
            }
        }
        WorkoutStructure::Long(long) => {
            bits.push(format!("easy pace {}", long.easy_pace_range));
        }
        WorkoutStructure::Easy(easy) => {
            bits.push(warmup_cooldown(Some(easy.warmup_min), None));
            bits.push(format!("easy pace {}", easy.easy_pace_range));
            if let Some(strides) = easy.strides {
                bits.push(format!(
                    "strides {}×{}s (rec {}s)",
                    strides.count, strides.duration_sec, strides.recovery_sec
                ));
            }
        }
        WorkoutStructure::Race(_) => {}
    }

    if let Some(notes) = structure.notes().filter(|notes| !notes.is_empty()) {
        bits.push(format!("notes: {notes}"));
    }
    bits
}

fn warmup_cooldown(warmup_min: Option<u32>, cooldown_min: Option<u32>) -> String {
    [
        warmup_min.map(|minutes| format!("WU {minutes}min")),
        cooldown_min.map(|minutes| format!("CD {minutes}min")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RaceStructure, WorkoutTemplate};
    use chrono::NaiveDate;

    fn race(distance: Option<f64>, duration: Option<f64>) -> ScheduledWorkout {
        ScheduledWorkout {
            date: NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
            template: WorkoutTemplate::run(
                "Race day.",
                WorkoutStructure::Race(RaceStructure {
                    distance_km: 21.1,
                    notes: "Go.".to_owned(),
                }),
            ),
            target_distance_km: distance,
            target_duration_min: duration,
        }
    }

    #[test]
    fn test_summary_fallbacks() {
        assert_eq!(render_workout(&race(Some(21.0), None)).summary, "Run: race (21.0 km)");
        assert_eq!(render_workout(&race(None, Some(45.4))).summary, "Run: race (45 min)");
        assert_eq!(render_workout(&race(None, None)).summary, "Run: race");
    }

    #[test]
    fn test_race_description_has_notes_only() {
        let rendered = render_workout(&race(Some(21.0), None));
        assert_eq!(rendered.description, "Race day.\n\nStructure: notes: Go.");
    }

    #[test]
    fn test_warmup_cooldown_joins_present_parts() {
        assert_eq!(warmup_cooldown(Some(12), Some(10)), "WU 12min, CD 10min");
        assert_eq!(warmup_cooldown(Some(0), None), "WU 0min");
    }
}
