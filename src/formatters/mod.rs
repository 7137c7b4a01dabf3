// ABOUTME: Presentation formatters that turn scheduled workouts into human-readable text
// ABOUTME: Consumed by the calendar exporter and the CLI plan listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Workout presentation
//!
//! Renderers read the typed [`WorkoutStructure`](crate::models::WorkoutStructure)
//! and never parse description prose.

/// Summary and structured description for one scheduled workout
pub mod workout_renderer;

pub use workout_renderer::{render_workout, structure_bits, RenderedWorkout};
