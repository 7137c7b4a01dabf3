// ABOUTME: Core data models for runner profiles, scheduled workouts, and training plans
// ABOUTME: Re-exports sport, profile, workout, and plan types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! # Data Models
//!
//! Everything here is plain data: created once, never mutated by downstream
//! consumers such as renderers and exporters.

/// Sport and workout type enumerations
pub mod sport;

/// Calibrated paces and the runner profile
pub mod profile;

/// Workout structures, templates, and scheduled workouts
pub mod workout;

/// The finished training plan
pub mod plan;

pub use plan::TrainingPlan;
pub use profile::{format_pace, RunningPaces, RunningProfile};
pub use sport::{Sport, WorkoutType};
pub use workout::{
    EasyStructure, IntervalStructure, LongRunStructure, RaceStructure, ScheduledWorkout, Strides,
    TempoStructure, WorkoutStructure, WorkoutTemplate,
};
