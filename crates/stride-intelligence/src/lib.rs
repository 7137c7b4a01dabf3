// ABOUTME: Running pace calibration and half marathon plan generation engine
// ABOUTME: Pure, synchronous algorithms with no I/O, shared by the CLI and exporters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Turns one baseline race result into four training paces, then turns those
//! paces into a dated 7-week half marathon plan.
//!
//! Generation is a pure function of (profile, dates, parameters); the same
//! inputs always produce the same plan and no state is shared between calls.

/// Pace calibration from a baseline race
pub mod algorithms;

/// Weekly volume, session allocation, workout structures, and plan assembly
pub mod planning;

pub use algorithms::pace_calibration::calibrate_from_race;
pub use planning::{generate_half_marathon_plan, plan_build_weeks, BuildWeekPlan};
