// ABOUTME: Half marathon plan generation: volumes, session split, structures, race week
// ABOUTME: Entry point is generate_half_marathon_plan which returns a complete plan or an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! # Planning
//!
//! The pipeline runs in a fixed order:
//!
//! 1. [`volume`] seeds week one volume and applies growth and the cutback week
//! 2. [`allocation`] splits each week into intervals, tempo, and long run
//! 3. [`structure`] builds per-week interval and tempo prescriptions
//! 4. [`race_week`] replaces the final week with easy, sharpener, and race
//! 5. [`assembler`] validates inputs, places workouts on dates, and sorts them

/// Plan assembly and precondition checks
pub mod assembler;

/// Session split with long run cap and half-km rounding
pub mod allocation;

/// Monday alignment and default plan dates
pub mod dates;

/// Fixed race week override
pub mod race_week;

/// Week-indexed workout prescriptions and descriptions
pub mod structure;

/// Weekly volume seeding and progression
pub mod volume;

pub use allocation::{round_to_half_km, SessionAllocation};
pub use assembler::{generate_half_marathon_plan, plan_build_weeks, BuildWeekPlan};
pub use dates::{align_to_next_monday, monday_of_week, resolve_plan_dates, shift_days};
pub use race_week::RaceWeekWindow;
pub use structure::WeekProgression;
pub use volume::{plan_weekly_volumes, seed_weekly_km};
