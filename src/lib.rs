// ABOUTME: Main library entry point for the Stride half marathon planner
// ABOUTME: Wires the planning engine to rendering, calendar/JSON export, and profile storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! Generates a personalized 7-week, 3-sessions-per-week half marathon plan
//! from one recent race result, renders each workout for calendars, and
//! exports the plan as JSON and iCalendar.
//!
//! ## Architecture
//!
//! - **`stride-core`**: errors, constants, domain models, plan parameters
//! - **`stride-intelligence`**: pace calibration and plan generation
//! - **This crate**: logging, environment config, rendering, export, storage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stride_planner::config::PlanParameters;
//! use stride_planner::errors::AppResult;
//! use stride_planner::intelligence::{calibrate_from_race, generate_half_marathon_plan};
//!
//! fn main() -> AppResult<()> {
//!     let profile = calibrate_from_race(5.0, 1200.0);
//!     let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();
//!     let race = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap_or_default();
//!     let plan = generate_half_marathon_plan(&profile, start, race, &PlanParameters::default())?;
//!     println!("{} workouts", plan.workouts.len());
//!     Ok(())
//! }
//! ```

/// Error types shared across the workspace
pub use stride_core::errors;

/// Plan shape, volume, and pace constants
pub use stride_core::constants;

/// Domain models: paces, workouts, plans
pub use stride_core::models;

/// Pace calibration and plan generation engine
pub use stride_intelligence as intelligence;

/// Plan parameters and CLI environment configuration
pub mod config;

/// JSON and iCalendar plan export
pub mod export;

/// Calendar-friendly workout rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Persisted user profile record
pub mod storage;

/// Race time parsing and formatting
pub mod utils;
