// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, date helpers, and a reference profile and plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `stride_planner`

use chrono::NaiveDate;
use std::sync::Once;
use stride_planner::config::PlanParameters;
use stride_planner::intelligence::{calibrate_from_race, generate_half_marathon_plan};
use stride_planner::models::{RunningProfile, TrainingPlan};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Monday 2026-01-05, the reference plan start
pub fn reference_start() -> NaiveDate {
    date(2026, 1, 5)
}

/// 5 km in 20:00
pub fn reference_profile() -> RunningProfile {
    calibrate_from_race(5.0, 1200.0)
}

/// Reference plan with the race on the last Sunday
pub fn reference_plan() -> TrainingPlan {
    init_test_logging();
    generate_half_marathon_plan(
        &reference_profile(),
        reference_start(),
        date(2026, 2, 22),
        &PlanParameters::default(),
    )
    .expect("reference plan generates")
}
