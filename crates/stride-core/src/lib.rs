// ABOUTME: Core types and constants for the Stride half marathon planner
// ABOUTME: Foundation crate with error handling, plan constants, domain models, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! training plan generator. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanError`
//! - **constants**: Plan shape, volume, session split, and pace offset constants
//! - **models**: Paces, profiles, workouts, and the finished `TrainingPlan`
//! - **config**: `PlanParameters` snapshot with environment overrides and validation

/// Unified error handling system with standard error codes
pub mod errors;

/// Plan constants organized by domain
pub mod constants;

/// Core data models (`RunningProfile`, `ScheduledWorkout`, `TrainingPlan`, etc.)
pub mod models;

/// Plan generation configuration (`PlanParameters`, `ConfigError`)
pub mod config;
