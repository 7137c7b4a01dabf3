// ABOUTME: Configuration module for the stride-core crate
// ABOUTME: Re-exports plan parameter configuration and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

/// Configuration error types for plan parameter validation
pub mod error;

/// Plan parameter snapshot with defaults, environment overrides, and validation
pub mod plan_parameters;

pub use error::ConfigError;
pub use plan_parameters::PlanParameters;
