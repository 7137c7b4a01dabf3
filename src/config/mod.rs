// ABOUTME: Configuration module for plan parameters and CLI environment settings
// ABOUTME: Re-exports the core plan parameter snapshot alongside the CLI environment config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

/// Environment-driven CLI settings (profile path, export directory)
pub mod environment;

pub use environment::CliConfig;
pub use stride_core::config::{ConfigError, PlanParameters};
