// ABOUTME: Integration test for installing the global tracing subscriber
// ABOUTME: Runs in its own test binary so the global subscriber slot starts empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors
#![allow(clippy::unwrap_used)]

use stride_planner::logging::{LogFormat, LoggingConfig};

#[test]
fn test_pretty_subscriber_installs_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    };

    config.init().unwrap();
    tracing::info!(week = 0, "pretty logging is live");

    let again = LoggingConfig {
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };
    assert!(again.init().is_err());
}
