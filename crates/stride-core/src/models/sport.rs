// ABOUTME: Sport and workout type enumerations for scheduled training sessions
// ABOUTME: Defines the closed set of workout kinds with display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sport a plan is written for. Only running is supported.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Running
    #[default]
    Run,
}

impl Sport {
    /// Lowercase name used in summaries and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Run => "run",
        }
    }

    /// Title-case label used in calendar summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Run => "Run",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Kind of scheduled workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Easy aerobic run (race week easy + strides)
    Easy,
    /// Weekly long run
    Long,
    /// Threshold tempo session
    Tempo,
    /// Interval repeats
    Intervals,
    /// Goal race
    Race,
}

impl WorkoutType {
    /// Lowercase name used in summaries and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Long => "long",
            Self::Tempo => "tempo",
            Self::Intervals => "intervals",
            Self::Race => "race",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
