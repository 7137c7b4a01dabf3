// ABOUTME: Configuration error types for plan parameter validation
// ABOUTME: Defines error variants for invalid ranges, split weights, and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Configuration error types for plan parameter validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., factor not in (0, 1])
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Session fractions don't sum to one
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
