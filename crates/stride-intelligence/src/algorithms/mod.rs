// ABOUTME: Algorithm module for training pace calculations
// ABOUTME: Re-exports the race-result pace calibration heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

/// Fixed-offset pace calibration from a single race result
pub mod pace_calibration;

pub use pace_calibration::{calibrate_from_race, calibrate_paces, race_pace_sec_per_km};
