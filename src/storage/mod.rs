// ABOUTME: Persistence for the user's planning preferences
// ABOUTME: Exposes the JSON-backed profile record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

/// JSON file holding the last-used baseline, dates, and export settings
pub mod profile_store;

pub use profile_store::{ProfileRecord, ProfileStore};
