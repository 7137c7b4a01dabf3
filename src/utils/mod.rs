// ABOUTME: Utility module for file I/O and race time handling
// ABOUTME: Shared by the exporters, profile storage, and CLI argument parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

/// Async file writes that create missing parent directories
pub mod fs;

/// `MM:SS` / `HH:MM:SS` race time parsing and formatting
pub mod time;
