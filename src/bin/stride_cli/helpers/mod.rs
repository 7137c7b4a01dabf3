// ABOUTME: Re-exports helper modules for stride-cli
// ABOUTME: Provides terminal display formatting for plans, paces, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

pub mod display;
