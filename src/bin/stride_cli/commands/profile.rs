// ABOUTME: Profile commands for stride-cli
// ABOUTME: Shows and updates the stored profile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use stride_planner::config::CliConfig;
use stride_planner::errors::{AppError, AppResult};
use stride_planner::storage::{ProfileRecord, ProfileStore};
use tracing::info;

use crate::helpers::display::display_profile;
use crate::ProfileSetArgs;

/// Print the stored profile
pub async fn show(config: &CliConfig) -> AppResult<()> {
    let store = ProfileStore::new(&config.profile_path);
    let record = store.load().await?;
    display_profile(&record, store.path())
}

/// Overlay the given fields onto the stored profile and save it
pub async fn set(args: ProfileSetArgs, config: &CliConfig) -> AppResult<()> {
    let patch = ProfileRecord {
        baseline_distance_km: args.baseline.baseline_distance,
        baseline_time_sec: args.baseline.baseline_time,
        weekly_km: args.weekly_km,
        long_run_km: args.long_run_km,
        race_date: args.race_date,
        export_dir: args.export_dir,
        ..ProfileRecord::default()
    };
    if patch.is_empty() {
        return Err(AppError::invalid_input(
            "profile set needs at least one field to update",
        ));
    }
    for (name, value) in [
        ("baseline-distance", patch.baseline_distance_km),
        ("weekly-km", patch.weekly_km),
        ("long-run-km", patch.long_run_km),
    ] {
        if value.is_some_and(|km| !km.is_finite() || km <= 0.0) {
            return Err(AppError::invalid_input(format!("{name} must be > 0")));
        }
    }

    let store = ProfileStore::new(&config.profile_path);
    let mut record = store.load().await?;
    record.apply(patch);
    store.save(&record).await?;
    info!(path = %store.path().display(), "Profile updated");

    display_profile(&record, store.path())
}
