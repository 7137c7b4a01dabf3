// ABOUTME: Pace command for stride-cli
// ABOUTME: Calibrates and prints training paces for the resolved baseline race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use stride_planner::config::CliConfig;
use stride_planner::errors::AppResult;
use stride_planner::intelligence::calibrate_from_race;
use stride_planner::storage::ProfileStore;

use super::resolve_baseline;
use crate::helpers::display::display_paces;
use crate::BaselineArgs;

/// Print the four training paces
pub async fn run(args: BaselineArgs, config: &CliConfig) -> AppResult<()> {
    let record = ProfileStore::new(&config.profile_path).load().await?;
    let (distance, time) = resolve_baseline(&args, &record)?;
    let profile = calibrate_from_race(distance, f64::from(time));
    display_paces(&profile);
    Ok(())
}
