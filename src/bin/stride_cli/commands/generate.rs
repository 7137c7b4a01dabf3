// ABOUTME: Plan generation command for stride-cli
// ABOUTME: Resolves baseline and dates, prints the plan, exports files, and optionally saves the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use std::path::PathBuf;

use chrono::Local;
use stride_planner::config::CliConfig;
use stride_planner::errors::{AppError, AppResult};
use stride_planner::export::export_plan;
use stride_planner::intelligence::planning::resolve_plan_dates;
use stride_planner::intelligence::{calibrate_from_race, generate_half_marathon_plan};
use stride_planner::storage::{ProfileRecord, ProfileStore};
use tracing::info;

use super::resolve_baseline;
use crate::helpers::display::{display_exports, display_plan};
use crate::GenerateArgs;

/// Generate, print, and export a plan
pub async fn run(args: GenerateArgs, config: &CliConfig) -> AppResult<()> {
    let store = ProfileStore::new(&config.profile_path);
    let record = store.load().await?;

    let (distance, time) = resolve_baseline(&args.baseline, &record)?;
    let profile = calibrate_from_race(distance, f64::from(time));

    let mut params = config.plan.clone();
    if let Some(km) = args.start_weekly_km.or(record.weekly_km) {
        if !km.is_finite() || km <= 0.0 {
            return Err(AppError::invalid_input("start-weekly-km must be > 0"));
        }
        params = params.with_start_weekly_km(km);
    }

    let (start_date, race_date) = resolve_plan_dates(
        args.start_date,
        args.race_date.or(record.race_date),
        Local::now().date_naive(),
        &params,
    )?;
    info!(%start_date, %race_date, distance, time, "Generating plan");

    let plan = generate_half_marathon_plan(&profile, start_date, race_date, &params)?;
    display_plan(&plan, distance, time);

    let export_dir = args
        .export_dir
        .or_else(|| record.export_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| config.export_dir.clone());

    if !args.no_export {
        let written = export_plan(&plan, &export_dir).await?;
        display_exports(&written);
    }

    if args.save_profile {
        let mut updated = record;
        updated.apply(ProfileRecord {
            baseline_distance_km: Some(distance),
            baseline_time_sec: Some(time),
            race_date: Some(plan.goal_race_date),
            export_dir: Some(export_dir.display().to_string()),
            ..ProfileRecord::default()
        });
        store.save(&updated).await?;
        println!("\nSaved profile: {}", store.path().display());
    }

    Ok(())
}
