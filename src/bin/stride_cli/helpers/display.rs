// ABOUTME: Output formatting helpers for stride-cli
// ABOUTME: Prints the plan table, calibrated paces, stored profile, and exported file list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use std::path::{Path, PathBuf};

use stride_planner::errors::AppResult;
use stride_planner::models::{format_pace, RunningProfile, ScheduledWorkout, TrainingPlan};
use stride_planner::storage::ProfileRecord;
use stride_planner::utils::time::format_hms;

const PLAN_TITLE: &str =
    "7-week Half Marathon plan (3 days/week: intervals + tempo + long + race week)";

/// One table row: date, type, distance, description
pub fn plan_row(workout: &ScheduledWorkout) -> String {
    let km = workout
        .target_distance_km
        .map_or_else(|| "-".to_owned(), |km| format!("{km:.1} km"));
    format!(
        "{} | {:10} | {km:8} | {}",
        workout.date,
        workout.workout_type(),
        workout.template.description
    )
}

/// Print the plan header and one row per workout
pub fn display_plan(plan: &TrainingPlan, baseline_distance_km: f64, baseline_time_sec: u32) {
    println!("{PLAN_TITLE}");
    println!("{}", "-".repeat(PLAN_TITLE.len()));
    println!(
        "Baseline: {baseline_distance_km} km in {}",
        format_hms(baseline_time_sec)
    );
    println!("Plan:     {} to {}", plan.start_date, plan.end_date);
    println!("Race:     {}", plan.goal_race_date);
    println!();

    for workout in &plan.workouts {
        println!("{}", plan_row(workout));
    }
}

/// Print calibrated training paces
pub fn display_paces(profile: &RunningProfile) {
    let paces = &profile.paces;
    println!(
        "Baseline:  {} km in {} ({} race pace)",
        profile.baseline_race_distance_km,
        format_hms(profile.baseline_race_time_sec.round() as u32),
        format_pace(profile.baseline_race_time_sec / profile.baseline_race_distance_km)
    );
    println!("Interval:  {}", paces.interval_label());
    println!("Threshold: {}", paces.threshold_label());
    println!("Easy:      {}", paces.easy_range_label());
}

/// Print the stored profile as JSON, or a hint when nothing is stored
pub fn display_profile(record: &ProfileRecord, path: &Path) -> AppResult<()> {
    if record.is_empty() && record.extra.is_empty() {
        println!("No profile stored at {}", path.display());
        return Ok(());
    }
    println!("Profile: {}", path.display());
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Print the list of written export files
pub fn display_exports(paths: &[PathBuf]) {
    println!("\nExported:");
    for path in paths {
        println!(" - {}", path.display());
    }
}
