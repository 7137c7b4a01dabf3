// ABOUTME: Criterion benchmarks for pace calibration, plan generation, and export rendering
// ABOUTME: Measures the full baseline-to-calendar pipeline across baseline race distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Criterion benchmarks for the planning pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stride_planner::config::PlanParameters;
use stride_planner::export::{plan_to_json, render_ics};
use stride_planner::intelligence::{calibrate_from_race, generate_half_marathon_plan};
use stride_planner::models::TrainingPlan;

/// Baseline races: (label, km, seconds)
const BASELINES: [(&str, f64, f64); 3] = [
    ("5k", 5.0, 1200.0),
    ("10k", 10.0, 2700.0),
    ("half", 21.1, 5700.0),
];

fn plan_dates() -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();
    let race = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap_or_default();
    (start, race)
}

fn reference_plan() -> Option<TrainingPlan> {
    let (start, race) = plan_dates();
    generate_half_marathon_plan(
        &calibrate_from_race(5.0, 1200.0),
        start,
        race,
        &PlanParameters::default(),
    )
    .ok()
}

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");
    let params = PlanParameters::default();
    let (start, race) = plan_dates();

    for (label, distance, time) in BASELINES {
        group.bench_with_input(
            BenchmarkId::new("calibrate_and_generate", label),
            &(distance, time),
            |b, &(distance, time)| {
                b.iter(|| {
                    let profile = calibrate_from_race(black_box(distance), black_box(time));
                    generate_half_marathon_plan(&profile, start, race, &params)
                });
            },
        );
    }

    group.finish();
}

fn bench_export_rendering(c: &mut Criterion) {
    let Some(plan) = reference_plan() else {
        return;
    };
    let mut group = c.benchmark_group("export_rendering");
    let generated_at = Utc::now();

    group.bench_function("ics", |b| {
        b.iter(|| render_ics(black_box(&plan), generated_at));
    });
    group.bench_function("json", |b| {
        b.iter(|| plan_to_json(black_box(&plan)));
    });

    group.finish();
}

criterion_group!(benches, bench_plan_generation, bench_export_rendering);
criterion_main!(benches);
