// ABOUTME: Integration tests for the JSON-backed profile store
// ABOUTME: Covers missing files, round trips into new directories, and corrupt files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use stride_planner::errors::ErrorCode;
use stride_planner::storage::{ProfileRecord, ProfileStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_loads_empty_record() {
    let temp = TempDir::new().unwrap();
    let store = ProfileStore::new(temp.path().join("absent.json"));
    let record = store.load().await.unwrap();
    assert_eq!(record, ProfileRecord::default());
    assert!(record.is_empty());
}

#[tokio::test]
async fn test_round_trip_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config").join("stride").join("profile.json");
    let store = ProfileStore::new(&path);

    let record = ProfileRecord {
        baseline_distance_km: Some(5.0),
        baseline_time_sec: Some(1200),
        weekly_km: Some(35.0),
        long_run_km: Some(14.0),
        race_date: Some(date(2026, 3, 15)),
        export_dir: Some("exports".to_owned()),
        ..ProfileRecord::default()
    };
    store.save(&record).await.unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(raw.contains("\n  \"race_date\": \"2026-03-15\""));

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn test_corrupt_file_is_a_serialization_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let err = ProfileStore::new(&path).load().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.message.contains("profile.json"));
}

#[tokio::test]
async fn test_update_keeps_existing_fields() {
    let temp = TempDir::new().unwrap();
    let store = ProfileStore::new(temp.path().join("profile.json"));
    store
        .save(&ProfileRecord {
            baseline_distance_km: Some(10.0),
            baseline_time_sec: Some(2700),
            ..ProfileRecord::default()
        })
        .await
        .unwrap();

    let mut record = store.load().await.unwrap();
    record.apply(ProfileRecord {
        weekly_km: Some(28.0),
        ..ProfileRecord::default()
    });
    store.save(&record).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.baseline_distance_km, Some(10.0));
    assert_eq!(loaded.baseline_time_sec, Some(2700));
    assert_eq!(loaded.weekly_km, Some(28.0));
}
