// ABOUTME: JSON-backed store for the user's profile record
// ABOUTME: Missing files load as an empty record; saves pretty print and create parent directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Profile record storage
//!
//! The record is a loose bag of preferences rather than a calibrated
//! [`RunningProfile`](crate::models::RunningProfile): every field is optional
//! and unknown keys written by other tools are kept on save.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::fs::write_creating_parents;

/// Persisted planning preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Baseline race distance (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_distance_km: Option<f64>,
    /// Baseline race time (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_time_sec: Option<u32>,
    /// Current weekly volume (km), used as the week one volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_km: Option<f64>,
    /// Current longest run (km), informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_run_km: Option<f64>,
    /// Goal race date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_date: Option<NaiveDate>,
    /// Preferred export directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    /// Keys this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileRecord {
    /// Whether no known field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baseline_distance_km.is_none()
            && self.baseline_time_sec.is_none()
            && self.weekly_km.is_none()
            && self.long_run_km.is_none()
            && self.race_date.is_none()
            && self.export_dir.is_none()
    }

    /// Overlay every field set in `patch` onto this record
    pub fn apply(&mut self, patch: Self) {
        if patch.baseline_distance_km.is_some() {
            self.baseline_distance_km = patch.baseline_distance_km;
        }
        if patch.baseline_time_sec.is_some() {
            self.baseline_time_sec = patch.baseline_time_sec;
        }
        if patch.weekly_km.is_some() {
            self.weekly_km = patch.weekly_km;
        }
        if patch.long_run_km.is_some() {
            self.long_run_km = patch.long_run_km;
        }
        if patch.race_date.is_some() {
            self.race_date = patch.race_date;
        }
        if patch.export_dir.is_some() {
            self.export_dir = patch.export_dir;
        }
        self.extra.extend(patch.extra);
    }
}

/// Loads and saves a [`ProfileRecord`] at a fixed path
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, returning an empty one if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn load(&self) -> AppResult<ProfileRecord> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No profile file, using empty record");
                return Ok(ProfileRecord::default());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "cannot read profile {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };
        serde_json::from_str(&raw).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("profile {} is not valid JSON: {e}", self.path.display()),
            )
            .with_source(e)
        })
    }

    /// Save the record as pretty-printed JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub async fn save(&self, record: &ProfileRecord) -> AppResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        write_creating_parents(&self.path, json.as_bytes()).await?;
        info!(path = %self.path.display(), "Saved profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overlays_set_fields_only() {
        let mut record = ProfileRecord {
            baseline_distance_km: Some(5.0),
            baseline_time_sec: Some(1200),
            ..ProfileRecord::default()
        };
        record.apply(ProfileRecord {
            baseline_time_sec: Some(1150),
            weekly_km: Some(30.0),
            ..ProfileRecord::default()
        });
        assert_eq!(record.baseline_distance_km, Some(5.0));
        assert_eq!(record.baseline_time_sec, Some(1150));
        assert_eq!(record.weekly_km, Some(30.0));
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"baseline_distance_km": 10.0, "shoe": "trail"}"#).unwrap();
        assert_eq!(record.extra.get("shoe"), Some(&Value::from("trail")));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["shoe"], "trail");
        assert!(!record.is_empty());
        assert!(ProfileRecord::default().is_empty());
    }
}
