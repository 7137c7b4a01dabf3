// ABOUTME: Environment configuration for the stride CLI
// ABOUTME: Resolves the profile file location, export directory, and plan parameter overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Environment-based configuration for the command line front end

use std::env;
use std::path::PathBuf;
use stride_core::config::PlanParameters;
use tracing::debug;

/// Default export directory, relative to the working directory
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Profile file name inside the application config directory
const PROFILE_FILE_NAME: &str = "profile.json";

/// Application directory name under the platform config directory
const APP_DIR_NAME: &str = "stride";

/// Runtime settings resolved once at CLI startup
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Where the profile record is loaded from and saved to
    pub profile_path: PathBuf,
    /// Default directory for `plan.json` and `plan.ics`
    pub export_dir: PathBuf,
    /// Plan parameters after `STRIDE_*` overrides
    pub plan: PlanParameters,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// - `STRIDE_PROFILE_PATH` overrides the profile location
    /// - `STRIDE_EXPORT_DIR` overrides the export directory
    /// - `STRIDE_*` plan variables are read by [`PlanParameters::from_env`]
    #[must_use]
    pub fn from_env() -> Self {
        let profile_path = env_path("STRIDE_PROFILE_PATH").unwrap_or_else(default_profile_path);
        let export_dir =
            env_path("STRIDE_EXPORT_DIR").unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

        debug!(
            profile_path = %profile_path.display(),
            export_dir = %export_dir.display(),
            "Resolved CLI configuration"
        );

        Self {
            profile_path,
            export_dir,
            plan: PlanParameters::from_env(),
        }
    }
}

/// `<config dir>/stride/profile.json`, or `./stride/profile.json` without a config dir
#[must_use]
pub fn default_profile_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(PROFILE_FILE_NAME)
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
