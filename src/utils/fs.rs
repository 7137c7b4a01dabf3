// ABOUTME: Async file helpers used by exporters and profile storage
// ABOUTME: Creates parent directories before writing and attaches the path to I/O errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

use std::path::Path;
use tokio::fs;

use crate::errors::{AppError, AppResult};

/// Write `contents` to `path`, creating parent directories first
///
/// # Errors
///
/// Returns a storage error naming the path if directory creation or the write fails
pub async fn write_creating_parents(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            AppError::storage(format!("cannot create directory {}", parent.display())).with_source(e)
        })?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| AppError::storage(format!("cannot write {}", path.display())).with_source(e))
}
