// ABOUTME: Re-exports command modules for fitwiz-cli
// ABOUTME: One module per subcommand plus the shared JSON file reader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

pub mod adapt;
pub mod history;
pub mod log;
pub mod plan;

use std::path::Path;

use fitwiz_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use tokio::fs;

/// Read and decode a JSON file
async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_format(format!("{}: {e}", path.display())).with_source(e)
    })
}
