// ABOUTME: Workout catalog loaded from a JSON file on every request
// ABOUTME: Accepts either a bare array of workouts or a {"workouts": [...]} document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use super::WorkoutSource;
use async_trait::async_trait;
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_core::models::Workout;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Workout>),
    Wrapped { workouts: Vec<Workout> },
}

/// Workouts read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Source reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Catalog file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the text is not a workout list
    pub fn parse(raw: &str) -> AppResult<Vec<Workout>> {
        let document: CatalogDocument = serde_json::from_str(raw).map_err(|e| {
            AppError::invalid_format(format!("Workout catalog is not valid: {e}")).with_source(e)
        })?;
        Ok(match document {
            CatalogDocument::List(workouts) | CatalogDocument::Wrapped { workouts } => workouts,
        })
    }
}

#[async_trait]
impl WorkoutSource for JsonCatalogSource {
    fn name(&self) -> &'static str {
        "json catalog"
    }

    async fn load_workouts(&self) -> AppResult<Vec<Workout>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::from(e).with_resource_id(self.path.display().to_string())
        })?;
        let workouts = Self::parse(&raw)
            .map_err(|e| e.with_resource_id(self.path.display().to_string()))?;
        debug!(
            path = %self.path.display(),
            count = workouts.len(),
            "Loaded workout catalog"
        );
        Ok(workouts)
    }
}
