// ABOUTME: JSON file performance store holding every record in one document
// ABOUTME: Loads on open, rewrites atomically through a temp file on every save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use super::{PerformanceRecords, PerformanceStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_core::models::WorkoutPerformance;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Performance store persisted as a JSON array on disk
///
/// Reads are served from memory. Writers hold the lock across the file
/// rewrite so the document always matches the in-memory records.
#[derive(Debug)]
pub struct JsonFilePerformanceStore {
    path: PathBuf,
    records: RwLock<PerformanceRecords>,
}

impl JsonFilePerformanceStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let records = match fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => PerformanceRecords::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::serialization(format!(
                    "Failed to parse performance store {}: {e}",
                    path.display()
                ))
                .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => PerformanceRecords::new(),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read performance store {}: {e}",
                    path.display()
                ))
                .with_source(e))
            }
        };

        info!(
            path = %path.display(),
            records = records.len(),
            "Opened JSON performance store"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &PerformanceRecords) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PerformanceStore for JsonFilePerformanceStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn save(&self, user_id: Uuid, performance: &WorkoutPerformance) -> AppResult<()> {
        let mut records = self.records.write().await;
        let mut updated = records.clone();
        updated.upsert(user_id, performance)?;
        self.persist(&updated).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to write performance store {}: {}",
                self.path.display(),
                e.message
            ))
            .with_user_id(user_id)
            .with_resource_id(performance.workout_id.clone())
        })?;
        *records = updated;

        debug!(
            user_id = %user_id,
            workout_id = %performance.workout_id,
            date = %performance.date,
            "Saved performance to file"
        );
        Ok(())
    }

    async fn get_most_recent_completed(
        &self,
        user_id: Uuid,
        workout_id: &str,
    ) -> AppResult<Option<WorkoutPerformance>> {
        let records = self.records.read().await;
        Ok(records.most_recent_completed(user_id, workout_id).cloned())
    }

    async fn get_for_date(
        &self,
        user_id: Uuid,
        workout_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<WorkoutPerformance>> {
        let records = self.records.read().await;
        Ok(records.for_date(user_id, workout_id, date).cloned())
    }

    async fn list_completed_dates(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        self.records.read().await.completed_dates(user_id, from, to)
    }
}
