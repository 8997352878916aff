// ABOUTME: In-memory performance store guarded by an async read-write lock
// ABOUTME: Used for tests, demos, and the `memory` store backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use super::{PerformanceRecords, PerformanceStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use fitwiz_core::errors::AppResult;
use fitwiz_core::models::WorkoutPerformance;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Performance store kept in process memory
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPerformanceStore {
    records: Arc<RwLock<PerformanceRecords>>,
}

impl InMemoryPerformanceStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing records
    #[must_use]
    pub fn with_records(records: PerformanceRecords) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Number of saved records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing was saved
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PerformanceStore for InMemoryPerformanceStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn save(&self, user_id: Uuid, performance: &WorkoutPerformance) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.upsert(user_id, performance)?;
        debug!(
            user_id = %user_id,
            workout_id = %performance.workout_id,
            date = %performance.date,
            total_records = records.len(),
            "Saved performance in memory"
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
