// ABOUTME: Performance store abstraction for saving and querying workout performances
// ABOUTME: Pluggable backends (in-memory, JSON file) behind a narrow async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Performance store
//!
//! The only persistence the adaptation flow needs: save one performance per
//! (user, workout, date) and fetch the newest completed one for a workout.

/// Store factory for backend selection from configuration
pub mod factory;
/// JSON file store
pub mod file;
/// In-memory store
pub mod memory;
/// Record set shared by the backends
pub mod records;

pub use factory::create_store;
pub use file::JsonFilePerformanceStore;
pub use memory::InMemoryPerformanceStore;
pub use records::{PerformanceRecords, StoredPerformance};

use async_trait::async_trait;
use chrono::NaiveDate;
use fitwiz_core::errors::AppResult;
use fitwiz_core::models::WorkoutPerformance;
use uuid::Uuid;

/// Persistence for workout performances, scoped per user
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use fitwiz::store::{InMemoryPerformanceStore, PerformanceStore};
/// use fitwiz_core::models::WorkoutPerformance;
/// use uuid::Uuid;
/// # async fn example() -> fitwiz_core::errors::AppResult<()> {
///
/// let store = InMemoryPerformanceStore::new();
/// let user_id = Uuid::new_v4();
/// let performance = WorkoutPerformance {
///     workout_id: "core-flow".to_owned(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap_or_default(),
///     exercises: Vec::new(),
///     total_duration: 20,
///     completed: true,
/// };
/// store.save(user_id, &performance).await?;
///
/// let previous = store.get_most_recent_completed(user_id, "core-flow").await?;
/// assert!(previous.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PerformanceStore: Send + Sync {
    /// Backend name for logging
    fn backend_name(&self) -> &'static str;

    /// Save a performance, replacing any record for the same workout and date
    ///
    /// # Errors
    ///
    /// Returns an error if the workout id is empty or the backend cannot persist the record
    async fn save(&self, user_id: Uuid, performance: &WorkoutPerformance) -> AppResult<()>;

    /// Newest completed performance of a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_most_recent_completed(
        &self,
        user_id: Uuid,
        workout_id: &str,
    ) -> AppResult<Option<WorkoutPerformance>>;

    /// Performance saved for a workout on a given day, completed or not
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_for_date(
        &self,
        user_id: Uuid,
        workout_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<WorkoutPerformance>>;

    /// Days in `[from, to]` with at least one completed performance, ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the range is reversed or the backend cannot be read
    async fn list_completed_dates(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>>;
}
