// ABOUTME: In-process record set of performances with upsert and query helpers
// ABOUTME: Shared by the memory and JSON file stores so both answer queries identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use chrono::NaiveDate;
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_core::models::WorkoutPerformance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A performance tagged with its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPerformance {
    /// Owner of the record
    pub user_id: Uuid,
    /// The saved performance
    #[serde(flatten)]
    pub performance: WorkoutPerformance,
}

/// All saved performances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceRecords {
    records: Vec<StoredPerformance>,
}

impl PerformanceRecords {
    /// Empty record set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of saved records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record, dropping any earlier one for the same user, workout and date
    ///
    /// # Errors
    ///
    /// Returns an error if the workout id is blank
    pub fn upsert(&mut self, user_id: Uuid, performance: &WorkoutPerformance) -> AppResult<()> {
        if performance.workout_id.trim().is_empty() {
            return Err(AppError::invalid_input("Performance has an empty workout id")
                .with_user_id(user_id));
        }

        self.records.retain(|stored| {
            !(stored.user_id == user_id
                && stored.performance.workout_id == performance.workout_id
                && stored.performance.date == performance.date)
        });
        self.records.push(StoredPerformance {
            user_id,
            performance: performance.clone(),
        });
        Ok(())
    }

    /// Newest completed record for a workout
    #[must_use]
    pub fn most_recent_completed(
        &self,
        user_id: Uuid,
        workout_id: &str,
    ) -> Option<&WorkoutPerformance> {
        self.records
            .iter()
            .map(|stored| (stored.user_id, &stored.performance))
            .filter(|(owner, performance)| {
                *owner == user_id && performance.completed && performance.workout_id == workout_id
            })
            .map(|(_, performance)| performance)
            .max_by_key(|performance| performance.date)
    }

    /// Record for a workout on a day
    #[must_use]
    pub fn for_date(
        &self,
        user_id: Uuid,
        workout_id: &str,
        date: NaiveDate,
    ) -> Option<&WorkoutPerformance> {
        self.records
            .iter()
            .find(|stored| {
                stored.user_id == user_id
                    && stored.performance.workout_id == workout_id
                    && stored.performance.date == date
            })
            .map(|stored| &stored.performance)
    }

    /// Distinct completed days in `[from, to]`, ascending
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is after `to`
    pub fn completed_dates(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        if from > to {
            return Err(AppError::invalid_input(format!(
                "Date range start {from} is after end {to}"
            )));
        }

        let dates: BTreeSet<NaiveDate> = self
            .records
            .iter()
            .filter(|stored| stored.user_id == user_id && stored.performance.completed)
            .map(|stored| stored.performance.date)
            .filter(|date| (from..=to).contains(date))
            .collect();

        Ok(dates.into_iter().collect())
    }
}
