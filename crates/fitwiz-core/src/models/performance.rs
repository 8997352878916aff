// ABOUTME: Logged workout results - per-exercise logs and per-day performance records
// ABOUTME: Completed performances are the only input the adaptation engine reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ExerciseMetrics;

/// What the user actually did for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Exercise this log belongs to; may not match any current exercise
    pub exercise_id: String,
    /// Performed values, same shape as the exercise target
    #[serde(default)]
    pub actual: ExerciseMetrics,
    /// When the exercise was logged
    pub completed_at: DateTime<Utc>,
}

impl WorkoutLog {
    /// Create a log stamped with the current time
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, actual: ExerciseMetrics) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            actual,
            completed_at: Utc::now(),
        }
    }
}

/// One attempt at a workout on a given day
///
/// At most one record exists per (user, workout, date); saving again replaces
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPerformance {
    /// Workout the logs belong to
    pub workout_id: String,
    /// Calendar day of the attempt
    pub date: NaiveDate,
    /// Logs in the order they were entered
    #[serde(default)]
    pub exercises: Vec<WorkoutLog>,
    /// Workout length in minutes
    #[serde(default)]
    pub total_duration: u32,
    /// Whether the user finished the workout
    pub completed: bool,
}

impl WorkoutPerformance {
    /// First log recorded for `exercise_id`
    #[must_use]
    pub fn log_for(&self, exercise_id: &str) -> Option<&WorkoutLog> {
        self.exercises
            .iter()
            .find(|log| log.exercise_id == exercise_id)
    }
}
