// ABOUTME: Workout session tracking - collects exercise logs and produces the completed performance
// ABOUTME: Keeps only prescribed fields in each log and renders target summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Workout sessions
//!
//! A [`WorkoutSession`] is the in-progress state of one workout on one day.
//! Logs are recorded as the user finishes exercises, then [`WorkoutSession::complete`]
//! turns them into the [`WorkoutPerformance`] that future adaptation reads.

use chrono::{DateTime, NaiveDate, Utc};
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_core::models::{Exercise, ExerciseMetrics, Workout, WorkoutLog, WorkoutPerformance};
use fitwiz_intelligence::CompletionSummary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of completing a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSession {
    /// Performance to persist
    pub performance: WorkoutPerformance,
    /// Logged versus prescribed exercises
    pub summary: CompletionSummary,
}

/// In-progress workout
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout: Workout,
    logs: Vec<WorkoutLog>,
}

impl WorkoutSession {
    /// Start a session with no logs
    #[must_use]
    pub const fn start(workout: Workout) -> Self {
        Self {
            workout,
            logs: Vec::new(),
        }
    }

    /// Continue a session from a saved performance of the same workout
    ///
    /// # Errors
    ///
    /// Returns an error if the performance belongs to another workout
    pub fn resume(workout: Workout, saved: WorkoutPerformance) -> AppResult<Self> {
        if saved.workout_id != workout.id {
            return Err(AppError::invalid_input(format!(
                "Performance for workout {} cannot resume workout {}",
                saved.workout_id, workout.id
            ))
            .with_resource_id(workout.id));
        }
        Ok(Self {
            workout,
            logs: saved.exercises,
        })
    }

    /// Workout being performed
    #[must_use]
    pub const fn workout(&self) -> &Workout {
        &self.workout
    }

    /// Logs recorded so far, in recording order
    #[must_use]
    pub fn logs(&self) -> &[WorkoutLog] {
        &self.logs
    }

    /// Log recorded for an exercise
    #[must_use]
    pub fn log_for(&self, exercise_id: &str) -> Option<&WorkoutLog> {
        self.logs.iter().find(|log| log.exercise_id == exercise_id)
    }

    /// Record a log, replacing any earlier log for the same exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is not part of the workout
    pub fn record(&mut self, log: WorkoutLog) -> AppResult<()> {
        if !self
            .workout
            .exercises
            .iter()
            .any(|exercise| exercise.id == log.exercise_id)
        {
            return Err(AppError::invalid_input(format!(
                "Exercise {} is not part of workout {}",
                log.exercise_id, self.workout.id
            ))
            .with_resource_id(log.exercise_id));
        }

        if let Some(existing) = self
            .logs
            .iter_mut()
            .find(|existing| existing.exercise_id == log.exercise_id)
        {
            *existing = log;
        } else {
            self.logs.push(log);
        }
        Ok(())
    }

    /// At least one exercise is logged
    #[must_use]
    pub fn can_complete(&self) -> bool {
        !self.logs.is_empty()
    }

    /// Every exercise of the workout is logged
    #[must_use]
    pub fn all_logged(&self) -> bool {
        self.workout
            .exercises
            .iter()
            .all(|exercise| self.log_for(&exercise.id).is_some())
    }

    /// Logged versus prescribed exercises
    #[must_use]
    pub fn summary(&self) -> CompletionSummary {
        CompletionSummary::from_counts(self.logs.len(), self.workout.exercises.len())
    }

    /// Finish the session on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if nothing was logged
    pub fn complete(self, date: NaiveDate) -> AppResult<CompletedSession> {
        if !self.can_complete() {
            return Err(AppError::invalid_input(format!(
                "Workout {} has no logged exercises",
                self.workout.id
            ))
            .with_resource_id(self.workout.id));
        }

        let summary = self.summary();
        debug!(
            workout_id = %self.workout.id,
            %date,
            logged = summary.logged,
            total = summary.total,
            "Completing workout session"
        );

        let performance = WorkoutPerformance {
            total_duration: self.workout.duration_minutes(),
            workout_id: self.workout.id,
            date,
            exercises: self.logs,
            completed: true,
        };

        Ok(CompletedSession {
            performance,
            summary,
        })
    }
}

/// Build a log from entered values, keeping only the fields the target prescribes
///
/// A prescribed field with no entered value takes the target's value. Target
/// fields that are absent or zero are not carried into the log.
#[must_use]
pub fn log_from_inputs(
    exercise: &Exercise,
    inputs: &ExerciseMetrics,
    completed_at: DateTime<Utc>,
) -> WorkoutLog {
    let target = &exercise.target;
    let count = |prescribed: Option<u32>, entered: Option<u32>| {
        prescribed
            .filter(|value| *value > 0)
            .map(|value| entered.unwrap_or(value))
    };

    WorkoutLog {
        exercise_id: exercise.id.clone(),
        actual: ExerciseMetrics {
            sets: count(target.sets, inputs.sets),
            reps: count(target.reps, inputs.reps),
            time: count(target.time, inputs.time),
            weight: target
                .weight
                .filter(|value| value.abs() > f64::EPSILON)
                .map(|value| inputs.weight.unwrap_or(value)),
        },
        completed_at,
    }
}

/// Render a target as `3 sets × 10 reps × 20kg`
#[must_use]
pub fn target_summary(target: &ExerciseMetrics) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some(sets) = target.sets.filter(|v| *v > 0) {
        parts.push(format!("{sets} sets"));
    }
    if let Some(reps) = target.reps.filter(|v| *v > 0) {
        parts.push(format!("{reps} reps"));
    }
    if let Some(time) = target.time.filter(|v| *v > 0) {
        parts.push(format!("{time}s"));
    }
    if let Some(weight) = target.weight.filter(|v| v.abs() > f64::EPSILON) {
        parts.push(format!("{weight}kg"));
    }
    parts.join(" × ")
}
