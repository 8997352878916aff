// ABOUTME: Daily plan orchestration - fetch last completed performance, adapt, and flag today's completion
// ABOUTME: Store read failures fall back to unadapted targets so a plan is always produced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use std::sync::Arc;

use chrono::NaiveDate;
use fitwiz_core::errors::AppResult;
use fitwiz_core::models::{Workout, WorkoutPerformance};
use fitwiz_intelligence::{Adjustment, ExerciseAdjustment, ProgressionEngine};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::logging::AppLogger;
use crate::session::CompletedSession;
use crate::store::PerformanceStore;
use crate::workout_source::WorkoutSource;

/// One workout prepared for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Workout with next-session targets
    pub workout: Workout,
    /// Decision taken for each exercise, in workout order
    pub adjustments: Vec<ExerciseAdjustment>,
    /// A completed performance exists for the requested date
    pub completed_today: bool,
    /// Date of the performance the targets were adapted from
    pub previous_date: Option<NaiveDate>,
}

impl DailyPlan {
    /// Number of exercises whose target went up
    #[must_use]
    pub fn increased_count(&self) -> usize {
        self.adjustments
            .iter()
            .filter(|a| matches!(a.adjustment, Adjustment::Increased { .. }))
            .count()
    }

    /// Number of exercises whose target went down
    #[must_use]
    pub fn decreased_count(&self) -> usize {
        self.adjustments
            .iter()
            .filter(|a| matches!(a.adjustment, Adjustment::Decreased { .. }))
            .count()
    }
}

/// Builds adapted daily plans from a performance store
pub struct DailyPlanService<S: PerformanceStore + ?Sized> {
    store: Arc<S>,
    engine: ProgressionEngine,
}

impl<S: PerformanceStore + ?Sized> DailyPlanService<S> {
    /// Service over `store` using `engine` for adaptation
    #[must_use]
    pub const fn new(store: Arc<S>, engine: ProgressionEngine) -> Self {
        Self { store, engine }
    }

    /// Backing store
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Plan one workout for `date`
    ///
    /// Never fails: when the store cannot be read the workout is returned with
    /// its current targets and no completion flag.
    #[instrument(skip(self, workout), fields(workout_id = %workout.id))]
    pub async fn plan_workout(
        &self,
        user_id: Uuid,
        workout: &Workout,
        date: NaiveDate,
    ) -> DailyPlan {
        let previous = match self
            .store
            .get_most_recent_completed(user_id, &workout.id)
            .await
        {
            Ok(previous) => previous,
            Err(e) => {
                warn!(
                    user_id = %user_id,
                    backend = self.store.backend_name(),
                    error = %e,
                    "Failed to read previous performance, keeping current targets"
                );
                None
            }
        };

        let completed_today = match self.store.get_for_date(user_id, &workout.id, date).await {
            Ok(today) => today.is_some_and(|performance| performance.completed),
            Err(e) => {
                warn!(
                    user_id = %user_id,
                    backend = self.store.backend_name(),
                    error = %e,
                    "Failed to read today's performance"
                );
                false
            }
        };

        let adjustments = self.engine.plan(&workout.exercises, previous.as_ref());
        let plan = DailyPlan {
            workout: Workout {
                exercises: adjustments.iter().map(|a| a.exercise.clone()).collect(),
                ..workout.clone()
            },
            adjustments,
            completed_today,
            previous_date: previous.as_ref().map(|performance| performance.date),
        };

        AppLogger::log_plan_adapted(
            user_id,
            &workout.id,
            plan.increased_count(),
            plan.decreased_count(),
            previous.is_some(),
        );
        plan
    }

    /// Plan every workout a source supplies for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot load its workouts
    pub async fn plan_day(
        &self,
        user_id: Uuid,
        source: &dyn WorkoutSource,
        date: NaiveDate,
    ) -> AppResult<Vec<DailyPlan>> {
        let workouts = source.load_workouts().await?;
        let mut plans = Vec::with_capacity(workouts.len());
        for workout in &workouts {
            plans.push(self.plan_workout(user_id, workout, date).await);
        }
        Ok(plans)
    }

    /// Persist a performance for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write
    pub async fn record_performance(
        &self,
        user_id: Uuid,
        performance: &WorkoutPerformance,
    ) -> AppResult<()> {
        let result = self.store.save(user_id, performance).await;
        AppLogger::log_store_operation(
            self.store.backend_name(),
            "save",
            user_id,
            &performance.workout_id,
            result.is_ok(),
        );
        result
    }

    /// Persist a finished session
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write
    pub async fn record_session(
        &self,
        user_id: Uuid,
        session: &CompletedSession,
    ) -> AppResult<()> {
        self.record_performance(user_id, &session.performance).await
    }
}
