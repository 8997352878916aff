// ABOUTME: Integration tests for daily plan orchestration over stores and workout sources
// ABOUTME: Verifies adaptation from history, completion flags, fail-open reads, and recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use common::{completed, day, init_test_logging, log, partial, strength_workout};
use fitwiz::services::DailyPlanService;
use fitwiz::session::WorkoutSession;
use fitwiz::store::{InMemoryPerformanceStore, PerformanceStore};
use fitwiz::workout_source::StaticCatalog;
use fitwiz_core::errors::{AppError, AppResult, ErrorCode};
use fitwiz_core::models::{ExerciseMetrics, WorkoutPerformance};
use fitwiz_intelligence::{Adjustment, ProgressionConfig, ProgressionEngine};
use uuid::Uuid;

/// Store whose every call fails, as when the backing file is unreadable
struct UnavailableStore;

#[async_trait]
impl PerformanceStore for UnavailableStore {
    fn backend_name(&self) -> &'static str {
        "unavailable"
    }

    async fn save(&self, _user_id: Uuid, _performance: &WorkoutPerformance) -> AppResult<()> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "store offline"))
    }

    async fn get_most_recent_completed(
        &self,
        _user_id: Uuid,
        _workout_id: &str,
    ) -> AppResult<Option<WorkoutPerformance>> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "store offline"))
    }

    async fn get_for_date(
        &self,
        _user_id: Uuid,
        _workout_id: &str,
        _date: NaiveDate,
    ) -> AppResult<Option<WorkoutPerformance>> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "store offline"))
    }

    async fn list_completed_dates(
        &self,
        _user_id: Uuid,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "store offline"))
    }
}

fn engine() -> ProgressionEngine {
    ProgressionEngine::with_config(ProgressionConfig::default())
}

#[tokio::test]
async fn test_first_day_plan_keeps_catalog_targets() {
    init_test_logging();
    let service = DailyPlanService::new(Arc::new(InMemoryPerformanceStore::new()), engine());
    let workout = strength_workout();

    let plan = service
        .plan_workout(Uuid::new_v4(), &workout, day(2025, 3, 2))
        .await;

    assert_eq!(plan.workout, workout);
    assert!(!plan.completed_today);
    assert_eq!(plan.previous_date, None);
    assert!(plan
        .adjustments
        .iter()
        .all(|a| a.adjustment == Adjustment::NoHistory));
}

#[tokio::test]
async fn test_plan_adapts_from_latest_completed_performance() -> Result<()> {
    init_test_logging();
    let store = Arc::new(InMemoryPerformanceStore::new());
    let user = Uuid::new_v4();
    let workout = strength_workout();

    store
        .save(
            user,
            &completed(
                &workout.id,
                day(2025, 2, 20),
                vec![log("push-ups", ExerciseMetrics::reps(1, 1))],
            ),
        )
        .await?;
    store
        .save(
            user,
            &completed(
                &workout.id,
                day(2025, 3, 1),
                vec![
                    log("push-ups", ExerciseMetrics::reps(3, 13)),
                    log("plank", ExerciseMetrics::timed(30)),
                ],
            ),
        )
        .await?;

    let service = DailyPlanService::new(store, engine());
    let plan = service.plan_workout(user, &workout, day(2025, 3, 2)).await;

    assert_eq!(plan.previous_date, Some(day(2025, 3, 1)));
    assert_eq!(plan.workout.exercises[0].target.reps, Some(12));
    assert_eq!(plan.workout.exercises[1].target.time, Some(54));
    assert_eq!(plan.workout.exercises[2], workout.exercises[2]);
    assert_eq!(plan.adjustments[2].adjustment, Adjustment::NotLogged);
    assert_eq!(plan.increased_count(), 1);
    assert_eq!(plan.decreased_count(), 1);
    assert!(!plan.completed_today);
    Ok(())
}

#[tokio::test]
async fn test_plan_flags_workout_completed_today() -> Result<()> {
    let store = Arc::new(InMemoryPerformanceStore::new());
    let user = Uuid::new_v4();
    let workout = strength_workout();
    let service = DailyPlanService::new(store, engine());

    service
        .record_performance(user, &partial(&workout.id, day(2025, 3, 2), Vec::new()))
        .await?;
    let before = service.plan_workout(user, &workout, day(2025, 3, 2)).await;

    service
        .record_performance(
            user,
            &completed(
                &workout.id,
                day(2025, 3, 2),
                vec![log("plank", ExerciseMetrics::timed(60))],
            ),
        )
        .await?;
    let after = service.plan_workout(user, &workout, day(2025, 3, 2)).await;

    assert!(!before.completed_today);
    assert!(after.completed_today);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_store_fails_open() {
    init_test_logging();
    let service = DailyPlanService::new(Arc::new(UnavailableStore), engine());
    let workout = strength_workout();

    let plan = service
        .plan_workout(Uuid::new_v4(), &workout, day(2025, 3, 2))
        .await;

    assert_eq!(plan.workout, workout);
    assert!(!plan.completed_today);
    assert_eq!(plan.previous_date, None);
}

#[tokio::test]
async fn test_recording_to_unavailable_store_reports_error() {
    let service = DailyPlanService::new(Arc::new(UnavailableStore), engine());

    let error = service
        .record_performance(
            Uuid::new_v4(),
            &completed("strength-a", day(2025, 3, 2), Vec::new()),
        )
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceUnavailable);
}

#[tokio::test]
async fn test_plan_day_covers_every_catalog_workout() -> Result<()> {
    let mut cardio = strength_workout();
    cardio.id = "cardio-b".to_owned();
    cardio.name = "Cardio Intervals".to_owned();
    let catalog = StaticCatalog::new(vec![strength_workout(), cardio]);
    let store: Arc<dyn PerformanceStore> = Arc::new(InMemoryPerformanceStore::new());
    let service = DailyPlanService::new(store, engine());

    let plans = service
        .plan_day(Uuid::new_v4(), &catalog, day(2025, 3, 2))
        .await?;

    let ids: Vec<&str> = plans.iter().map(|p| p.workout.id.as_str()).collect();
    assert_eq!(ids, ["strength-a", "cardio-b"]);
    Ok(())
}

#[tokio::test]
async fn test_recorded_session_drives_next_plan() -> Result<()> {
    let store = Arc::new(InMemoryPerformanceStore::new());
    let user = Uuid::new_v4();
    let workout = strength_workout();
    let service = DailyPlanService::new(store, engine());

    let mut session = WorkoutSession::start(workout.clone());
    session.record(log("goblet-squat", ExerciseMetrics::weighted(3, 10, 25.0)))?;
    let finished = session.complete(day(2025, 3, 1))?;
    service.record_session(user, &finished).await?;

    let plan = service.plan_workout(user, &workout, day(2025, 3, 3)).await;

    let squat = &plan.workout.exercises[2];
    assert!((squat.target.weight.unwrap() - 23.0).abs() < 1e-9);
    assert_eq!(plan.workout.exercises[0], workout.exercises[0]);
    Ok(())
}
