// ABOUTME: `log` command - saves a performance record for a user
// ABOUTME: Replaces any record already saved for the same workout and date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use std::path::Path;

use fitwiz::config::ServerConfig;
use fitwiz::services::DailyPlanService;
use fitwiz::store::create_store;
use fitwiz_core::errors::AppResult;
use fitwiz_core::models::WorkoutPerformance;
use fitwiz_intelligence::ProgressionEngine;
use uuid::Uuid;

use super::read_json;

/// Save the performance in `performance_path` for `user`
pub async fn run(user: Uuid, performance_path: &Path) -> AppResult<()> {
    let performance: WorkoutPerformance = read_json(performance_path).await?;
    let config = ServerConfig::from_env()?;
    let store = create_store(&config.store).await?;
    let service = DailyPlanService::new(
        store,
        ProgressionEngine::with_config(config.intelligence.progression),
    );

    service.record_performance(user, &performance).await?;
    println!(
        "Saved {} performance for {} on {}",
        if performance.completed {
            "completed"
        } else {
            "partial"
        },
        performance.workout_id,
        performance.date
    );
    Ok(())
}
