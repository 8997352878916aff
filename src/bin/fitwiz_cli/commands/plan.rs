// ABOUTME: `plan` command - builds today's adapted plan from the configured catalog and store
// ABOUTME: Prints each workout with its adjusted targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use chrono::NaiveDate;
use fitwiz::config::ServerConfig;
use fitwiz::services::DailyPlanService;
use fitwiz::store::create_store;
use fitwiz::workout_source::JsonCatalogSource;
use fitwiz_core::errors::AppResult;
use fitwiz_intelligence::ProgressionEngine;
use uuid::Uuid;

use crate::helpers::display::display_plan;

/// Print the plan for `user` on `date`
pub async fn run(user: Uuid, date: NaiveDate) -> AppResult<()> {
    let config = ServerConfig::from_env()?;
    let store = create_store(&config.store).await?;
    let source = JsonCatalogSource::new(config.workouts_path.clone());
    let service = DailyPlanService::new(
        store,
        ProgressionEngine::with_config(config.intelligence.progression),
    );

    let plans = service.plan_day(user, &source, date).await?;
    println!("Plan for {date}");
    for plan in &plans {
        display_plan(plan);
    }
    Ok(())
}
