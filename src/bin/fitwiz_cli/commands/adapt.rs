// ABOUTME: `adapt` command - runs the adaptation engine over JSON files
// ABOUTME: Prints the next-session exercises as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use std::path::Path;

use fitwiz_core::errors::AppResult;
use fitwiz_core::models::{Exercise, WorkoutPerformance};
use fitwiz_intelligence::{IntelligenceConfig, ProgressionEngine};
use tracing::info;

use super::read_json;

/// Adapt the exercises in `exercises_path` against an optional previous performance
pub async fn run(exercises_path: &Path, previous_path: Option<&Path>) -> AppResult<()> {
    let exercises: Vec<Exercise> = read_json(exercises_path).await?;
    let previous: Option<WorkoutPerformance> = match previous_path {
        Some(path) => Some(read_json(path).await?),
        None => None,
    };

    let config = IntelligenceConfig::load()?;
    let engine = ProgressionEngine::with_config(config.progression);
    let adjustments = engine.plan(&exercises, previous.as_ref());

    info!(
        exercises = exercises.len(),
        changed = adjustments
            .iter()
            .filter(|a| a.adjustment.changed_target())
            .count(),
        "Adapted exercise list"
    );

    let adapted: Vec<Exercise> = adjustments.into_iter().map(|a| a.exercise).collect();
    println!("{}", serde_json::to_string_pretty(&adapted)?);
    Ok(())
}
