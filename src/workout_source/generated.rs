// ABOUTME: Parser for workout generator output into catalog-ready workouts
// ABOUTME: Strips markdown fences, validates the JSON, and assigns ids, goal, and accent colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Generated workouts
//!
//! The workout generator answers with JSON text shaped like
//! `{"workouts": [{"name", "duration", "description", "exercises": [...]}]}`,
//! sometimes wrapped in a fenced code block. Generated exercises have no ids,
//! so ids are assigned here from the generation timestamp and positions.

use chrono::{DateTime, Utc};
use fitwiz_core::constants::generated_workouts::{
    EXERCISE_ID_PREFIX, SOURCE_NAME, WORKOUT_ID_PREFIX,
};
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_core::models::{
    AccentColor, Exercise, ExerciseMetrics, ExerciseType, FitnessGoal, Workout,
};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct GeneratorResponse {
    #[serde(default)]
    workouts: Vec<GeneratedWorkout>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct GeneratedWorkout {
    name: String,
    duration: GeneratedDuration,
    #[serde(default)]
    description: String,
    exercises: Vec<GeneratedExercise>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeneratedDuration {
    Minutes(u32),
    Text(String),
}

impl GeneratedDuration {
    fn into_text(self) -> String {
        match self {
            Self::Minutes(minutes) => format!("{minutes} min"),
            Self::Text(text) => text,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedExercise {
    name: String,
    #[serde(rename = "type")]
    exercise_type: ExerciseType,
    #[serde(default)]
    target: ExerciseMetrics,
    #[serde(default)]
    description: String,
    #[serde(default)]
    video_url: Option<String>,
}

/// Remove markdown code fences around generator output
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Convert generator output into workouts for `goal`
///
/// Workout ids are `ai-workout-{millis}-{i}` and exercise ids
/// `exercise-{millis}-{i}-{j}`, where `millis` is `generated_at` in Unix
/// milliseconds. Accent colors cycle coral, teal, primary.
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not valid generator JSON, and
/// `ExternalServiceError` when the generator reported an error instead of
/// workouts
pub fn parse_generated_workouts(
    raw: &str,
    goal: FitnessGoal,
    generated_at: DateTime<Utc>,
) -> AppResult<Vec<Workout>> {
    let cleaned = strip_code_fences(raw);
    let response: GeneratorResponse = serde_json::from_str(&cleaned).map_err(|e| {
        warn!(error = %e, "Generator output is not valid workout JSON");
        AppError::invalid_format(format!("Invalid response format from {SOURCE_NAME}: {e}"))
            .with_source(e)
    })?;

    if let Some(message) = response.error {
        if response.workouts.is_empty() {
            return Err(AppError::external_service(SOURCE_NAME, message));
        }
    }

    let millis = generated_at.timestamp_millis();
    let workouts: Vec<Workout> = response
        .workouts
        .into_iter()
        .enumerate()
        .map(|(index, workout)| Workout {
            id: format!("{WORKOUT_ID_PREFIX}-{millis}-{index}"),
            name: workout.name,
            duration: workout.duration.into_text(),
            description: workout.description,
            accent_color: AccentColor::for_index(index),
            exercises: workout
                .exercises
                .into_iter()
                .enumerate()
                .map(|(exercise_index, exercise)| Exercise {
                    id: format!("{EXERCISE_ID_PREFIX}-{millis}-{index}-{exercise_index}"),
                    name: exercise.name,
                    exercise_type: exercise.exercise_type,
                    target: exercise.target,
                    description: exercise.description,
                    video_url: exercise.video_url,
                })
                .collect(),
            goal,
        })
        .collect();

    debug!(count = workouts.len(), goal = ?goal, "Parsed generated workouts");
    Ok(workouts)
}
