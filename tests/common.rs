// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus exercise, workout, and performance builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitwiz`

use std::env;
use std::sync::Once;

use chrono::{NaiveDate, TimeZone, Utc};
use fitwiz_core::models::{
    AccentColor, Exercise, ExerciseMetrics, ExerciseType, FitnessGoal, Workout, WorkoutLog,
    WorkoutPerformance,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reps exercise with `sets` x `reps`
pub fn reps_exercise(id: &str, sets: u32, reps: u32) -> Exercise {
    Exercise::new(id, "Push-ups", ExerciseType::Reps, ExerciseMetrics::reps(sets, reps))
}

/// Timed exercise holding for `seconds`
pub fn time_exercise(id: &str, seconds: u32) -> Exercise {
    Exercise::new(id, "Plank", ExerciseType::Time, ExerciseMetrics::timed(seconds))
}

/// Weighted exercise with `sets` x `reps` at `weight`
pub fn weight_exercise(id: &str, sets: u32, reps: u32, weight: f64) -> Exercise {
    Exercise::new(
        id,
        "Goblet squat",
        ExerciseType::Weight,
        ExerciseMetrics::weighted(sets, reps, weight),
    )
}

/// Log with a fixed timestamp so comparisons are stable
pub fn log(exercise_id: &str, actual: ExerciseMetrics) -> WorkoutLog {
    WorkoutLog {
        exercise_id: exercise_id.to_owned(),
        actual,
        completed_at: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
    }
}

/// Completed performance of `workout_id` on `date`
pub fn completed(workout_id: &str, date: NaiveDate, logs: Vec<WorkoutLog>) -> WorkoutPerformance {
    WorkoutPerformance {
        workout_id: workout_id.to_owned(),
        date,
        exercises: logs,
        total_duration: 30,
        completed: true,
    }
}

/// Performance saved without being completed
pub fn partial(workout_id: &str, date: NaiveDate, logs: Vec<WorkoutLog>) -> WorkoutPerformance {
    WorkoutPerformance {
        completed: false,
        ..completed(workout_id, date, logs)
    }
}

/// Three-exercise strength workout
pub fn strength_workout() -> Workout {
    Workout {
        id: "strength-a".to_owned(),
        name: "Full Body Strength".to_owned(),
        duration: "30 min".to_owned(),
        description: "Compound movements".to_owned(),
        accent_color: AccentColor::Coral,
        exercises: vec![
            reps_exercise("push-ups", 3, 10),
            time_exercise("plank", 60),
            weight_exercise("goblet-squat", 3, 10, 20.0),
        ],
        goal: FitnessGoal::MuscleGain,
    }
}
