// ABOUTME: Domain models for exercises, workouts, and logged performances
// ABOUTME: Serialized with the camelCase field names used by workout JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Core data models

/// Exercise definitions and metric records
pub mod exercise;
/// Workout logs and performance records
pub mod performance;
/// Workout plans and goals
pub mod workout;

pub use exercise::{Exercise, ExerciseMetrics, ExerciseType};
pub use performance::{WorkoutLog, WorkoutPerformance};
pub use workout::{AccentColor, FitnessGoal, Workout};
