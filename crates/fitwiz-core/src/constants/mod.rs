// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for progression, storage, and generated workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Constants module
//!
//! Application constants grouped by domain.

/// Progressive-overload defaults
pub mod progression;

/// Service identification for logging
pub mod service_names {
    /// Library/CLI service name
    pub const FITWIZ: &str = "fitwiz";
    /// Command-line tool name
    pub const FITWIZ_CLI: &str = "fitwiz-cli";
}

/// Performance store defaults
pub mod storage {
    /// Application directory name under the platform data directory
    pub const DATA_DIR_NAME: &str = "fitwiz";
    /// File holding every saved performance for the JSON file store
    pub const PERFORMANCES_FILE: &str = "performances.json";
    /// File holding the static workout catalog
    pub const WORKOUTS_FILE: &str = "workouts.json";
}

/// Identifiers assigned to generated workouts
pub mod generated_workouts {
    /// Prefix for generated workout ids (`ai-workout-{millis}-{index}`)
    pub const WORKOUT_ID_PREFIX: &str = "ai-workout";
    /// Prefix for generated exercise ids (`exercise-{millis}-{workout}-{exercise}`)
    pub const EXERCISE_ID_PREFIX: &str = "exercise";
    /// Name used when reporting generator failures
    pub const SOURCE_NAME: &str = "workout generator";
}
