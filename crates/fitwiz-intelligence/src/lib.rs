// ABOUTME: Workout intelligence crate - progressive-overload adaptation and session metrics
// ABOUTME: Pure computation over fitwiz-core models with environment-tunable configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

#![deny(unsafe_code)]

//! # FitWiz Intelligence
//!
//! The adaptation engine that turns a user's last completed performance into
//! the next session's exercise targets, plus the configuration that tunes it.
//! Nothing in this crate performs I/O; storage and workout sources live in
//! the application crate.

/// Progression configuration with environment overrides and validation
pub mod config;

/// Session completion metrics
pub mod completion;

/// Adaptation engine
pub mod progression;

/// Per-type volume formulas and target transforms
pub mod rules;

pub use completion::CompletionSummary;
pub use config::{ConfigError, IntelligenceConfig, ProgressionConfig};
pub use progression::{
    adapt_workout, AdaptationRequest, Adjustment, ExerciseAdjustment, PerformanceBand,
    ProgressionEngine,
};
