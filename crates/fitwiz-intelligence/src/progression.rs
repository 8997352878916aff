// ABOUTME: Progressive-overload adaptation engine for next-session exercise targets
// ABOUTME: Compares the last completed performance with each target and scales it up, down, or holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Workout adaptation engine
//!
//! Given the exercises of a workout and the most recent completed performance
//! of that workout, the engine computes the targets for the next session. It
//! is pure: no I/O, no shared state, and the inputs are never modified. The
//! same inputs always produce the same outputs.
//!
//! For every exercise with a matching log the performance ratio
//! (actual volume / target volume) selects a band:
//!
//! - ratio >= 1.0: increase by 10%, or by 15% when ratio >= 1.2
//! - ratio < 0.7: decrease by 10%, never below the type's floor
//! - otherwise: keep the target as is
//!
//! Only the field that carries the exercise's difficulty changes (`reps`,
//! `time` or `weight`). Fields absent from a target stay absent.

use crate::config::{IntelligenceConfig, ProgressionConfig};
use crate::rules::rule_for;
use fitwiz_core::models::{Exercise, WorkoutLog, WorkoutPerformance};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of a performance ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// Target met or exceeded
    Increase,
    /// Target exceeded by the strong-increase margin
    StrongIncrease,
    /// Target nearly met
    Maintain,
    /// Target clearly missed
    Decrease,
}

impl PerformanceBand {
    /// Classify a ratio against the configured thresholds
    #[must_use]
    pub fn classify(ratio: f64, config: &ProgressionConfig) -> Self {
        let thresholds = &config.thresholds;
        if ratio >= thresholds.strong_increase {
            Self::StrongIncrease
        } else if ratio >= thresholds.increase {
            Self::Increase
        } else if ratio < thresholds.decrease {
            Self::Decrease
        } else {
            Self::Maintain
        }
    }
}

/// What the engine decided for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adjustment {
    /// No previous performance was available
    NoHistory,
    /// The previous performance has no log for this exercise
    NotLogged,
    /// Target raised by `percent`
    Increased {
        /// Performance ratio that triggered the change
        ratio: f64,
        /// Applied rate as a percentage of the old target
        percent: u32,
    },
    /// Target kept
    Maintained {
        /// Performance ratio (1.0 for exercise types that are never adapted)
        ratio: f64,
    },
    /// Target lowered by `percent`
    Decreased {
        /// Performance ratio that triggered the change
        ratio: f64,
        /// Applied rate as a percentage of the old target
        percent: u32,
    },
}

impl Adjustment {
    /// Performance ratio when a log was compared
    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        match self {
            Self::NoHistory | Self::NotLogged => None,
            Self::Increased { ratio, .. }
            | Self::Maintained { ratio }
            | Self::Decreased { ratio, .. } => Some(*ratio),
        }
    }

    /// True when the target was changed
    #[must_use]
    pub const fn changed_target(&self) -> bool {
        matches!(self, Self::Increased { .. } | Self::Decreased { .. })
    }
}

/// An exercise with its next-session target and the decision behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAdjustment {
    /// Exercise carrying the next-session target
    pub exercise: Exercise,
    /// Decision taken for this exercise
    pub adjustment: Adjustment,
}

/// One workout to adapt in a batch
#[derive(Debug, Clone, Copy)]
pub struct AdaptationRequest<'a> {
    /// Current exercises of the workout
    pub exercises: &'a [Exercise],
    /// Most recent completed performance of the workout, if any
    pub previous: Option<&'a WorkoutPerformance>,
}

/// Progressive-overload engine with configurable thresholds and rates
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionEngine {
    /// Create an engine using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().progression.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Next-session exercises for a workout
    ///
    /// Returns `exercises` unchanged when there is no previous performance.
    /// The result has the same length and order as the input.
    #[must_use]
    pub fn adapt(
        &self,
        exercises: &[Exercise],
        previous: Option<&WorkoutPerformance>,
    ) -> Vec<Exercise> {
        match previous {
            None => exercises.to_vec(),
            Some(performance) => exercises
                .iter()
                .map(|exercise| match performance.log_for(&exercise.id) {
                    Some(log) => self.adjust_exercise(exercise, log).exercise,
                    None => exercise.clone(),
                })
                .collect(),
        }
    }

    /// Next-session exercises together with the decision for each one
    #[must_use]
    pub fn plan(
        &self,
        exercises: &[Exercise],
        previous: Option<&WorkoutPerformance>,
    ) -> Vec<ExerciseAdjustment> {
        exercises
            .iter()
            .map(|exercise| {
                let Some(performance) = previous else {
                    return ExerciseAdjustment {
                        exercise: exercise.clone(),
                        adjustment: Adjustment::NoHistory,
                    };
                };
                performance.log_for(&exercise.id).map_or_else(
                    || ExerciseAdjustment {
                        exercise: exercise.clone(),
                        adjustment: Adjustment::NotLogged,
                    },
                    |log| self.adjust_exercise(exercise, log),
                )
            })
            .collect()
    }

    /// Compare one exercise with its log and compute the next target
    #[must_use]
    pub fn adjust_exercise(&self, exercise: &Exercise, log: &WorkoutLog) -> ExerciseAdjustment {
        let Some(rule) = rule_for(exercise.exercise_type) else {
            debug!(
                exercise_id = %exercise.id,
                exercise_type = %exercise.exercise_type,
                "Exercise type is not adapted, keeping target"
            );
            return ExerciseAdjustment {
                exercise: exercise.clone(),
                adjustment: Adjustment::Maintained { ratio: 1.0 },
            };
        };

        let ratio = rule.performance_ratio(&exercise.target, &log.actual);
        let band = PerformanceBand::classify(ratio, &self.config);
        let rates = &self.config.rates;

        let (target, adjustment) = match band {
            PerformanceBand::StrongIncrease | PerformanceBand::Increase => {
                let percent = if band == PerformanceBand::StrongIncrease {
                    rates.strong_increase_percent
                } else {
                    rates.increase_percent
                };
                (
                    Some(rule.increase(&exercise.target, percent, &self.config)),
                    Adjustment::Increased { ratio, percent },
                )
            }
            PerformanceBand::Decrease => {
                let percent = rates.decrease_percent;
                (
                    Some(rule.decrease(&exercise.target, percent, &self.config)),
                    Adjustment::Decreased { ratio, percent },
                )
            }
            PerformanceBand::Maintain => (None, Adjustment::Maintained { ratio }),
        };

        debug!(
            exercise_id = %exercise.id,
            exercise_type = %exercise.exercise_type,
            ratio,
            band = ?band,
            "Computed next-session target"
        );

        let exercise = match target {
            Some(target) => Exercise {
                target,
                ..exercise.clone()
            },
            None => exercise.clone(),
        };

        ExerciseAdjustment {
            exercise,
            adjustment,
        }
    }

    /// Adapt many workouts in parallel
    ///
    /// Results are returned in request order.
    #[must_use]
    pub fn adapt_batch(&self, requests: &[AdaptationRequest<'_>]) -> Vec<Vec<Exercise>> {
        requests
            .par_iter()
            .map(|request| self.adapt(request.exercises, request.previous))
            .collect()
    }
}

/// Adapt a workout with the default progression settings
///
/// Convenience wrapper around [`ProgressionEngine::adapt`] that ignores
/// environment overrides.
#[must_use]
pub fn adapt_workout(
    exercises: &[Exercise],
    previous: Option<&WorkoutPerformance>,
) -> Vec<Exercise> {
    ProgressionEngine::with_config(ProgressionConfig::default()).adapt(exercises, previous)
}
