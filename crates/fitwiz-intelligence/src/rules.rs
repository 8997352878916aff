// ABOUTME: Per-type progression rules - volume formula plus increase and decrease transforms
// ABOUTME: Resolves missing metric fields once through a single default table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Progression rules
//!
//! Every adaptable [`ExerciseType`] maps to exactly one [`ProgressionRule`],
//! selected once per exercise. A rule knows how to turn resolved metrics into
//! an output volume and how to scale the one target field that carries the
//! exercise's difficulty.
//!
//! Default resolution:
//!
//! | field  | target                 | actual     |
//! |--------|------------------------|------------|
//! | sets   | absent or 0 counts as 1 | absent = 1 |
//! | reps   | absent or 0 counts as 1 | absent = 1 |
//! | time   | absent or 0 counts as 1 | absent = 0 |
//! | weight | absent or <= 0 counts as 1 | absent = 1 |
//!
//! Clamping target fields keeps every target volume at least 1, so the
//! performance ratio is always finite.

use crate::config::ProgressionConfig;
use fitwiz_core::models::{ExerciseMetrics, ExerciseType};

/// Metrics with every field resolved to a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMetrics {
    /// Sets
    pub sets: f64,
    /// Repetitions per set
    pub reps: f64,
    /// Duration in seconds
    pub time: f64,
    /// Load
    pub weight: f64,
}

impl ResolvedMetrics {
    /// Resolve a prescribed target
    #[must_use]
    pub fn from_target(target: &ExerciseMetrics) -> Self {
        Self {
            sets: count_or_one(target.sets),
            reps: count_or_one(target.reps),
            time: count_or_one(target.time),
            weight: target.weight.filter(|w| *w > 0.0).unwrap_or(1.0),
        }
    }

    /// Resolve logged actual values
    #[must_use]
    pub fn from_actual(actual: &ExerciseMetrics) -> Self {
        Self {
            sets: actual.sets.map_or(1.0, f64::from),
            reps: actual.reps.map_or(1.0, f64::from),
            time: actual.time.map_or(0.0, f64::from),
            weight: actual.weight.unwrap_or(1.0),
        }
    }
}

fn count_or_one(value: Option<u32>) -> f64 {
    value.filter(|v| *v > 0).map_or(1.0, f64::from)
}

/// Volume formula and target transforms for one exercise type
pub trait ProgressionRule: Send + Sync {
    /// Output volume of resolved metrics
    fn volume(&self, metrics: &ResolvedMetrics) -> f64;

    /// Target scaled up by `percent` (greater than 100)
    fn increase(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics;

    /// Target scaled down by `percent` (less than 100) and held above the floor
    fn decrease(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics;

    /// Actual volume divided by target volume
    fn performance_ratio(&self, target: &ExerciseMetrics, actual: &ExerciseMetrics) -> f64 {
        let target_volume = self.volume(&ResolvedMetrics::from_target(target));
        let actual_volume = self.volume(&ResolvedMetrics::from_actual(actual));
        actual_volume / target_volume
    }
}

/// Rule for `reps` exercises: volume is sets x reps, adjusts `reps`
#[derive(Debug, Clone, Copy, Default)]
pub struct RepsRule;

/// Rule for `time` exercises: volume is duration, adjusts `time`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRule;

/// Rule for `weight` exercises: volume is sets x reps x load, adjusts `weight`
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightRule;

static REPS_RULE: RepsRule = RepsRule;
static TIME_RULE: TimeRule = TimeRule;
static WEIGHT_RULE: WeightRule = WeightRule;

/// Rule for an exercise type, `None` for types that are never adapted
#[must_use]
pub fn rule_for(exercise_type: ExerciseType) -> Option<&'static dyn ProgressionRule> {
    match exercise_type {
        ExerciseType::Reps => Some(&REPS_RULE),
        ExerciseType::Time => Some(&TIME_RULE),
        ExerciseType::Weight => Some(&WEIGHT_RULE),
        ExerciseType::Other => None,
    }
}

impl ProgressionRule for RepsRule {
    fn volume(&self, metrics: &ResolvedMetrics) -> f64 {
        metrics.sets * metrics.reps
    }

    fn increase(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        _config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            reps: target.reps.map(|reps| scale_count_up(reps, percent)),
            ..target.clone()
        }
    }

    fn decrease(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            reps: target
                .reps
                .map(|reps| scale_count_down(reps, percent).max(config.floors.min_reps)),
            ..target.clone()
        }
    }
}

impl ProgressionRule for TimeRule {
    fn volume(&self, metrics: &ResolvedMetrics) -> f64 {
        metrics.time
    }

    fn increase(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        _config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            time: target.time.map(|time| scale_count_up(time, percent)),
            ..target.clone()
        }
    }

    fn decrease(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            time: target
                .time
                .map(|time| scale_count_down(time, percent).max(config.floors.min_time_seconds)),
            ..target.clone()
        }
    }
}

impl ProgressionRule for WeightRule {
    fn volume(&self, metrics: &ResolvedMetrics) -> f64 {
        metrics.sets * metrics.reps * metrics.weight
    }

    fn increase(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            weight: target
                .weight
                .map(|weight| scale_load(weight, percent, config.weight_increment)),
            ..target.clone()
        }
    }

    fn decrease(
        &self,
        target: &ExerciseMetrics,
        percent: u32,
        config: &ProgressionConfig,
    ) -> ExerciseMetrics {
        ExerciseMetrics {
            weight: target.weight.map(|weight| {
                scale_load(weight, percent, config.weight_increment).max(config.floors.min_weight)
            }),
            ..target.clone()
        }
    }
}

/// `ceil(value * percent / 100)` in integer arithmetic
fn scale_count_up(value: u32, percent: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(percent)).div_ceil(100);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `floor(value * percent / 100)` in integer arithmetic
fn scale_count_down(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// `value * percent / 100` rounded to the nearest multiple of `increment`
fn scale_load(value: f64, percent: u32, increment: f64) -> f64 {
    let scaled = value * f64::from(percent) / 100.0;
    (scaled / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_scaling_is_exact() {
        assert_eq!(scale_count_up(10, 110), 11);
        assert_eq!(scale_count_up(10, 115), 12);
        assert_eq!(scale_count_down(60, 90), 54);
        assert_eq!(scale_count_down(1, 90), 0);
    }

    #[test]
    fn test_load_rounds_to_increment() {
        assert!((scale_load(20.0, 115, 0.5) - 23.0).abs() < f64::EPSILON);
        assert!((scale_load(2.7, 90, 0.5) - 2.5).abs() < f64::EPSILON);
        assert!((scale_load(21.0, 110, 0.5) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_target_time_counts_as_one() {
        let target = ExerciseMetrics::timed(0);
        let actual = ExerciseMetrics::timed(30);
        let ratio = TimeRule.performance_ratio(&target, &actual);
        assert!((ratio - 30.0).abs() < f64::EPSILON);
    }
}
