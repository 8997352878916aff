// ABOUTME: Progressive-overload configuration for the workout adaptation engine
// ABOUTME: Configures band thresholds, percent rates, target floors, and load rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Progression Configuration
//!
//! Thresholds classify a performance ratio into increase, maintain, or
//! decrease bands. Rates are whole percentages so that integer targets are
//! scaled exactly (`10 reps * 110%` is 11, not 11.000000000000002 rounded up).

use fitwiz_core::constants::progression;
use serde::{Deserialize, Serialize};

/// Progression engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Ratio thresholds separating the bands
    pub thresholds: ProgressionThresholds,
    /// Percent rates applied to the primary target field
    pub rates: ProgressionRates,
    /// Lower bounds a decrease cannot cross
    pub floors: ProgressionFloors,
    /// Load targets are rounded to multiples of this value
    pub weight_increment: f64,
}

/// Ratio thresholds for band classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionThresholds {
    /// Ratio at or above which difficulty increases
    pub increase: f64,
    /// Ratio at or above which the strong increase rate applies
    pub strong_increase: f64,
    /// Ratio below which difficulty decreases
    pub decrease: f64,
}

/// Percent rates applied to targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRates {
    /// Increase percentage for the normal increase band
    pub increase_percent: u32,
    /// Increase percentage for the strong increase band
    pub strong_increase_percent: u32,
    /// Decrease percentage
    pub decrease_percent: u32,
}

/// Minimum targets after a decrease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionFloors {
    /// Minimum repetitions
    pub min_reps: u32,
    /// Minimum duration in seconds
    pub min_time_seconds: u32,
    /// Minimum load
    pub min_weight: f64,
}

impl Default for ProgressionThresholds {
    fn default() -> Self {
        Self {
            increase: progression::INCREASE_RATIO_THRESHOLD,
            strong_increase: progression::STRONG_INCREASE_RATIO_THRESHOLD,
            decrease: progression::DECREASE_RATIO_THRESHOLD,
        }
    }
}

impl Default for ProgressionRates {
    fn default() -> Self {
        Self {
            increase_percent: progression::INCREASE_PERCENT,
            strong_increase_percent: progression::STRONG_INCREASE_PERCENT,
            decrease_percent: progression::DECREASE_PERCENT,
        }
    }
}

impl Default for ProgressionFloors {
    fn default() -> Self {
        Self {
            min_reps: progression::MIN_REPS,
            min_time_seconds: progression::MIN_TIME_SECONDS,
            min_weight: progression::MIN_WEIGHT,
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            thresholds: ProgressionThresholds::default(),
            rates: ProgressionRates::default(),
            floors: ProgressionFloors::default(),
            weight_increment: progression::WEIGHT_INCREMENT,
        }
    }
}
