// ABOUTME: Progressive-overload thresholds, rates, and floors
// ABOUTME: Default values for the adaptation engine's band classification and transforms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

/// Ratio at or above which the next target is increased
pub const INCREASE_RATIO_THRESHOLD: f64 = 1.0;

/// Ratio at or above which the larger increase applies
pub const STRONG_INCREASE_RATIO_THRESHOLD: f64 = 1.2;

/// Ratio below which the next target is decreased
pub const DECREASE_RATIO_THRESHOLD: f64 = 0.7;

/// Increase for ratios in [1.0, 1.2), as a percentage of the current target
pub const INCREASE_PERCENT: u32 = 110;

/// Increase for ratios of 1.2 and above
pub const STRONG_INCREASE_PERCENT: u32 = 115;

/// Decrease applied below the decrease threshold
pub const DECREASE_PERCENT: u32 = 90;

/// Lowest rep target a decrease can produce
pub const MIN_REPS: u32 = 1;

/// Lowest duration target (seconds) a decrease can produce
pub const MIN_TIME_SECONDS: u32 = 10;

/// Lowest load target a decrease can produce
pub const MIN_WEIGHT: f64 = 2.5;

/// Load targets are rounded to multiples of this increment
pub const WEIGHT_INCREMENT: f64 = 0.5;
