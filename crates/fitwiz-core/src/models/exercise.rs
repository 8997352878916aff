// ABOUTME: Exercise definitions with typed prescriptions (reps, time, weight)
// ABOUTME: Shared metric shape used for both prescribed targets and logged actuals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How an exercise is measured
///
/// The variant decides which metric field carries the exercise's difficulty.
/// Types produced by a workout generator that are not recognized deserialize
/// into `Other` and are never adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Counted repetitions, optionally over several sets
    Reps,
    /// Held or performed for a duration in seconds
    Time,
    /// Loaded sets of repetitions
    Weight,
    /// Unrecognized measurement type
    #[serde(other)]
    Other,
}

impl ExerciseType {
    /// Lowercase identifier as it appears in workout JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reps => "reps",
            Self::Time => "time",
            Self::Weight => "weight",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sets, reps, duration and load for one exercise
///
/// Used for the prescribed `target` of an [`Exercise`] and for the `actual`
/// values of a logged set. Every field is optional; absent fields are omitted
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseMetrics {
    /// Number of sets
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub reps: Option<u32>,
    /// Duration in seconds
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<u32>,
    /// Load in mass units (kg or lbs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Read a count written as any JSON number
///
/// Generators and hand-edited catalogs write `45.0` as often as `45`.
/// Fractional values round to the nearest whole count; negative, non-finite
/// and oversized values are rejected.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!(
            "expected a non-negative count, found {value}"
        )));
    }
    Ok(Some(rounded as u32))
}

impl ExerciseMetrics {
    /// Metrics for a set/rep prescription
    #[must_use]
    pub const fn reps(sets: u32, reps: u32) -> Self {
        Self {
            sets: Some(sets),
            reps: Some(reps),
            time: None,
            weight: None,
        }
    }

    /// Metrics for a timed prescription
    #[must_use]
    pub const fn timed(seconds: u32) -> Self {
        Self {
            sets: None,
            reps: None,
            time: Some(seconds),
            weight: None,
        }
    }

    /// Metrics for a loaded set/rep prescription
    #[must_use]
    pub const fn weighted(sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            sets: Some(sets),
            reps: Some(reps),
            time: None,
            weight: Some(weight),
        }
    }

    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sets.is_none() && self.reps.is_none() && self.time.is_none() && self.weight.is_none()
    }
}

/// A single exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier referenced by workout logs
    pub id: String,
    /// Display name
    pub name: String,
    /// Measurement type
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Prescribed difficulty
    #[serde(default)]
    pub target: ExerciseMetrics,
    /// Form and technique instructions
    #[serde(default)]
    pub description: String,
    /// Demo video location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Exercise {
    /// Create an exercise without description or video
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        exercise_type: ExerciseType,
        target: ExerciseMetrics,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exercise_type,
            target,
            description: String::new(),
            video_url: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
