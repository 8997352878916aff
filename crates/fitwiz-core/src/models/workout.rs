// ABOUTME: Workout plan model grouping exercises under a goal
// ABOUTME: Matches the JSON produced by static catalogs and the workout generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use serde::{Deserialize, Serialize};

use super::Exercise;

/// Training goal a workout is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Fat burning and calorie expenditure
    WeightLoss,
    /// Muscle building and strength
    MuscleGain,
    /// Cardiovascular endurance and stamina
    Endurance,
}

/// Display accent attached to a workout card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Coral accent
    Coral,
    /// Teal accent
    Teal,
    /// Primary theme accent
    Primary,
}

impl AccentColor {
    /// Accent rotation used when assigning colors by position
    pub const ROTATION: [Self; 3] = [Self::Coral, Self::Teal, Self::Primary];

    /// Accent for the workout at `index`
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::ROTATION[index % Self::ROTATION.len()]
    }
}

/// A named set of exercises performed together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Identifier used to look up previous performances
    pub id: String,
    /// Display name
    pub name: String,
    /// Human-readable length, e.g. "30 min"
    pub duration: String,
    /// Motivational summary
    #[serde(default)]
    pub description: String,
    /// Card accent
    pub accent_color: AccentColor,
    /// Exercises in prescribed order
    pub exercises: Vec<Exercise>,
    /// Goal the workout targets
    pub goal: FitnessGoal,
}

impl Workout {
    /// Planned length in whole minutes
    ///
    /// Reads the leading integer of `duration` ("30 min" is 30, "45" is 45)
    /// and yields 0 when the text does not start with a number.
    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        let trimmed = self.duration.trim_start();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        trimmed[..digits_end].parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout_with_duration(duration: &str) -> Workout {
        Workout {
            id: "w".to_owned(),
            name: "W".to_owned(),
            duration: duration.to_owned(),
            description: String::new(),
            accent_color: AccentColor::Teal,
            exercises: Vec::new(),
            goal: FitnessGoal::Endurance,
        }
    }

    #[test]
    fn test_duration_minutes_reads_leading_number() {
        assert_eq!(workout_with_duration("30 min").duration_minutes(), 30);
        assert_eq!(workout_with_duration(" 45").duration_minutes(), 45);
        assert_eq!(workout_with_duration("quick").duration_minutes(), 0);
    }

    #[test]
    fn test_accent_colors_cycle() {
        assert_eq!(AccentColor::for_index(0), AccentColor::Coral);
        assert_eq!(AccentColor::for_index(4), AccentColor::Teal);
        assert_eq!(AccentColor::for_index(5), AccentColor::Primary);
    }

    #[test]
    fn test_goal_uses_kebab_case() {
        let goal: Result<FitnessGoal, _> = serde_json::from_str("\"weight-loss\"");
        assert!(matches!(goal, Ok(FitnessGoal::WeightLoss)));
    }
}
