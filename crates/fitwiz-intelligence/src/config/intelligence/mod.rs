// ABOUTME: Intelligence configuration container with environment overrides and validation
// ABOUTME: Holds progression settings and exposes a validated process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Intelligence configuration
//!
//! Defaults come from `fitwiz_core::constants::progression`. Any field can be
//! overridden through `FITWIZ_PROGRESSION_*` environment variables; the result
//! is validated before use.

/// Configuration error types
pub mod error;
/// Progressive-overload settings
pub mod progression;

pub use error::ConfigError;
pub use progression::{
    ProgressionConfig, ProgressionFloors, ProgressionRates, ProgressionThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the workout adaptation engine
    pub progression: ProgressionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration, loading it on first access
    ///
    /// Falls back to defaults when the environment holds invalid values.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not finite, thresholds are unordered, or rates and floors are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let progression = &self.progression;
        let thresholds = &progression.thresholds;

        let finite_values = [
            thresholds.increase,
            thresholds.strong_increase,
            thresholds.decrease,
            progression.weight_increment,
            progression.floors.min_weight,
        ];
        if !finite_values.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "thresholds, weight increment and minimum weight must be finite",
            ));
        }

        if thresholds.decrease <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "decrease threshold must be positive",
            ));
        }
        if thresholds.decrease > thresholds.increase {
            return Err(ConfigError::InvalidRange(
                "decrease threshold must be <= increase threshold",
            ));
        }
        if thresholds.strong_increase < thresholds.increase {
            return Err(ConfigError::InvalidRange(
                "strong increase threshold must be >= increase threshold",
            ));
        }

        let rates = &progression.rates;
        if rates.increase_percent <= 100 || rates.strong_increase_percent < rates.increase_percent {
            return Err(ConfigError::InvalidRange(
                "increase rates must exceed 100% and strong rate must be >= normal rate",
            ));
        }
        if rates.decrease_percent == 0 || rates.decrease_percent >= 100 {
            return Err(ConfigError::ValueOutOfRange(
                "decrease rate must be between 1% and 99%",
            ));
        }

        if progression.weight_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight increment must be positive",
            ));
        }
        if progression.floors.min_weight < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum weight must not be negative",
            ));
        }

        Ok(())
    }

    /// Parse an environment variable into `target` if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let progression = &mut self.progression;

        Self::apply_env_var(
            "FITWIZ_PROGRESSION_INCREASE_THRESHOLD",
            &mut progression.thresholds.increase,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_STRONG_INCREASE_THRESHOLD",
            &mut progression.thresholds.strong_increase,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_DECREASE_THRESHOLD",
            &mut progression.thresholds.decrease,
        )?;

        Self::apply_env_var(
            "FITWIZ_PROGRESSION_INCREASE_PERCENT",
            &mut progression.rates.increase_percent,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_STRONG_INCREASE_PERCENT",
            &mut progression.rates.strong_increase_percent,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_DECREASE_PERCENT",
            &mut progression.rates.decrease_percent,
        )?;

        Self::apply_env_var(
            "FITWIZ_PROGRESSION_MIN_REPS",
            &mut progression.floors.min_reps,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_MIN_TIME_SECONDS",
            &mut progression.floors.min_time_seconds,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_MIN_WEIGHT",
            &mut progression.floors.min_weight,
        )?;
        Self::apply_env_var(
            "FITWIZ_PROGRESSION_WEIGHT_INCREMENT",
            &mut progression.weight_increment,
        )?;

        Ok(self)
    }
}
