// ABOUTME: Environment configuration management for store backend, data paths, and logging
// ABOUTME: Parses FitWiz environment variables into a typed ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Environment-based configuration

use crate::logging::LoggingConfig;
use fitwiz_core::constants::storage;
use fitwiz_core::errors::{AppError, AppResult};
use fitwiz_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where performances are kept
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process memory, lost on exit
    Memory,
    /// Single JSON document in the data directory
    #[default]
    File,
}

impl StoreBackend {
    /// Parse a backend name
    ///
    /// # Errors
    ///
    /// Returns an error for names other than `memory` and `file`
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Unknown store backend '{other}', expected 'memory' or 'file'"
            ))),
        }
    }
}

/// Performance store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backend implementation
    pub backend: StoreBackend,
    /// Directory holding the store file
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// In-memory store configuration
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            data_dir: default_data_dir(),
        }
    }

    /// Path of the JSON document used by the file backend
    #[must_use]
    pub fn performances_file(&self) -> PathBuf {
        self.data_dir.join(storage::PERFORMANCES_FILE)
    }
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Performance store settings
    pub store: StoreConfig,
    /// Workout catalog file
    pub workouts_path: PathBuf,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Progression engine settings
    pub intelligence: IntelligenceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ENVIRONMENT`, `FITWIZ_STORE`, `FITWIZ_DATA_DIR`,
    /// `FITWIZ_WORKOUTS_PATH`, the logging variables, and the
    /// `FITWIZ_PROGRESSION_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend is unknown or progression overrides are invalid
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));
        let backend = StoreBackend::parse(&env_var_or("FITWIZ_STORE", "file"))?;
        let data_dir = env::var("FITWIZ_DATA_DIR").map_or_else(|_| default_data_dir(), PathBuf::from);
        let workouts_path = env::var("FITWIZ_WORKOUTS_PATH")
            .map_or_else(|_| data_dir.join(storage::WORKOUTS_FILE), PathBuf::from);

        let config = Self {
            environment,
            store: StoreConfig { backend, data_dir },
            workouts_path,
            logging: LoggingConfig::from_env(),
            intelligence: IntelligenceConfig::load()?,
        };

        info!(
            environment = %config.environment,
            store.backend = ?config.store.backend,
            store.data_dir = %config.store.data_dir.display(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Platform data directory for FitWiz, `./data` when none is known
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data"),
        |dir| dir.join(storage::DATA_DIR_NAME),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
