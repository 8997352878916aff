// ABOUTME: Workout sources supplying the exercise lists that get adapted each day
// ABOUTME: Static catalogs, JSON catalog files, and parsed generator output behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Workout sources
//!
//! A [`WorkoutSource`] hands out the current workouts for a user. The daily
//! plan service adapts whatever a source returns, so catalogs and generated
//! workouts are interchangeable.

pub mod generated;
pub mod json_catalog;

pub use generated::parse_generated_workouts;
pub use json_catalog::JsonCatalogSource;

use async_trait::async_trait;
use fitwiz_core::errors::AppResult;
use fitwiz_core::models::Workout;

/// Supplier of workouts
#[async_trait]
pub trait WorkoutSource: Send + Sync {
    /// Source name for logs and error messages
    fn name(&self) -> &'static str;

    /// Current workouts, in display order
    async fn load_workouts(&self) -> AppResult<Vec<Workout>>;
}

/// Fixed in-memory list of workouts
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    workouts: Vec<Workout>,
}

impl StaticCatalog {
    /// Catalog over the given workouts
    #[must_use]
    pub const fn new(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// Workouts held by the catalog
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }
}

#[async_trait]
impl WorkoutSource for StaticCatalog {
    fn name(&self) -> &'static str {
        "static catalog"
    }

    async fn load_workouts(&self) -> AppResult<Vec<Workout>> {
        Ok(self.workouts.clone())
    }
}
