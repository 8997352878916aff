// ABOUTME: Main library entry point for FitWiz workout planning
// ABOUTME: Wires performance storage, workout sources, and sessions around the adaptation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

#![deny(unsafe_code)]

//! # FitWiz
//!
//! Progressive-overload workout planning. Each day a user's workouts are
//! adapted from their most recent completed performance: targets go up after
//! a strong session, down after a weak one, and stay put otherwise.
//!
//! ## Architecture
//!
//! - **`fitwiz_core`**: models, error codes, and constants
//! - **`fitwiz_intelligence`**: the pure adaptation engine and its configuration
//! - **Store**: persistence of completed performances per user and workout
//! - **Workout sources**: catalogs and generated workouts to adapt
//! - **Session**: logging a workout in progress and completing it
//! - **Services**: the daily plan flow tying the pieces together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use fitwiz::services::DailyPlanService;
//! use fitwiz::store::InMemoryPerformanceStore;
//! use fitwiz::workout_source::StaticCatalog;
//! use fitwiz_core::errors::AppResult;
//! use fitwiz_intelligence::ProgressionEngine;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryPerformanceStore::new());
//!     let service = DailyPlanService::new(store, ProgressionEngine::new());
//!     let catalog = StaticCatalog::new(Vec::new());
//!
//!     let plans = service
//!         .plan_day(Uuid::new_v4(), &catalog, Utc::now().date_naive())
//!         .await?;
//!     println!("{} workouts planned", plans.len());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Daily plan orchestration
pub mod services;

/// Workout session tracking
pub mod session;

/// Performance persistence
pub mod store;

/// Workout catalogs and generated workouts
pub mod workout_source;
