// ABOUTME: Core types and constants for the FitWiz workout platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

#![deny(unsafe_code)]

//! # FitWiz Core
//!
//! Foundation crate providing shared types and constants for FitWiz. It holds
//! no behavior beyond model helpers so that the engine and the application
//! crate can depend on it without pulling in I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Exercises, workouts, logs, and performance records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, Workout, `WorkoutPerformance`, etc.)
pub mod models;
