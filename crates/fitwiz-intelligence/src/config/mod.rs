// ABOUTME: Configuration module for fitwiz-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

/// Intelligence module configuration (progression thresholds, rates, floors)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig, ProgressionConfig};
