// ABOUTME: Configuration management module for FitWiz runtime settings
// ABOUTME: Environment-only configuration of store backend, paths, logging, and progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig, StoreBackend, StoreConfig};
