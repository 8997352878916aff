// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Builds the memory or JSON file performance store behind a shared trait object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use super::{InMemoryPerformanceStore, JsonFilePerformanceStore, PerformanceStore};
use crate::config::{StoreBackend, StoreConfig};
use fitwiz_core::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Create the configured performance store
///
/// # Errors
///
/// Returns an error if the file backend cannot load its existing document
pub async fn create_store(config: &StoreConfig) -> AppResult<Arc<dyn PerformanceStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Initializing in-memory performance store");
            Ok(Arc::new(InMemoryPerformanceStore::new()))
        }
        StoreBackend::File => {
            let path = config.performances_file();
            info!(path = %path.display(), "Initializing JSON file performance store");
            Ok(Arc::new(JsonFilePerformanceStore::open(path).await?))
        }
    }
}
