// ABOUTME: Service layer combining the performance store, workout sources, and the adaptation engine
// ABOUTME: Shared by the CLI and library callers so plans are built the same way everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

//! Domain service layer

/// Daily plan building and session recording
pub mod daily_plan;

pub use daily_plan::{DailyPlan, DailyPlanService};
