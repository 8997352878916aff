// ABOUTME: `history` command - lists the days a user completed a workout
// ABOUTME: Reads the configured performance store over an inclusive date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use chrono::NaiveDate;
use fitwiz::config::ServerConfig;
use fitwiz::store::create_store;
use fitwiz_core::errors::AppResult;
use uuid::Uuid;

use crate::helpers::display::display_history;

/// Print completed days for `user` between `from` and `to`
pub async fn run(user: Uuid, from: NaiveDate, to: NaiveDate) -> AppResult<()> {
    let config = ServerConfig::from_env()?;
    let store = create_store(&config.store).await?;
    let dates = store.list_completed_dates(user, from, to).await?;
    display_history(from, to, &dates);
    Ok(())
}
