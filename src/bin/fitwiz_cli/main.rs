// ABOUTME: FitWiz CLI - adapt workouts, build daily plans, and record performances
// ABOUTME: Thin command-line front end over the fitwiz library services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz
//!
//! Usage:
//! ```bash
//! # Adapt an exercise list against a previous performance
//! fitwiz-cli adapt --exercises exercises.json --previous performance.json
//!
//! # Today's adapted plan for a user from the configured catalog
//! fitwiz-cli plan --user 7f1c0b7e-2a55-4a47-9d0c-3a4c2f1e9b10
//!
//! # Save a completed performance
//! fitwiz-cli log --user 7f1c0b7e-2a55-4a47-9d0c-3a4c2f1e9b10 --performance today.json
//!
//! # Days with a completed workout
//! fitwiz-cli history --user 7f1c0b7e-2a55-4a47-9d0c-3a4c2f1e9b10 --from 2025-01-01 --to 2025-01-31
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fitwiz::logging::LoggingConfig;
use fitwiz_core::constants::service_names;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "fitwiz-cli",
    about = "FitWiz workout planning CLI",
    long_about = "Adapt workouts with progressive overload, plan the day, and record performances."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Adapt an exercise list from a JSON file and print the next-session targets
    Adapt {
        /// JSON file holding an array of exercises
        #[arg(long)]
        exercises: PathBuf,

        /// JSON file holding the previous completed performance
        #[arg(long)]
        previous: Option<PathBuf>,
    },

    /// Print the adapted plan for every catalog workout
    Plan {
        /// User to plan for
        #[arg(long)]
        user: Uuid,

        /// Plan date (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Save a performance from a JSON file
    Log {
        /// User the performance belongs to
        #[arg(long)]
        user: Uuid,

        /// JSON file holding the performance
        #[arg(long)]
        performance: PathBuf,
    },

    /// List days with a completed workout
    History {
        /// User to list
        #[arg(long)]
        user: Uuid,

        /// First day, inclusive
        #[arg(long)]
        from: NaiveDate,

        /// Last day, inclusive
        #[arg(long)]
        to: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.service_name = service_names::FITWIZ_CLI.to_owned();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!("FitWiz CLI started");

    match cli.command {
        Command::Adapt {
            exercises,
            previous,
        } => commands::adapt::run(&exercises, previous.as_deref()).await?,
        Command::Plan { user, date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            commands::plan::run(user, date).await?;
        }
        Command::Log { user, performance } => commands::log::run(user, &performance).await?,
        Command::History { user, from, to } => commands::history::run(user, from, to).await?,
    }

    Ok(())
}
