// ABOUTME: Output formatting helpers for fitwiz-cli
// ABOUTME: Renders daily plans and completion history for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

use chrono::NaiveDate;
use fitwiz::services::DailyPlan;
use fitwiz::session::target_summary;
use fitwiz_intelligence::Adjustment;

fn adjustment_label(adjustment: &Adjustment) -> String {
    match adjustment {
        Adjustment::NoHistory => "first session".to_owned(),
        Adjustment::NotLogged => "not logged last time".to_owned(),
        Adjustment::Increased { ratio, percent } => {
            format!("up {}% (ratio {ratio:.2})", percent.saturating_sub(100))
        }
        Adjustment::Maintained { ratio } => format!("hold (ratio {ratio:.2})"),
        Adjustment::Decreased { ratio, percent } => {
            format!("down {}% (ratio {ratio:.2})", 100_u32.saturating_sub(*percent))
        }
    }
}

/// Print one workout of a daily plan
pub fn display_plan(plan: &DailyPlan) {
    println!("\n{} ({})", plan.workout.name, plan.workout.duration);
    println!("{}", "=".repeat(60));
    if plan.completed_today {
        println!("   Completed today");
    }
    if let Some(previous) = plan.previous_date {
        println!("   Adapted from {previous}");
    }
    for entry in &plan.adjustments {
        println!(
            "   {:<28} {:<24} {}",
            entry.exercise.name,
            target_summary(&entry.exercise.target),
            adjustment_label(&entry.adjustment)
        );
    }
}

/// Print completed days in a range
pub fn display_history(from: NaiveDate, to: NaiveDate, dates: &[NaiveDate]) {
    println!("Completed workouts {from} to {to}: {} days", dates.len());
    for date in dates {
        println!("   {date}");
    }
}
