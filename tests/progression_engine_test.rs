// ABOUTME: Integration tests for the progressive-overload adaptation engine
// ABOUTME: Covers band boundaries, per-type transforms, floors, defaults, and purity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitWiz

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    completed, day, init_test_logging, log, reps_exercise, time_exercise, weight_exercise,
};
use fitwiz_core::models::{Exercise, ExerciseMetrics, ExerciseType};
use fitwiz_intelligence::{
    adapt_workout, AdaptationRequest, Adjustment, PerformanceBand, ProgressionConfig,
    ProgressionEngine,
};

fn engine() -> ProgressionEngine {
    init_test_logging();
    ProgressionEngine::with_config(ProgressionConfig::default())
}

fn assert_weight(exercise: &Exercise, expected: f64) {
    let weight = exercise.target.weight.unwrap();
    assert!(
        (weight - expected).abs() < 1e-9,
        "expected weight {expected}, got {weight}"
    );
}

#[test]
fn test_no_history_returns_exercises_unchanged() {
    let exercises = vec![
        reps_exercise("push-ups", 3, 10),
        time_exercise("plank", 60),
        weight_exercise("squat", 3, 10, 20.0),
    ];

    let adapted = engine().adapt(&exercises, None);

    assert_eq!(adapted, exercises);
}

#[test]
fn test_unmatched_log_passes_exercise_through() {
    let exercises = vec![reps_exercise("push-ups", 3, 10), time_exercise("plank", 60)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::timed(90))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0], exercises[0]);
    assert_eq!(adapted[1].target.time, Some(69));
}

#[test]
fn test_ratio_of_exactly_one_increases_by_ten_percent() {
    let exercises = vec![reps_exercise("push-ups", 3, 10)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("push-ups", ExerciseMetrics::reps(3, 10))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.reps, Some(11));
    assert_eq!(adapted[0].target.sets, Some(3));
}

#[test]
fn test_strong_performance_increases_by_fifteen_percent() {
    let exercises = vec![reps_exercise("push-ups", 3, 10)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("push-ups", ExerciseMetrics::reps(3, 13))],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    assert_eq!(plan[0].exercise.target.reps, Some(12));
    match plan[0].adjustment {
        Adjustment::Increased { ratio, percent } => {
            assert!((ratio - 1.3).abs() < 1e-9);
            assert_eq!(percent, 115);
        }
        other => panic!("expected increase, got {other:?}"),
    }
}

#[test]
fn test_weak_timed_performance_decreases() {
    let exercises = vec![time_exercise("plank", 60)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::timed(30))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.time, Some(54));
}

#[test]
fn test_time_decrease_respects_floor() {
    let exercises = vec![time_exercise("plank", 10)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::timed(2))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.time, Some(10));
}

#[test]
fn test_reps_decrease_respects_floor() {
    let exercises = vec![reps_exercise("burpees", 1, 1)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("burpees", ExerciseMetrics::reps(1, 0))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.reps, Some(1));
}

#[test]
fn test_near_miss_keeps_target() {
    let exercises = vec![weight_exercise("squat", 3, 10, 20.0)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("squat", ExerciseMetrics::weighted(3, 9, 18.0))],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    assert_eq!(plan[0].exercise, exercises[0]);
    let ratio = plan[0].adjustment.ratio().unwrap();
    assert!((ratio - 0.81).abs() < 1e-9);
    assert!(!plan[0].adjustment.changed_target());
}

#[test]
fn test_weight_increase_rounds_to_half_unit() {
    let exercises = vec![weight_exercise("squat", 3, 10, 20.0)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("squat", ExerciseMetrics::weighted(3, 10, 25.0))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_weight(&adapted[0], 23.0);
    assert_eq!(adapted[0].target.reps, Some(10));
}

#[test]
fn test_weight_decrease_never_below_floor() {
    let exercises = vec![weight_exercise("curl", 3, 10, 2.7)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("curl", ExerciseMetrics::weighted(1, 5, 2.7))],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    assert_weight(&adapted[0], 2.5);
}

#[test]
fn test_adapt_is_pure() {
    let exercises = vec![
        reps_exercise("push-ups", 3, 10),
        time_exercise("plank", 60),
        weight_exercise("squat", 3, 10, 20.0),
    ];
    let snapshot = exercises.clone();
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![
            log("push-ups", ExerciseMetrics::reps(3, 13)),
            log("plank", ExerciseMetrics::timed(20)),
            log("squat", ExerciseMetrics::weighted(3, 10, 20.0)),
        ],
    );
    let previous_snapshot = previous.clone();
    let engine = engine();

    let first = engine.adapt(&exercises, Some(&previous));
    let second = engine.adapt(&exercises, Some(&previous));

    assert_eq!(first, second);
    assert_eq!(exercises, snapshot);
    assert_eq!(previous, previous_snapshot);
}

#[test]
fn test_output_keeps_length_and_order() {
    let exercises = vec![
        weight_exercise("c", 3, 10, 20.0),
        reps_exercise("a", 3, 10),
        time_exercise("b", 60),
    ];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![
            log("b", ExerciseMetrics::timed(60)),
            log("a", ExerciseMetrics::reps(3, 10)),
        ],
    );

    let adapted = engine().adapt(&exercises, Some(&previous));

    let ids: Vec<&str> = adapted.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn test_unknown_type_passes_through() {
    let json = r#"{"id":"yoga","name":"Sun salutation","type":"flow","target":{"reps":5}}"#;
    let exercise: Exercise = serde_json::from_str(json).unwrap();
    assert_eq!(exercise.exercise_type, ExerciseType::Other);
    let exercises = vec![exercise];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("yoga", ExerciseMetrics::reps(1, 50))],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    assert_eq!(plan[0].exercise, exercises[0]);
    assert_eq!(plan[0].adjustment, Adjustment::Maintained { ratio: 1.0 });
}

#[test]
fn test_missing_target_field_is_not_fabricated() {
    let exercises = vec![Exercise::new(
        "jumping-jacks",
        "Jumping jacks",
        ExerciseType::Reps,
        ExerciseMetrics {
            sets: Some(3),
            ..ExerciseMetrics::default()
        },
    )];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("jumping-jacks", ExerciseMetrics::reps(3, 20))],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    assert!(plan[0].adjustment.changed_target());
    assert_eq!(plan[0].exercise.target.reps, None);
    assert_eq!(plan[0].exercise.target.sets, Some(3));
}

#[test]
fn test_missing_actual_time_counts_as_zero() {
    let exercises = vec![time_exercise("plank", 60)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::default())],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    assert_eq!(plan[0].exercise.target.time, Some(54));
    assert_eq!(plan[0].adjustment.ratio(), Some(0.0));
}

#[test]
fn test_zero_target_time_does_not_divide_by_zero() {
    let exercises = vec![time_exercise("plank", 0)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::timed(0))],
    );

    let plan = engine().plan(&exercises, Some(&previous));

    let ratio = plan[0].adjustment.ratio().unwrap();
    assert!(ratio.is_finite());
    assert_eq!(plan[0].exercise.target.time, Some(10));
}

#[test]
fn test_plan_reports_missing_history() {
    let exercises = vec![reps_exercise("push-ups", 3, 10), time_exercise("plank", 60)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("plank", ExerciseMetrics::timed(60))],
    );

    let engine = engine();
    let without = engine.plan(&exercises, None);
    let with = engine.plan(&exercises, Some(&previous));

    assert!(without.iter().all(|a| a.adjustment == Adjustment::NoHistory));
    assert_eq!(with[0].adjustment, Adjustment::NotLogged);
    assert!(with[1].adjustment.changed_target());
}

#[test]
fn test_band_classification_boundaries() {
    let config = ProgressionConfig::default();

    assert_eq!(PerformanceBand::classify(1.2, &config), PerformanceBand::StrongIncrease);
    assert_eq!(PerformanceBand::classify(1.0, &config), PerformanceBand::Increase);
    assert_eq!(PerformanceBand::classify(0.999, &config), PerformanceBand::Maintain);
    assert_eq!(PerformanceBand::classify(0.7, &config), PerformanceBand::Maintain);
    assert_eq!(PerformanceBand::classify(0.69, &config), PerformanceBand::Decrease);
}

#[test]
fn test_custom_rates_are_applied() {
    let mut config = ProgressionConfig::default();
    config.rates.increase_percent = 120;
    let engine = ProgressionEngine::with_config(config);
    let exercises = vec![reps_exercise("push-ups", 3, 10)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("push-ups", ExerciseMetrics::reps(3, 10))],
    );

    let adapted = engine.adapt(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.reps, Some(12));
}

#[test]
fn test_batch_matches_sequential_adaptation() {
    let first = vec![reps_exercise("push-ups", 3, 10)];
    let second = vec![time_exercise("plank", 60)];
    let first_previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("push-ups", ExerciseMetrics::reps(3, 13))],
    );
    let engine = engine();

    let results = engine.adapt_batch(&[
        AdaptationRequest {
            exercises: &first,
            previous: Some(&first_previous),
        },
        AdaptationRequest {
            exercises: &second,
            previous: None,
        },
    ]);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], engine.adapt(&first, Some(&first_previous)));
    assert_eq!(results[1], second);
}

#[test]
fn test_adapt_workout_uses_default_settings() {
    let exercises = vec![reps_exercise("push-ups", 3, 10)];
    let previous = completed(
        "w1",
        day(2025, 3, 1),
        vec![log("push-ups", ExerciseMetrics::reps(3, 10))],
    );

    let adapted = adapt_workout(&exercises, Some(&previous));

    assert_eq!(adapted[0].target.reps, Some(11));
}
