// ABOUTME: Tests for end-of-session summaries built from frame snapshots
// ABOUTME: Covers grading, calories, improvement areas, and stage distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use formtrack_core::models::{ExerciseType, FrameSnapshot, SmoothedPoseState, Stage};
use formtrack_intelligence::{PerformanceGrade, SessionSummary};
use uuid::Uuid;

fn snapshot(index: u64, score: u8, stage: Stage, rep: u32, fallback: bool) -> FrameSnapshot {
    FrameSnapshot {
        index,
        timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        state: SmoothedPoseState {
            form_score: score,
            stage,
            confidence: 0.9,
            warnings: Vec::new(),
            stable_frame_count: 3,
        },
        displayed_rep: rep,
        fallback,
    }
}

#[test]
fn test_grade_boundaries() {
    assert_eq!(PerformanceGrade::from_accuracy(90.0), PerformanceGrade::A);
    assert_eq!(PerformanceGrade::from_accuracy(89.99), PerformanceGrade::B);
    assert_eq!(PerformanceGrade::from_accuracy(80.0), PerformanceGrade::B);
    assert_eq!(PerformanceGrade::from_accuracy(70.0), PerformanceGrade::C);
    assert_eq!(PerformanceGrade::from_accuracy(69.9), PerformanceGrade::D);
}

#[test]
fn test_summary_of_good_session() {
    let started = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let ended = started + Duration::seconds(60);
    let snapshots = vec![
        snapshot(0, 88, Stage::Up, 0, false),
        snapshot(1, 92, Stage::Down, 1, false),
        snapshot(2, 95, Stage::Hold, 1, false),
        snapshot(3, 91, Stage::Up, 2, false),
    ];

    let summary = SessionSummary::from_snapshots(
        Uuid::new_v4(),
        ExerciseType::Squat,
        started,
        ended,
        &snapshots,
    );

    assert_eq!(summary.total_reps, 2);
    assert_eq!(summary.frames_analyzed, 4);
    assert_eq!(summary.fallback_frames, 0);
    assert!((summary.average_accuracy - 91.5).abs() < 1e-9);
    assert_eq!(summary.performance_grade, PerformanceGrade::A);
    assert!((summary.calories_burned - 30.0).abs() < 1e-9);
    assert_eq!(summary.peak_form_score, 95);
    assert_eq!(summary.lowest_form_score, 88);
    assert_eq!(summary.improvement_areas, vec!["Great form! Keep it up!".to_owned()]);
    assert_eq!(
        summary.next_session_recommendations[0],
        "Try increasing reps to 4"
    );
    assert_eq!(summary.stage_distribution.get(&Stage::Up), Some(&2));
    assert_eq!(summary.stage_distribution.get(&Stage::Rest), None);
}

#[test]
fn test_summary_of_struggling_session() {
    let started = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let ended = started + Duration::milliseconds(12_500);
    let snapshots = vec![
        snapshot(0, 70, Stage::Rest, 0, true),
        snapshot(1, 72, Stage::Rest, 0, false),
        snapshot(2, 75, Stage::Up, 1, false),
    ];

    let summary = SessionSummary::from_snapshots(
        Uuid::new_v4(),
        ExerciseType::PushUp,
        started,
        ended,
        &snapshots,
    );

    assert!((summary.average_accuracy - 72.33).abs() < 1e-9);
    assert_eq!(summary.performance_grade, PerformanceGrade::C);
    assert_eq!(summary.fallback_frames, 1);
    assert!((summary.calories_burned - 6.3).abs() < 1e-9);
    assert_eq!(
        summary.improvement_areas,
        vec![
            "Focus on form consistency".to_owned(),
            "Maintain steady pace".to_owned()
        ]
    );
}

#[test]
fn test_empty_session_summary() {
    let started = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

    let summary =
        SessionSummary::from_snapshots(Uuid::new_v4(), ExerciseType::ChairYoga, started, started, &[]);

    assert_eq!(summary.total_reps, 0);
    assert!(summary.average_accuracy.abs() < f64::EPSILON);
    assert_eq!(summary.performance_grade, PerformanceGrade::D);
    assert!(summary.stage_distribution.is_empty());
    assert_eq!(
        summary.next_session_recommendations[0],
        "Try increasing reps to 2"
    );
}

#[test]
fn test_summary_serializes_stage_keys_as_labels() {
    let started = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let summary = SessionSummary::from_snapshots(
        Uuid::new_v4(),
        ExerciseType::Squat,
        started,
        started + Duration::seconds(2),
        &[snapshot(0, 80, Stage::Hold, 0, false)],
    );

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["stage_distribution"]["hold"], 1);
    assert_eq!(json["performance_grade"], "B");
    assert_eq!(json["exercise_type"], "squat");
}
