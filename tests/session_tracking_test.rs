// ABOUTME: Tests for the single-session controller and monotonic rep counter
// ABOUTME: Covers rep monotonicity, fallback frames, snapshot history, and session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::raw;
use formtrack::session::{RepCounter, TrackingSession};
use formtrack_core::models::{ExerciseType, Stage};
use formtrack_intelligence::{PerformanceGrade, PoseSignalProcessor};
use uuid::Uuid;

#[test]
fn test_rep_counter_never_moves_backwards() {
    let mut counter = RepCounter::new();

    assert_eq!(counter.observe(1), 1);
    assert_eq!(counter.observe(2), 2);
    assert_eq!(counter.observe(1), 2);
    assert_eq!(counter.observe(0), 2);
    assert_eq!(counter.observe(3), 3);

    assert_eq!(counter.displayed(), 3);
    assert_eq!(counter.regressions(), 2);
}

#[test]
fn test_session_seeds_from_first_frame() {
    let mut session = TrackingSession::new(ExerciseType::Squat, PoseSignalProcessor::default());
    assert!(session.current().is_none());

    let snapshot = session.ingest(&raw(82.0, Stage::Up, 0.9, 1));

    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.state.form_score, 82);
    assert_eq!(snapshot.state.stage, Stage::Up);
    assert_eq!(snapshot.state.stable_frame_count, 1);
    assert_eq!(snapshot.displayed_rep, 1);
    assert!(!snapshot.fallback);
    assert_eq!(session.current(), Some(&snapshot.state));
}

#[test]
fn test_displayed_rep_ignores_backend_regressions() {
    let mut session = TrackingSession::new(ExerciseType::PushUp, PoseSignalProcessor::default());

    let displayed: Vec<u32> = [1, 2, 1, 3, 2]
        .into_iter()
        .map(|rep| session.ingest(&raw(80.0, Stage::Rest, 0.9, rep)).displayed_rep)
        .collect();

    assert_eq!(displayed, vec![1, 2, 2, 3, 3]);
    assert_eq!(session.displayed_rep(), 3);
    assert_eq!(session.rep_regressions(), 2);
}

#[test]
fn test_fallback_frame_is_damped_and_keeps_stage_and_reps() {
    let mut session = TrackingSession::new(ExerciseType::Squat, PoseSignalProcessor::default());
    session.ingest(&raw(80.0, Stage::Up, 0.9, 1));

    let snapshot = session.ingest_fallback("pose backend timed out");

    assert!(snapshot.fallback);
    assert_eq!(snapshot.displayed_rep, 1);
    // |70 - 80| is not under the stability window, confidence 0.3 is low: damped step
    assert_eq!(snapshot.state.form_score, 78);
    assert_eq!(snapshot.state.stage, Stage::Up);
    assert_eq!(snapshot.state.stable_frame_count, 0);
    assert!((snapshot.state.confidence - 0.6).abs() < f64::EPSILON);
    assert!(snapshot.state.warnings.is_empty());
}

#[test]
fn test_snapshots_record_every_frame_in_order() {
    let mut session = TrackingSession::new(ExerciseType::Squat, PoseSignalProcessor::default());
    session.ingest(&raw(80.0, Stage::Rest, 0.9, 0));
    session.ingest(&raw(81.0, Stage::Rest, 0.9, 0));
    session.ingest_fallback("analyzer offline");
    session.ingest(&raw(82.0, Stage::Up, 0.95, 1));

    let indices: Vec<u64> = session.snapshots().iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(
        session.snapshots().iter().filter(|s| s.fallback).count(),
        1
    );
}

#[test]
fn test_finish_summarizes_recorded_frames() {
    let started = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let id = Uuid::new_v4();
    let mut session = TrackingSession::with_id(
        id,
        ExerciseType::Squat,
        PoseSignalProcessor::default(),
        started,
    );
    session.ingest(&raw(90.0, Stage::Up, 0.95, 0));
    session.ingest(&raw(92.0, Stage::Down, 0.95, 1));
    session.ingest(&raw(94.0, Stage::Hold, 0.95, 1));
    session.ingest(&raw(93.0, Stage::Up, 0.95, 2));

    let summary = session.finish(started + Duration::seconds(20));

    assert_eq!(summary.session_id, id);
    assert_eq!(summary.exercise_type, ExerciseType::Squat);
    assert_eq!(summary.frames_analyzed, 4);
    assert_eq!(summary.fallback_frames, 0);
    assert_eq!(summary.total_reps, 2);
    assert!((summary.duration_seconds - 20.0).abs() < f64::EPSILON);
    assert!((summary.calories_burned - 10.0).abs() < f64::EPSILON);
    assert_eq!(summary.performance_grade, PerformanceGrade::A);
    assert_eq!(summary.stage_distribution.get(&Stage::Up), Some(&2));
    assert_eq!(summary.stage_distribution.get(&Stage::Down), Some(&1));
    assert_eq!(summary.stage_distribution.get(&Stage::Hold), Some(&1));
}
