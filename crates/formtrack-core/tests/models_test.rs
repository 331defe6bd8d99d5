// ABOUTME: Tests for core pose models, stage transition table, and exercise catalog
// ABOUTME: Covers stage parsing, raw label handling, wire format, and fallback frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use formtrack_core::errors::ErrorCode;
use formtrack_core::models::{ExerciseType, RawPoseResult, Stage, StageLabel};

#[test]
fn test_transition_table_matches_rep_cycle() {
    assert_eq!(Stage::Rest.successors(), &[Stage::Up, Stage::Down]);
    assert_eq!(Stage::Up.successors(), &[Stage::Down, Stage::Rest]);
    assert_eq!(Stage::Down.successors(), &[Stage::Hold, Stage::Up]);
    assert_eq!(Stage::Hold.successors(), &[Stage::Up, Stage::Rest]);
}

#[test]
fn test_disallowed_transitions() {
    assert!(!Stage::Rest.can_transition_to(Stage::Hold));
    assert!(!Stage::Up.can_transition_to(Stage::Hold));
    assert!(!Stage::Down.can_transition_to(Stage::Rest));
    assert!(!Stage::Hold.can_transition_to(Stage::Down));

    // Self-loops are not transitions
    for stage in Stage::ALL {
        assert!(!stage.can_transition_to(stage));
    }
}

#[test]
fn test_stage_parsing_is_case_insensitive() {
    assert_eq!(" Hold ".parse::<Stage>().unwrap(), Stage::Hold);
    assert_eq!("UP".parse::<Stage>().unwrap(), Stage::Up);

    let err = "middle".parse::<Stage>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_unrecognized_stage_label_survives_round_trip() {
    let label = StageLabel::from("middle");
    assert_eq!(label.stage(), None);
    assert_eq!(label.to_string(), "middle");

    let json = serde_json::to_string(&label).unwrap();
    assert_eq!(json, "\"middle\"");
}

#[test]
fn test_raw_result_reads_backend_payload() {
    let payload = r#"{
        "formScore": 87.5,
        "stage": "down",
        "confidence": 0.91,
        "currentRep": 3,
        "warnings": ["Keep knees aligned"],
        "keypoints": [{"x": 0.4, "y": 0.5, "z": 0.0, "visibility": 0.9}]
    }"#;

    let raw: RawPoseResult = serde_json::from_str(payload).unwrap();
    assert!(raw.stage.is(Stage::Down));
    assert_eq!(raw.current_rep, 3);
    assert_eq!(raw.keypoints.len(), 1);
    assert_eq!(raw.keypoints[0].name, "unknown");
}

#[test]
fn test_raw_result_defaults_optional_fields() {
    let raw: RawPoseResult =
        serde_json::from_str(r#"{"formScore": 60, "stage": "rest", "confidence": 0.5}"#).unwrap();
    assert_eq!(raw.current_rep, 0);
    assert!(raw.warnings.is_empty());
    assert!(raw.keypoints.is_empty());
}

#[test]
fn test_fallback_frame_is_neutral() {
    let raw = RawPoseResult::fallback("timeout");
    assert!(raw.stage.is(Stage::Rest));
    assert!(raw.confidence < 0.7);
    assert_eq!(raw.current_rep, 0);
    assert_eq!(raw.warnings, vec!["Pose analysis unavailable: timeout".to_owned()]);
}

#[test]
fn test_exercise_catalog_lookup() {
    assert_eq!("push-up".parse::<ExerciseType>().unwrap(), ExerciseType::PushUp);
    assert_eq!(ExerciseType::Squat.profile().default_reps, 15);
    assert_eq!(ExerciseType::catalog().count(), ExerciseType::ALL.len());

    let err = "deadlift".parse::<ExerciseType>().unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.context.resource_id.as_deref(), Some("deadlift"));
}
