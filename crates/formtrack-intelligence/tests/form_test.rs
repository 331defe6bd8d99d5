// ABOUTME: Tests for keypoint form analysis of squats and push-ups
// ABOUTME: Builds landmark skeletons and checks stages, deductions, reps, and detection fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use formtrack_core::models::{landmark, ExerciseType, PoseKeypoint, Stage, StageLabel};
use formtrack_intelligence::form::{analyze_form, detection_confidence, PUSH_UP_MIDDLE};
use formtrack_intelligence::PoseSignalProcessor;

fn skeleton() -> Vec<PoseKeypoint> {
    landmark::NAMES
        .iter()
        .map(|name| PoseKeypoint {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: 0.9,
            name: (*name).to_owned(),
        })
        .collect()
}

fn place(points: &mut [PoseKeypoint], index: usize, x: f64, y: f64) {
    points[index].x = x;
    points[index].y = y;
}

/// Upright squatter: hips well above the knees, knees tracking the ankles
fn standing() -> Vec<PoseKeypoint> {
    let mut points = skeleton();
    place(&mut points, landmark::LEFT_SHOULDER, 0.4, 0.25);
    place(&mut points, landmark::RIGHT_SHOULDER, 0.6, 0.25);
    place(&mut points, landmark::LEFT_HIP, 0.45, 0.5);
    place(&mut points, landmark::RIGHT_HIP, 0.55, 0.5);
    place(&mut points, landmark::LEFT_KNEE, 0.41, 0.65);
    place(&mut points, landmark::RIGHT_KNEE, 0.59, 0.65);
    place(&mut points, landmark::LEFT_ANKLE, 0.4, 0.85);
    place(&mut points, landmark::RIGHT_ANKLE, 0.6, 0.85);
    points
}

/// Bottom of a deep squat: hips below the knees
fn deep_squat() -> Vec<PoseKeypoint> {
    let mut points = standing();
    place(&mut points, landmark::LEFT_HIP, 0.45, 0.7);
    place(&mut points, landmark::RIGHT_HIP, 0.55, 0.7);
    place(&mut points, landmark::LEFT_KNEE, 0.41, 0.64);
    place(&mut points, landmark::RIGHT_KNEE, 0.59, 0.64);
    points
}

fn push_up(elbow_y_left: f64, elbow_y_right: f64) -> Vec<PoseKeypoint> {
    let mut points = skeleton();
    place(&mut points, landmark::LEFT_SHOULDER, 0.4, 0.5);
    place(&mut points, landmark::RIGHT_SHOULDER, 0.6, 0.5);
    place(&mut points, landmark::LEFT_ELBOW, 0.35, elbow_y_left);
    place(&mut points, landmark::RIGHT_ELBOW, 0.65, elbow_y_right);
    points
}

#[test]
fn test_standing_squat_is_up_and_too_shallow() {
    let result = analyze_form(ExerciseType::Squat, &standing());

    assert_eq!(result.stage, StageLabel::Known(Stage::Up));
    assert!((result.form_score - 80.0).abs() < 1e-9);
    assert_eq!(result.current_rep, 0);
    assert_eq!(
        result.warnings,
        vec![
            "Great form! 💪",
            "Go deeper - hips should go below knees",
            "Good knee alignment! 👌",
            "Good posture! 💪",
        ]
    );
    assert_eq!(result.keypoints.len(), landmark::COUNT);
}

#[test]
fn test_deep_squat_earns_bonus_capped_at_maximum() {
    let result = analyze_form(ExerciseType::Squat, &deep_squat());

    assert_eq!(result.stage, StageLabel::Known(Stage::Down));
    assert!((result.form_score - 100.0).abs() < 1e-9);
    assert_eq!(result.current_rep, 1);
    assert_eq!(result.warnings[0], "Perfect form! 🔥");
    assert_eq!(result.warnings[1], "Excellent depth! 🎯");
}

#[test]
fn test_squat_deductions_accumulate() {
    let mut points = deep_squat();
    // Knees caving in
    place(&mut points, landmark::LEFT_KNEE, 0.47, 0.64);
    place(&mut points, landmark::RIGHT_KNEE, 0.53, 0.64);
    // Torso leaning forward
    place(&mut points, landmark::LEFT_SHOULDER, 0.55, 0.3);
    place(&mut points, landmark::RIGHT_SHOULDER, 0.75, 0.3);

    let result = analyze_form(ExerciseType::Squat, &points);

    // 100 + 5 depth bonus - 15 valgus - 10 lean
    assert!((result.form_score - 80.0).abs() < 1e-9);
    assert!(result.warnings.contains(&"Keep knees aligned with toes".to_owned()));
    assert!(result.warnings.contains(&"Keep chest up and back straight".to_owned()));
    assert_eq!(result.warnings[0], "Great form! 💪");
}

#[test]
fn test_squat_asymmetry_and_shin_angle_while_down() {
    let mut points = deep_squat();
    place(&mut points, landmark::RIGHT_HIP, 0.55, 0.78);
    // Ankles well ahead of the knees
    place(&mut points, landmark::LEFT_ANKLE, 0.48, 0.85);
    place(&mut points, landmark::RIGHT_ANKLE, 0.72, 0.85);

    let result = analyze_form(ExerciseType::Squat, &points);

    assert_eq!(result.stage, StageLabel::Known(Stage::Down));
    assert!(result.warnings.contains(&"Keep body balanced and symmetric".to_owned()));
    assert!(result.warnings.contains(&"Try to keep shins more vertical".to_owned()));
}

#[test]
fn test_push_up_stages_include_middle_label() {
    let down = analyze_form(ExerciseType::PushUp, &push_up(0.65, 0.65));
    assert_eq!(down.stage, StageLabel::Known(Stage::Down));
    assert!((down.form_score - 100.0).abs() < 1e-9);
    assert_eq!(down.current_rep, 1);
    assert_eq!(down.warnings, vec!["Good range of motion!"]);

    let middle = analyze_form(ExerciseType::PushUp, &push_up(0.52, 0.52));
    assert_eq!(middle.stage, StageLabel::Unrecognized(PUSH_UP_MIDDLE.to_owned()));
    assert!((middle.form_score - 85.0).abs() < 1e-9);
    assert_eq!(middle.current_rep, 0);
    assert_eq!(middle.warnings, vec!["Go lower"]);

    let up = analyze_form(ExerciseType::PushUp, &push_up(0.35, 0.35));
    assert_eq!(up.stage, StageLabel::Known(Stage::Up));
}

#[test]
fn test_push_up_uneven_elbows_are_penalized() {
    let result = analyze_form(ExerciseType::PushUp, &push_up(0.6, 0.75));

    assert_eq!(result.stage, StageLabel::Known(Stage::Down));
    assert!((result.form_score - 90.0).abs() < 1e-9);
    assert_eq!(result.warnings, vec!["Keep elbows even", "Good range of motion!"]);
}

#[test]
fn test_partial_detection_returns_fixed_result() {
    let partial: Vec<PoseKeypoint> = skeleton().into_iter().take(20).collect();

    let squat = analyze_form(ExerciseType::Squat, &partial);
    assert!((squat.form_score - 70.0).abs() < 1e-9);
    assert_eq!(squat.stage, StageLabel::Known(Stage::Up));
    assert_eq!(squat.current_rep, 0);
    assert_eq!(
        squat.warnings,
        vec!["Incomplete pose detection - ensure full body is visible"]
    );
    // No lower-body landmarks in the first 20
    assert!(squat.confidence.abs() < f64::EPSILON);

    let push_up = analyze_form(ExerciseType::PushUp, &partial);
    assert_eq!(push_up.stage, StageLabel::Known(Stage::Rest));
    assert_eq!(push_up.warnings, vec!["Incomplete pose detection"]);
}

#[test]
fn test_empty_detection_reports_no_pose() {
    let result = analyze_form(ExerciseType::Squat, &[]);

    assert!(result.form_score.abs() < f64::EPSILON);
    assert_eq!(result.stage, StageLabel::Known(Stage::Rest));
    assert!(result.confidence.abs() < f64::EPSILON);
    assert!(result.warnings[0].starts_with("No pose detected"));
    assert!(result.keypoints.is_empty());
}

#[test]
fn test_confidence_is_mean_lower_body_visibility() {
    let mut points = standing();
    for (index, visibility) in landmark::LOWER_BODY.iter().zip([0.9, 0.8, 0.7, 0.6, 0.5, 0.4]) {
        points[*index].visibility = visibility;
    }
    // Upper body visibility does not count
    points[landmark::LEFT_SHOULDER].visibility = 0.0;

    assert!((detection_confidence(&points) - 0.65).abs() < 1e-9);
    let result = analyze_form(ExerciseType::Squat, &points);
    assert!((result.confidence - 0.65).abs() < 1e-9);
}

#[test]
fn test_exercises_without_dedicated_analysis_get_generic_result() {
    let result = analyze_form(ExerciseType::HammerCurl, &standing());

    assert!((result.form_score - 80.0).abs() < 1e-9);
    assert_eq!(result.stage, StageLabel::Known(Stage::Down));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_analyzed_frames_feed_the_smoother() {
    let processor = PoseSignalProcessor::default();
    let first = processor.smooth(&analyze_form(ExerciseType::Squat, &standing()), None);
    let second = processor.smooth(
        &analyze_form(ExerciseType::Squat, &deep_squat()),
        Some(&first),
    );

    assert_eq!(first.stage, Stage::Up);
    assert_eq!(first.form_score, 80);
    // Landmarks are clearly visible, so the 20 point jump moves a full step
    assert_eq!(second.form_score, 85);
    assert_eq!(second.stage, Stage::Down);
}
