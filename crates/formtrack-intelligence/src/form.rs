// ABOUTME: Deterministic exercise form analysis from body landmarks
// ABOUTME: Derives stage, form score, warnings, rep signal, and confidence for one frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Keypoint Form Analysis
//!
//! Turns the landmarks of a single frame into a [`RawPoseResult`], the same
//! shape a remote pose backend returns. The output is per-frame and noisy by
//! nature; it is meant to be fed through [`crate::PoseSignalProcessor`].
//!
//! Coordinates are normalized image coordinates with `y` growing downwards,
//! so a hip *above* the knee has the smaller `y`.
//!
//! ## Squat
//!
//! Hip clearance is the knee height minus the hip height. Clearance at or
//! below a small margin is the `down` stage, anything higher is `up`. Starting
//! from 100 the score gains a bonus for excellent depth and loses points for:
//!
//! - shallow depth
//! - knees caving in or splaying out relative to the ankles
//! - a torso leaning away from the hips
//! - left/right asymmetry of hips or knees
//! - angled shins while down
//!
//! A rep is reported while down at good depth. The first warning is a
//! headline matching the final score.
//!
//! ## Push-up
//!
//! Stage comes from elbow height relative to the shoulders: `up`, `down`, or
//! the unrecognized `middle` label in between. Uneven elbows and partial range
//! of motion cost points; a rep is reported while down.

use formtrack_core::constants::{form_analysis as limits, form_score};
use formtrack_core::models::{landmark, ExerciseType, PoseKeypoint, RawPoseResult, Stage, StageLabel};

/// Label for push-up frames between the up and down positions
pub const PUSH_UP_MIDDLE: &str = "middle";

/// Analyze one frame of landmarks for `exercise`
///
/// Never fails. An empty detection yields a zero score with a visibility
/// warning; a partial detection yields a fixed neutral result. The returned
/// result carries a copy of `keypoints`.
#[must_use]
pub fn analyze_form(exercise: ExerciseType, keypoints: &[PoseKeypoint]) -> RawPoseResult {
    if keypoints.is_empty() {
        return RawPoseResult::new(
            form_score::MIN,
            Stage::Rest,
            0.0,
            0,
            vec!["No pose detected - ensure full body is visible".to_owned()],
        );
    }

    let mut result = match Skeleton::complete(keypoints) {
        Some(skeleton) => match exercise {
            ExerciseType::Squat => analyze_squat(&skeleton),
            ExerciseType::PushUp => analyze_push_up(&skeleton),
            ExerciseType::HammerCurl | ExerciseType::ChairYoga | ExerciseType::BreathingExercise => {
                RawPoseResult::new(limits::GENERIC_SCORE, Stage::Down, 0.0, 1, Vec::new())
            }
        },
        None => incomplete(exercise),
    };
    result.confidence = detection_confidence(keypoints);
    result.keypoints = keypoints.to_vec();
    result
}

/// Mean visibility of the hips, knees, and ankles that were detected
///
/// Zero when none of them are present.
#[must_use]
pub fn detection_confidence(keypoints: &[PoseKeypoint]) -> f64 {
    let visible: Vec<f64> = landmark::LOWER_BODY
        .iter()
        .filter_map(|&index| keypoints.get(index))
        .map(|keypoint| keypoint.visibility)
        .collect();
    if visible.is_empty() {
        0.0
    } else {
        visible.iter().sum::<f64>() / visible.len() as f64
    }
}

fn incomplete(exercise: ExerciseType) -> RawPoseResult {
    match exercise {
        ExerciseType::PushUp => RawPoseResult::new(
            limits::INCOMPLETE_SCORE,
            Stage::Rest,
            0.0,
            1,
            vec!["Incomplete pose detection".to_owned()],
        ),
        _ => RawPoseResult::new(
            limits::INCOMPLETE_SCORE,
            Stage::Up,
            0.0,
            0,
            vec!["Incomplete pose detection - ensure full body is visible".to_owned()],
        ),
    }
}

/// Borrowed view over a complete landmark set
struct Skeleton<'a> {
    points: &'a [PoseKeypoint],
}

impl<'a> Skeleton<'a> {
    fn complete(points: &'a [PoseKeypoint]) -> Option<Self> {
        (points.len() >= landmark::COUNT).then_some(Self { points })
    }

    fn at(&self, index: usize) -> &PoseKeypoint {
        &self.points[index]
    }

    /// Mean of `field` over a left/right pair
    fn center(&self, left: usize, right: usize, field: fn(&PoseKeypoint) -> f64) -> f64 {
        (field(self.at(left)) + field(self.at(right))) / 2.0
    }

    fn spread(&self, left: usize, right: usize, field: fn(&PoseKeypoint) -> f64) -> f64 {
        (field(self.at(left)) - field(self.at(right))).abs()
    }
}

fn x(point: &PoseKeypoint) -> f64 {
    point.x
}

fn y(point: &PoseKeypoint) -> f64 {
    point.y
}

fn analyze_squat(skeleton: &Skeleton<'_>) -> RawPoseResult {
    use landmark::{
        LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
        RIGHT_SHOULDER,
    };

    let clearance =
        skeleton.center(LEFT_KNEE, RIGHT_KNEE, y) - skeleton.center(LEFT_HIP, RIGHT_HIP, y);
    let stage = if clearance < limits::SQUAT_DOWN_CLEARANCE {
        Stage::Down
    } else {
        Stage::Up
    };

    let mut score = limits::BASE_SCORE;
    let mut warnings = Vec::new();

    if clearance < limits::SQUAT_EXCELLENT_DEPTH {
        warnings.push("Excellent depth! 🎯");
        score += limits::SQUAT_DEPTH_BONUS;
    } else if clearance < limits::SQUAT_GOOD_DEPTH {
        warnings.push("Good depth! 👍");
    } else if clearance > limits::SQUAT_SHALLOW {
        warnings.push("Go deeper - hips should go below knees");
        score -= limits::SQUAT_SHALLOW_PENALTY;
    }

    let knee_width = skeleton.spread(LEFT_KNEE, RIGHT_KNEE, x);
    let ankle_width = skeleton.spread(LEFT_ANKLE, RIGHT_ANKLE, x);
    if knee_width < ankle_width * limits::KNEE_VALGUS_RATIO {
        warnings.push("Keep knees aligned with toes");
        score -= limits::KNEE_VALGUS_PENALTY;
    } else if knee_width > ankle_width * limits::KNEE_WIDE_RATIO {
        warnings.push("Knees slightly too wide");
        score -= limits::KNEE_WIDE_PENALTY;
    } else {
        warnings.push("Good knee alignment! 👌");
    }

    let lean = (skeleton.center(LEFT_SHOULDER, RIGHT_SHOULDER, x)
        - skeleton.center(LEFT_HIP, RIGHT_HIP, x))
    .abs();
    if lean > limits::TORSO_LEAN_LIMIT {
        warnings.push("Keep chest up and back straight");
        score -= limits::TORSO_LEAN_PENALTY;
    } else {
        warnings.push("Good posture! 💪");
    }

    if skeleton.spread(LEFT_HIP, RIGHT_HIP, y) > limits::SYMMETRY_LIMIT
        || skeleton.spread(LEFT_KNEE, RIGHT_KNEE, y) > limits::SYMMETRY_LIMIT
    {
        warnings.push("Keep body balanced and symmetric");
        score -= limits::SYMMETRY_PENALTY;
    }

    if stage == Stage::Down {
        let shin_offset = skeleton.center(LEFT_ANKLE, RIGHT_ANKLE, x)
            - skeleton.center(LEFT_KNEE, RIGHT_KNEE, x);
        if shin_offset > limits::SHIN_ANGLE_LIMIT {
            warnings.push("Try to keep shins more vertical");
            score -= limits::SHIN_ANGLE_PENALTY;
        }
    }

    let current_rep = u32::from(stage == Stage::Down && clearance < limits::SQUAT_GOOD_DEPTH);
    let score = score.clamp(form_score::MIN, form_score::MAX);
    warnings.insert(0, headline(score));

    RawPoseResult::new(
        score,
        stage,
        0.0,
        current_rep,
        warnings.into_iter().map(str::to_owned).collect(),
    )
}

fn headline(score: f64) -> &'static str {
    if score >= limits::PERFECT_HEADLINE {
        "Perfect form! 🔥"
    } else if score >= limits::GREAT_HEADLINE {
        "Great form! 💪"
    } else if score >= limits::GOOD_HEADLINE {
        "Good form, minor adjustments needed"
    } else {
        "Focus on form improvements"
    }
}

fn analyze_push_up(skeleton: &Skeleton<'_>) -> RawPoseResult {
    use landmark::{LEFT_ELBOW, LEFT_SHOULDER, RIGHT_ELBOW, RIGHT_SHOULDER};

    let shoulder_y = skeleton.center(LEFT_SHOULDER, RIGHT_SHOULDER, y);
    let elbow_y = skeleton.center(LEFT_ELBOW, RIGHT_ELBOW, y);

    let stage = if elbow_y < shoulder_y - limits::PUSH_UP_UP_OFFSET {
        StageLabel::Known(Stage::Up)
    } else if elbow_y > shoulder_y + limits::PUSH_UP_DOWN_OFFSET {
        StageLabel::Known(Stage::Down)
    } else {
        StageLabel::Unrecognized(PUSH_UP_MIDDLE.to_owned())
    };

    let mut score = limits::BASE_SCORE;
    let mut warnings = Vec::new();

    if skeleton.spread(LEFT_ELBOW, RIGHT_ELBOW, y) > limits::ELBOW_EVEN_LIMIT {
        warnings.push("Keep elbows even");
        score -= limits::ELBOW_UNEVEN_PENALTY;
    }

    if elbow_y > shoulder_y + limits::PUSH_UP_RANGE_OFFSET {
        warnings.push("Good range of motion!");
    } else {
        warnings.push("Go lower");
        score -= limits::PUSH_UP_RANGE_PENALTY;
    }

    let current_rep = u32::from(stage.is(Stage::Down));
    RawPoseResult::new(
        score.max(form_score::MIN),
        stage,
        0.0,
        current_rep,
        warnings.into_iter().map(str::to_owned).collect(),
    )
}
