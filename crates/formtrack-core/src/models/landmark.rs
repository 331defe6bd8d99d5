// ABOUTME: Index layout of the 33-point body landmark model produced by the pose estimator
// ABOUTME: Named indices let form analysis address landmarks without magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! Body landmark indices
//!
//! Landmarks arrive as a flat list in estimator order. A complete detection
//! has exactly [`COUNT`] entries; anything shorter is a partial detection.

/// Landmarks in a complete detection
pub const COUNT: usize = 33;

/// Landmark names in estimator order
pub const NAMES: [&str; COUNT] = [
    "nose",
    "left_eye_inner",
    "left_eye",
    "left_eye_outer",
    "right_eye_inner",
    "right_eye",
    "right_eye_outer",
    "left_ear",
    "right_ear",
    "mouth_left",
    "mouth_right",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_pinky",
    "right_pinky",
    "left_index",
    "right_index",
    "left_thumb",
    "right_thumb",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
    "left_heel",
    "right_heel",
    "left_foot_index",
    "right_foot_index",
];

/// `left_shoulder`
pub const LEFT_SHOULDER: usize = 11;
/// `right_shoulder`
pub const RIGHT_SHOULDER: usize = 12;
/// `left_elbow`
pub const LEFT_ELBOW: usize = 13;
/// `right_elbow`
pub const RIGHT_ELBOW: usize = 14;
/// `left_wrist`
pub const LEFT_WRIST: usize = 15;
/// `right_wrist`
pub const RIGHT_WRIST: usize = 16;
/// `left_hip`
pub const LEFT_HIP: usize = 23;
/// `right_hip`
pub const RIGHT_HIP: usize = 24;
/// `left_knee`
pub const LEFT_KNEE: usize = 25;
/// `right_knee`
pub const RIGHT_KNEE: usize = 26;
/// `left_ankle`
pub const LEFT_ANKLE: usize = 27;
/// `right_ankle`
pub const RIGHT_ANKLE: usize = 28;

/// Hips, knees, and ankles; their mean visibility is the detection confidence
pub const LOWER_BODY: [usize; 6] = [
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_ANKLE,
    RIGHT_ANKLE,
];

/// Name of the landmark at `index`, `None` past the end of the model
#[must_use]
pub fn name(index: usize) -> Option<&'static str> {
    NAMES.get(index).copied()
}
