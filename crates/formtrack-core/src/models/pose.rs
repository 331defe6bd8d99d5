// ABOUTME: Raw per-frame pose analysis results and the smoothed, UI-facing pose state
// ABOUTME: Wire format uses camelCase field names to match the pose backend payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stage::{Stage, StageLabel};
use crate::constants::fallback;

/// Single body landmark from the pose estimator, in normalized image coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseKeypoint {
    /// Horizontal position (0.0 = left edge, 1.0 = right edge)
    pub x: f64,
    /// Vertical position (0.0 = top edge, 1.0 = bottom edge)
    pub y: f64,
    /// Depth relative to the hips
    pub z: f64,
    /// Landmark visibility estimate (0.0-1.0)
    pub visibility: f64,
    /// Landmark name (`left_hip`, `right_knee`, ...)
    #[serde(default = "unknown_keypoint_name")]
    pub name: String,
}

fn unknown_keypoint_name() -> String {
    "unknown".to_owned()
}

/// One frame's unfiltered output from the pose-estimation backend
///
/// Values are not trusted: scores and confidences may fall outside their
/// documented ranges and the rep counter may regress. Consumers clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoseResult {
    /// Instantaneous form-quality estimate (0-100)
    pub form_score: f64,
    /// Per-frame stage classification
    pub stage: StageLabel,
    /// Estimator confidence for this frame (0.0-1.0)
    pub confidence: f64,
    /// Rep counter as reported by the estimator
    #[serde(default)]
    pub current_rep: u32,
    /// Form-correction messages, in display order
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Detected landmarks, when the backend sends them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keypoints: Vec<PoseKeypoint>,
}

impl RawPoseResult {
    /// Create a raw result without keypoints
    #[must_use]
    pub fn new(
        form_score: f64,
        stage: impl Into<StageLabel>,
        confidence: f64,
        current_rep: u32,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            form_score,
            stage: stage.into(),
            confidence,
            current_rep,
            warnings,
            keypoints: Vec::new(),
        }
    }

    /// Frame substituted when the analyzer fails or times out
    ///
    /// Neutral score, `rest` stage, and a confidence low enough that the
    /// smoother will not accept any stage change from it.
    #[must_use]
    pub fn fallback(reason: &str) -> Self {
        Self::new(
            fallback::FORM_SCORE,
            Stage::Rest,
            fallback::CONFIDENCE,
            0,
            vec![format!("Pose analysis unavailable: {reason}")],
        )
    }
}

/// Temporally smoothed, UI-facing exercise state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedPoseState {
    /// Rate-limited form score (0-100)
    pub form_score: u8,
    /// Stage filtered through the transition table
    pub stage: Stage,
    /// Confidence clamped to the display band
    pub confidence: f64,
    /// Warnings, replaced only after several stable frames
    pub warnings: Vec<String>,
    /// Consecutive frames where score and stage stayed close to the previous frame
    pub stable_frame_count: u8,
}

/// Per-frame record kept by a tracking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    /// Zero-based index within the session
    pub index: u64,
    /// When the frame was ingested
    pub timestamp: DateTime<Utc>,
    /// Smoothed state after this frame
    pub state: SmoothedPoseState,
    /// Monotonic rep count shown to the user
    pub displayed_rep: u32,
    /// Whether this frame was a fallback substitute rather than real analysis
    pub fallback: bool,
}
