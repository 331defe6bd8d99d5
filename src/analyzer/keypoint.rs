// ABOUTME: Pose analyzer that scores landmark frames detected on the client
// ABOUTME: Decodes a JSON landmark payload and runs deterministic keypoint form analysis on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Keypoint Analyzer
//!
//! For clients that run landmark detection on-device and send the landmarks
//! instead of an encoded image. The frame payload is a JSON array of
//! [`PoseKeypoint`] in estimator order; an empty payload means nobody was
//! detected.

use super::{Frame, PoseAnalyzer};
use async_trait::async_trait;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::{ExerciseType, PoseKeypoint, RawPoseResult};
use formtrack_intelligence::form::analyze_form;
use tracing::trace;

/// Scores landmark payloads with keypoint form analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypointAnalyzer;

impl KeypointAnalyzer {
    /// Decode the landmarks carried by `frame`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the payload is not a JSON landmark array.
    pub fn decode(frame: &Frame) -> AppResult<Vec<PoseKeypoint>> {
        if frame.payload.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&frame.payload).map_err(|error| {
            AppError::invalid_format(format!("Landmark payload is not valid JSON: {error}"))
                .with_source(error)
        })
    }
}

#[async_trait]
impl PoseAnalyzer for KeypointAnalyzer {
    fn name(&self) -> &'static str {
        "keypoint"
    }

    async fn analyze(&self, frame: &Frame, exercise: ExerciseType) -> AppResult<RawPoseResult> {
        let keypoints = Self::decode(frame)?;
        trace!(landmarks = keypoints.len(), %exercise, "Scoring landmark frame");
        Ok(analyze_form(exercise, &keypoints))
    }
}
