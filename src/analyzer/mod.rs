// ABOUTME: Pose analyzer abstraction between tracking sessions and the pose-estimation backend
// ABOUTME: Defines camera frames and the async trait every analyzer implementation satisfies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Pose Analyzers
//!
//! A [`PoseAnalyzer`] turns one camera [`Frame`] into a [`RawPoseResult`].
//! Results are untrusted: sessions clamp and smooth everything an analyzer
//! returns, and substitute a fallback frame when the call fails or misses its
//! deadline.
//!
//! - [`KeypointAnalyzer`] scores landmarks detected on the client
//! - [`SyntheticAnalyzer`] generates seeded noisy cycles for demos and tests
//!
//! ## Implementing an analyzer
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use formtrack::analyzer::{Frame, PoseAnalyzer};
//! use formtrack_core::errors::AppResult;
//! use formtrack_core::models::{ExerciseType, RawPoseResult, Stage};
//!
//! struct AlwaysResting;
//!
//! #[async_trait]
//! impl PoseAnalyzer for AlwaysResting {
//!     fn name(&self) -> &'static str {
//!         "always_resting"
//!     }
//!
//!     async fn analyze(&self, _frame: &Frame, _exercise: ExerciseType) -> AppResult<RawPoseResult> {
//!         Ok(RawPoseResult::new(80.0, Stage::Rest, 0.9, 0, Vec::new()))
//!     }
//! }
//! ```

/// Landmark payload analyzer backed by keypoint form analysis
pub mod keypoint;

/// Deterministic analyzer for demos and tests
pub mod synthetic;

pub use keypoint::KeypointAnalyzer;
pub use synthetic::SyntheticAnalyzer;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formtrack_core::errors::AppResult;
use formtrack_core::models::{ExerciseType, PoseKeypoint, RawPoseResult};

/// One encoded camera frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Encoded image bytes, passed through to the backend untouched
    pub payload: Vec<u8>,
    /// Capture time on the client
    pub captured_at: DateTime<Utc>,
}

impl Frame {
    /// Wrap an encoded image captured now
    #[must_use]
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            captured_at: Utc::now(),
        }
    }

    /// Frame without image data, for analyzers that ignore the payload
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Frame carrying already detected landmarks, for [`KeypointAnalyzer`]
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the landmarks cannot be encoded.
    pub fn from_keypoints(keypoints: &[PoseKeypoint]) -> AppResult<Self> {
        Ok(Self::new(serde_json::to_vec(keypoints)?))
    }
}

/// Pose-estimation backend seam
///
/// Implementations must be `Send + Sync`; one analyzer is shared by every
/// session in a registry.
#[async_trait]
pub trait PoseAnalyzer: Send + Sync {
    /// Analyzer name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Classify a single frame
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the backend cannot analyze the
    /// frame. Callers treat any error as a missing frame.
    async fn analyze(&self, frame: &Frame, exercise: ExerciseType) -> AppResult<RawPoseResult>;
}
