// ABOUTME: Pose smoothing thresholds for stability detection, step limits, and gating
// ABOUTME: Defaults reproduce the empirically tuned client values; all are overridable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! Smoothing Configuration
//!
//! Thresholds used by `PoseSignalProcessor`. None of the defaults has a
//! documented derivation; they were tuned by hand against live camera
//! sessions at 1-5 frames per second.

use formtrack_core::constants::smoothing;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Pose smoothing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Score difference (exclusive) under which a frame counts as stable
    pub stability_score_window: f64,
    /// Largest per-frame score change while updates are allowed
    pub stable_step_limit: f64,
    /// Largest per-frame score change while updates are damped
    pub damped_step_limit: f64,
    /// Stable frames needed before updates are allowed
    pub min_stable_frames_for_update: u8,
    /// Raw confidence above which updates are allowed immediately
    pub high_confidence_threshold: f64,
    /// Raw confidence below which stage changes are ignored
    pub stage_confidence_threshold: f64,
    /// Stable frames needed before warnings are replaced
    pub warning_stable_frames: u8,
    /// Saturation point of the stable frame counter
    pub max_stable_frames: u8,
    /// Lowest displayed confidence
    pub confidence_floor: f64,
    /// Highest displayed confidence
    pub confidence_ceiling: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            stability_score_window: smoothing::STABILITY_SCORE_WINDOW,
            stable_step_limit: smoothing::STABLE_STEP_LIMIT,
            damped_step_limit: smoothing::DAMPED_STEP_LIMIT,
            min_stable_frames_for_update: smoothing::MIN_STABLE_FRAMES_FOR_UPDATE,
            high_confidence_threshold: smoothing::HIGH_CONFIDENCE_THRESHOLD,
            stage_confidence_threshold: smoothing::STAGE_CONFIDENCE_THRESHOLD,
            warning_stable_frames: smoothing::WARNING_STABLE_FRAMES,
            max_stable_frames: smoothing::MAX_STABLE_FRAMES,
            confidence_floor: smoothing::CONFIDENCE_FLOOR,
            confidence_ceiling: smoothing::CONFIDENCE_CEILING,
        }
    }
}

impl SmoothingConfig {
    /// Check that every threshold is in range and consistent with the others
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a value is outside its domain and
    /// `ConfigError::Inconsistent` if two thresholds contradict each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stability_score_window > 0.0 && self.stability_score_window <= 100.0) {
            return Err(ConfigError::InvalidRange(
                "stability_score_window must be in (0, 100]",
            ));
        }
        if !(self.damped_step_limit > 0.0 && self.damped_step_limit <= 100.0) {
            return Err(ConfigError::InvalidRange(
                "damped_step_limit must be in (0, 100]",
            ));
        }
        if !(self.stable_step_limit > 0.0 && self.stable_step_limit <= 100.0) {
            return Err(ConfigError::InvalidRange(
                "stable_step_limit must be in (0, 100]",
            ));
        }
        if self.damped_step_limit > self.stable_step_limit {
            return Err(ConfigError::Inconsistent(
                "damped_step_limit must not exceed stable_step_limit",
            ));
        }

        for (value, message) in [
            (
                self.high_confidence_threshold,
                "high_confidence_threshold must be in [0, 1]",
            ),
            (
                self.stage_confidence_threshold,
                "stage_confidence_threshold must be in [0, 1]",
            ),
            (self.confidence_floor, "confidence_floor must be in [0, 1]"),
            (self.confidence_ceiling, "confidence_ceiling must be in [0, 1]"),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRange(message));
            }
        }
        if self.confidence_floor > self.confidence_ceiling {
            return Err(ConfigError::Inconsistent(
                "confidence_floor must not exceed confidence_ceiling",
            ));
        }

        if self.max_stable_frames == 0 {
            return Err(ConfigError::InvalidRange(
                "max_stable_frames must be at least 1",
            ));
        }
        if self.min_stable_frames_for_update > self.max_stable_frames
            || self.warning_stable_frames > self.max_stable_frames
        {
            return Err(ConfigError::Inconsistent(
                "stable frame gates must not exceed max_stable_frames",
            ));
        }

        Ok(())
    }
}
