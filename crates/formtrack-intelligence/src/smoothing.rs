// ABOUTME: Temporal smoothing of noisy per-frame pose results into a stable exercise state
// ABOUTME: Rate-limits form score changes, filters stages through the transition table, gates warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Pose Signal Smoothing
//!
//! The pose backend classifies every frame independently, so its scores jump
//! around and its stage labels flicker. `PoseSignalProcessor` turns that
//! stream into something a user can watch:
//!
//! 1. The first frame seeds the state as-is (clamped into range).
//! 2. A frame is *stable* when its score is within the stability window of the
//!    previous smoothed score and its stage equals the previous stage. Stable
//!    frames increment a saturating counter; anything else resets it.
//! 3. Updates are *allowed* after enough stable frames or on a very
//!    confident frame. Otherwise they are damped.
//! 4. The score moves toward the raw score by at most the stable or damped
//!    step limit.
//! 5. The stage only changes on an allowed, confident frame, and only to a
//!    listed successor of the current stage.
//! 6. Confidence is clamped to the display band.
//! 7. Warnings are replaced only once the stream has been stable for a while.
//!
//! The processor holds no per-session state. Callers keep the previous
//! `SmoothedPoseState` and serialize calls per session; separate sessions can
//! be smoothed concurrently.

use formtrack_core::constants::{fallback, form_score};
use formtrack_core::models::{RawPoseResult, SmoothedPoseState, Stage};
use rayon::prelude::*;
use tracing::debug;

use crate::config::{ConfigError, SmoothingConfig};

/// Stateless smoother for raw pose frames
#[derive(Debug, Clone, Default)]
pub struct PoseSignalProcessor {
    config: SmoothingConfig,
}

impl PoseSignalProcessor {
    /// Create a processor with validated thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the thresholds are out of range or inconsistent.
    pub fn new(config: SmoothingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Produce the next smoothed state from a raw frame and the previous state
    ///
    /// Never fails: out-of-range numbers are clamped, non-finite scores are
    /// treated as "no change", non-finite confidences as zero, and unknown
    /// stage labels never win a transition.
    #[must_use]
    pub fn smooth(
        &self,
        raw: &RawPoseResult,
        previous: Option<&SmoothedPoseState>,
    ) -> SmoothedPoseState {
        let Some(previous) = previous else {
            return self.seed(raw);
        };

        let cfg = &self.config;
        let previous_score = f64::from(previous.form_score);
        let raw_score = sanitize_score(raw.form_score, previous_score);
        let raw_confidence = sanitize_confidence(raw.confidence);

        let stable = (raw_score - previous_score).abs() < cfg.stability_score_window
            && raw.stage.is(previous.stage);
        let stable_frame_count = if stable {
            previous
                .stable_frame_count
                .saturating_add(1)
                .min(cfg.max_stable_frames)
        } else {
            0
        };

        let should_update = stable_frame_count >= cfg.min_stable_frames_for_update
            || raw_confidence > cfg.high_confidence_threshold;

        let step_limit = if should_update {
            cfg.stable_step_limit
        } else {
            cfg.damped_step_limit
        };
        let delta = (raw_score - previous_score).clamp(-step_limit, step_limit);
        let form_score = to_display_score(previous_score + delta);

        let stage = self.next_stage(raw, previous.stage, raw_confidence, should_update);

        let warnings = if stable_frame_count >= cfg.warning_stable_frames {
            raw.warnings.clone()
        } else {
            previous.warnings.clone()
        };

        SmoothedPoseState {
            form_score,
            stage,
            confidence: self.display_confidence(raw_confidence),
            warnings,
            stable_frame_count,
        }
    }

    /// Smooth a whole recorded stream, seeding from its first frame
    #[must_use]
    pub fn smooth_stream(&self, frames: &[RawPoseResult]) -> Vec<SmoothedPoseState> {
        let mut states: Vec<SmoothedPoseState> = Vec::with_capacity(frames.len());
        for raw in frames {
            let next = self.smooth(raw, states.last());
            states.push(next);
        }
        states
    }

    /// Smooth several independent streams in parallel
    ///
    /// Each stream is one session; output order matches input order.
    #[must_use]
    pub fn smooth_streams(&self, streams: &[Vec<RawPoseResult>]) -> Vec<Vec<SmoothedPoseState>> {
        streams
            .par_iter()
            .map(|frames| self.smooth_stream(frames))
            .collect()
    }

    fn seed(&self, raw: &RawPoseResult) -> SmoothedPoseState {
        SmoothedPoseState {
            form_score: to_display_score(sanitize_score(raw.form_score, fallback::FORM_SCORE)),
            stage: raw.stage.stage().unwrap_or_default(),
            confidence: self.display_confidence(sanitize_confidence(raw.confidence)),
            warnings: raw.warnings.clone(),
            stable_frame_count: 1,
        }
    }

    fn next_stage(
        &self,
        raw: &RawPoseResult,
        current: Stage,
        raw_confidence: f64,
        should_update: bool,
    ) -> Stage {
        if raw_confidence < self.config.stage_confidence_threshold || !should_update {
            return current;
        }

        match raw.stage.stage() {
            Some(proposed) if current.can_transition_to(proposed) => {
                debug!(from = %current, to = %proposed, "Stage transition accepted");
                proposed
            }
            Some(proposed) if proposed == current => current,
            _ => {
                debug!(
                    current = %current,
                    proposed = %raw.stage,
                    "Rejected invalid stage transition"
                );
                current
            }
        }
    }

    fn display_confidence(&self, confidence: f64) -> f64 {
        confidence.clamp(self.config.confidence_floor, self.config.confidence_ceiling)
    }
}

/// Clamp a raw score into range; non-finite values fall back to `fallback_score`
fn sanitize_score(score: f64, fallback_score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(form_score::MIN, form_score::MAX)
    } else {
        fallback_score
    }
}

/// Clamp a raw confidence into `[0, 1]`; non-finite values count as zero
fn sanitize_confidence(confidence: f64) -> f64 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Round and clamp a score to the integer display range
fn to_display_score(score: f64) -> u8 {
    // Clamped to 0-100 first, so the cast cannot truncate
    score.round().clamp(form_score::MIN, form_score::MAX) as u8
}
