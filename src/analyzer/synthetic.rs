// ABOUTME: Deterministic synthetic pose analyzer producing noisy repetition cycles
// ABOUTME: Seeded ChaCha generator lets demos and tests replay the exact same frame stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Synthetic Pose Analyzer
//!
//! Emulates a per-frame pose classifier without a camera or model. Each call
//! advances a scripted `rest -> up -> down -> hold -> up -> ...` cycle and
//! layers on the kinds of noise a real estimator produces:
//!
//! - jittery form scores
//! - occasional mislabeled stages
//! - confidence dips
//! - rep counters that briefly step backwards
//!
//! Output depends only on the seed and the number of prior calls, so two
//! analyzers built with the same seed produce identical streams.

use super::{Frame, PoseAnalyzer};
use async_trait::async_trait;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::{ExerciseType, PoseKeypoint, RawPoseResult, Stage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Frames spent in each scripted stage
const FRAMES_PER_STAGE: u64 = 3;
/// Frames of rest before the first repetition
const WARMUP_FRAMES: u64 = 4;
/// Stages repeated after warmup; entering `Up` from `Hold` completes a rep
const CYCLE: [Stage; 3] = [Stage::Up, Stage::Down, Stage::Hold];

const MISLABEL_PROBABILITY: f64 = 0.08;
const CONFIDENCE_DIP_PROBABILITY: f64 = 0.05;
const REP_REGRESSION_PROBABILITY: f64 = 0.03;
const LOW_SCORE_WARNING_THRESHOLD: f64 = 75.0;

struct GeneratorState {
    rng: ChaCha8Rng,
    frame: u64,
}

/// Seeded analyzer emitting squat-like cycles with realistic noise
pub struct SyntheticAnalyzer {
    state: Mutex<GeneratorState>,
    failure_rate: f64,
}

impl SyntheticAnalyzer {
    /// Create an analyzer whose output is fully determined by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: Mutex::new(GeneratorState {
                rng: ChaCha8Rng::seed_from_u64(seed),
                frame: 0,
            }),
            failure_rate: 0.0,
        }
    }

    /// Fail this fraction of calls with an external-service error
    #[must_use]
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    /// Scripted stage and backend rep count for a frame index
    fn scripted(frame: u64) -> (Stage, u32) {
        if frame < WARMUP_FRAMES {
            return (Stage::Rest, 0);
        }
        let step = (frame - WARMUP_FRAMES) / FRAMES_PER_STAGE;
        let cycle_len = CYCLE.len() as u64;
        let stage = CYCLE[(step % cycle_len) as usize];
        (stage, (step / cycle_len) as u32)
    }

    /// Produce the next raw result, or `None` for a simulated backend failure
    fn generate(&self, exercise: ExerciseType) -> AppResult<Option<RawPoseResult>> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AppError::internal("Synthetic analyzer state lock poisoned"))?;
        let GeneratorState { rng, frame } = &mut *state;
        let index = *frame;
        *frame += 1;

        if self.failure_rate > 0.0 && rng.gen_bool(self.failure_rate) {
            return Ok(None);
        }

        let (scripted_stage, reps) = Self::scripted(index);
        let stage = if rng.gen_bool(MISLABEL_PROBABILITY) {
            Stage::ALL[rng.gen_range(0..Stage::ALL.len())]
        } else {
            scripted_stage
        };

        let base_score = if scripted_stage == Stage::Hold { 88.0 } else { 82.0 };
        let form_score = base_score + rng.gen_range(-9.0..9.0);

        let confidence = if rng.gen_bool(CONFIDENCE_DIP_PROBABILITY) {
            rng.gen_range(0.35..0.6)
        } else {
            rng.gen_range(0.78..0.99)
        };

        let current_rep = if reps > 0 && rng.gen_bool(REP_REGRESSION_PROBABILITY) {
            reps - 1
        } else {
            reps
        };

        let profile = exercise.profile();
        let warnings = if form_score < LOW_SCORE_WARNING_THRESHOLD {
            profile
                .form_checks
                .first()
                .map(|check| vec![(*check).to_owned()])
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let mut result = RawPoseResult::new(form_score, stage, confidence, current_rep, warnings);
        result.keypoints = profile
            .target_keypoints
            .iter()
            .map(|name| PoseKeypoint {
                x: rng.gen_range(0.2..0.8),
                y: rng.gen_range(0.1..0.9),
                z: rng.gen_range(-0.2..0.2),
                visibility: rng.gen_range(0.6..1.0),
                name: (*name).to_owned(),
            })
            .collect();
        drop(state);
        Ok(Some(result))
    }
}

#[async_trait]
impl PoseAnalyzer for SyntheticAnalyzer {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn analyze(&self, _frame: &Frame, exercise: ExerciseType) -> AppResult<RawPoseResult> {
        self.generate(exercise)?.ok_or_else(|| {
            AppError::external_service(self.name(), "Simulated pose backend failure")
        })
    }
}
