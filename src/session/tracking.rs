// ABOUTME: Single-session controller feeding raw analyzer output through the smoother
// ABOUTME: Keeps the previous smoothed state, monotonic rep count, and per-frame history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use super::reps::RepCounter;
use chrono::{DateTime, Utc};
use formtrack_core::models::{ExerciseType, FrameSnapshot, RawPoseResult, SmoothedPoseState};
use formtrack_intelligence::{PoseSignalProcessor, SessionSummary};
use uuid::Uuid;

/// Controller for one workout session
///
/// Not thread safe on its own; the session actor gives it a single owner.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    id: Uuid,
    exercise: ExerciseType,
    started_at: DateTime<Utc>,
    processor: PoseSignalProcessor,
    current: Option<SmoothedPoseState>,
    reps: RepCounter,
    snapshots: Vec<FrameSnapshot>,
}

impl TrackingSession {
    /// Start a session now with a fresh id
    #[must_use]
    pub fn new(exercise: ExerciseType, processor: PoseSignalProcessor) -> Self {
        Self::with_id(Uuid::new_v4(), exercise, processor, Utc::now())
    }

    /// Start a session with a caller-chosen id and start time
    #[must_use]
    pub fn with_id(
        id: Uuid,
        exercise: ExerciseType,
        processor: PoseSignalProcessor,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            exercise,
            started_at,
            processor,
            current: None,
            reps: RepCounter::new(),
            snapshots: Vec::new(),
        }
    }

    /// Smooth one analyzed frame and record it
    pub fn ingest(&mut self, raw: &RawPoseResult) -> FrameSnapshot {
        let displayed_rep = self.reps.observe(raw.current_rep);
        self.record(raw, displayed_rep, false)
    }

    /// Record a substitute frame for a failed or late analysis
    ///
    /// The fallback's rep count is not observed, so the displayed count holds.
    pub fn ingest_fallback(&mut self, reason: &str) -> FrameSnapshot {
        let raw = RawPoseResult::fallback(reason);
        let displayed_rep = self.reps.displayed();
        self.record(&raw, displayed_rep, true)
    }

    fn record(&mut self, raw: &RawPoseResult, displayed_rep: u32, fallback: bool) -> FrameSnapshot {
        let state = self.processor.smooth(raw, self.current.as_ref());
        let snapshot = FrameSnapshot {
            index: self.snapshots.len() as u64,
            timestamp: Utc::now(),
            state: state.clone(),
            displayed_rep,
            fallback,
        };
        self.current = Some(state);
        self.snapshots.push(snapshot.clone());
        snapshot
    }

    /// Session id
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Exercise being tracked
    #[must_use]
    pub const fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// When the session started
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Latest smoothed state, `None` before the first frame
    #[must_use]
    pub const fn current(&self) -> Option<&SmoothedPoseState> {
        self.current.as_ref()
    }

    /// Rep count shown to the user
    #[must_use]
    pub const fn displayed_rep(&self) -> u32 {
        self.reps.displayed()
    }

    /// Rep reports rejected for moving backwards
    #[must_use]
    pub const fn rep_regressions(&self) -> u64 {
        self.reps.regressions()
    }

    /// Every recorded frame, oldest first
    #[must_use]
    pub fn snapshots(&self) -> &[FrameSnapshot] {
        &self.snapshots
    }

    /// Summarize the session as ending at `ended_at`
    #[must_use]
    pub fn finish(&self, ended_at: DateTime<Utc>) -> SessionSummary {
        SessionSummary::from_snapshots(
            self.id,
            self.exercise,
            self.started_at,
            ended_at,
            &self.snapshots,
        )
    }
}
