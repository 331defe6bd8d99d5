// ABOUTME: Offline replay of recorded pose-analysis streams through a tracking session
// ABOUTME: Parses JSON Lines recordings of raw backend results and produces snapshots and a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Recording Replay
//!
//! A recording is a JSON Lines file with one raw backend result per line, in
//! the backend's camelCase wire format:
//!
//! ```text
//! {"formScore": 82.5, "stage": "up", "confidence": 0.91, "currentRep": 3, "warnings": []}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Lines may carry a
//! `keypoints` array; [`rescore_from_keypoints`] re-derives those frames with
//! the current keypoint form analysis.

use crate::session::TrackingSession;
use chrono::{DateTime, Utc};
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::{ExerciseType, FrameSnapshot, RawPoseResult};
use formtrack_intelligence::{analyze_form, PoseSignalProcessor, SessionSummary};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Outcome of replaying a recording
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Smoothed snapshot per recorded frame
    pub snapshots: Vec<FrameSnapshot>,
    /// Summary over the whole recording
    pub summary: SessionSummary,
}

/// Parse a JSON Lines recording
///
/// # Errors
///
/// Returns `InvalidFormat` naming the first line that is not a valid raw result.
pub fn parse_recording(contents: &str) -> AppResult<Vec<RawPoseResult>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|error| {
                AppError::invalid_format(format!("Line {}: {error}", index + 1)).with_source(error)
            })
        })
        .collect()
}

/// Read and parse a recording from disk
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file cannot be read and `InvalidFormat`
/// for malformed lines.
pub async fn load_recording(path: &Path) -> AppResult<Vec<RawPoseResult>> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::not_found(format!("Recording {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(error)
    })?;
    let frames = parse_recording(&contents)?;
    info!(path = %path.display(), frames = frames.len(), "Loaded recording");
    Ok(frames)
}

/// Replace every frame that carries landmarks with a fresh form analysis
///
/// Frames without landmarks are kept as recorded.
#[must_use]
pub fn rescore_from_keypoints(
    frames: Vec<RawPoseResult>,
    exercise: ExerciseType,
) -> Vec<RawPoseResult> {
    let mut rescored = 0_usize;
    let frames: Vec<RawPoseResult> = frames
        .into_iter()
        .map(|frame| {
            if frame.keypoints.is_empty() {
                frame
            } else {
                rescored += 1;
                analyze_form(exercise, &frame.keypoints)
            }
        })
        .collect();
    debug!(rescored, total = frames.len(), "Rescored recorded frames from landmarks");
    frames
}

/// Run recorded frames through a fresh session
///
/// Frames are assumed to be `frame_interval` apart, which sets the summary's
/// duration and calorie estimate.
#[must_use]
pub fn replay(
    frames: &[RawPoseResult],
    exercise: ExerciseType,
    processor: PoseSignalProcessor,
    started_at: DateTime<Utc>,
    frame_interval: Duration,
) -> ReplayReport {
    let mut session = TrackingSession::with_id(Uuid::new_v4(), exercise, processor, started_at);
    for raw in frames {
        session.ingest(raw);
    }

    let elapsed = frame_interval.saturating_mul(u32::try_from(frames.len()).unwrap_or(u32::MAX));
    let ended_at = chrono::Duration::from_std(elapsed)
        .ok()
        .and_then(|elapsed| started_at.checked_add_signed(elapsed))
        .unwrap_or(started_at);

    ReplayReport {
        summary: session.finish(ended_at),
        snapshots: session.snapshots().to_vec(),
    }
}
