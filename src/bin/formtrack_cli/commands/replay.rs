// ABOUTME: Replay command for formtrack-cli
// ABOUTME: Smooths a recorded stream offline and prints snapshots and the summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use chrono::Utc;
use formtrack::config::FormtrackConfig;
use formtrack::replay::{load_recording, replay, rescore_from_keypoints};
use formtrack_core::errors::AppResult;
use formtrack_core::models::ExerciseType;
use formtrack_intelligence::PoseSignalProcessor;
use std::path::Path;
use tracing::info;

use crate::helpers::output::{print_json, print_json_line};

/// Replay a recording and print the report
///
/// With `rescore`, frames that carry landmarks are re-analyzed before smoothing.
pub async fn run(
    config: &FormtrackConfig,
    input: &Path,
    exercise: ExerciseType,
    print_frames: bool,
    rescore: bool,
) -> AppResult<()> {
    let mut frames = load_recording(input).await?;
    if rescore {
        frames = rescore_from_keypoints(frames, exercise);
    }
    let processor = PoseSignalProcessor::new(config.smoothing.clone())?;
    let report = replay(
        &frames,
        exercise,
        processor,
        Utc::now(),
        config.session.min_frame_interval(),
    );

    if print_frames {
        for snapshot in &report.snapshots {
            print_json_line(snapshot)?;
        }
    }
    info!(
        frames = report.snapshots.len(),
        total_reps = report.summary.total_reps,
        "Replay complete"
    );
    print_json(&report.summary)
}
