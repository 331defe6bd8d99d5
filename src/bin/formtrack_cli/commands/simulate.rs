// ABOUTME: Simulate command for formtrack-cli
// ABOUTME: Drives a live session actor with the synthetic analyzer at the configured frame rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use formtrack::analyzer::{Frame, SyntheticAnalyzer};
use formtrack::config::FormtrackConfig;
use formtrack::session::SessionRegistry;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::ExerciseType;
use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::helpers::output::{print_json, print_json_line};

/// Submit `frames` synthetic frames, then print the summary
///
/// While the session runs, the latest snapshot is printed each time it
/// changes. Snapshots superseded before the printer wakes are not printed;
/// their count is logged instead and every frame still counts in the summary.
pub async fn run(
    config: FormtrackConfig,
    exercise: ExerciseType,
    frames: u32,
    seed: u64,
    failure_rate: f64,
) -> AppResult<()> {
    let mut ticker = interval(config.session.min_frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let analyzer = Arc::new(SyntheticAnalyzer::new(seed).with_failure_rate(failure_rate));
    let registry = SessionRegistry::new(analyzer, config)?;
    let handle = registry.start(exercise);

    // Ends when the session task drops its publisher
    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        let mut next_index = 0;
        while updates.changed().await.is_ok() {
            let latest = updates.borrow_and_update().clone();
            if let Some(snapshot) = latest {
                if snapshot.index > next_index {
                    debug!(
                        skipped = snapshot.index - next_index,
                        "Snapshots superseded before printing"
                    );
                }
                next_index = snapshot.index + 1;
                if let Err(error) = print_json_line(&snapshot) {
                    warn!(error = %error, "Failed to print snapshot");
                }
            }
        }
    });

    info!(session_id = %handle.id(), frames, seed, "Simulating session");
    for _ in 0..frames {
        ticker.tick().await;
        handle.submit_frame(Frame::empty()).await?;
    }

    let summary = registry.finish(handle.id()).await?;
    drop(handle);
    printer
        .await
        .map_err(|error| AppError::internal(format!("Snapshot printer failed: {error}")))?;
    print_json(&summary)
}
