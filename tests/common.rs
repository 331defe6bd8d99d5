// ABOUTME: Shared test utilities and analyzer doubles for integration tests
// ABOUTME: Provides quiet logging, scripted/failing/slow analyzers, and frame builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `formtrack`

use async_trait::async_trait;
use formtrack::analyzer::{Frame, PoseAnalyzer};
use formtrack::config::FormtrackConfig;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::{landmark, ExerciseType, PoseKeypoint, RawPoseResult, Stage};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Raw backend result without warnings
pub fn raw(score: f64, stage: Stage, confidence: f64, rep: u32) -> RawPoseResult {
    RawPoseResult::new(score, stage, confidence, rep, Vec::new())
}

/// Default configuration with a chosen frame rate
pub fn config_with_fps(max_frames_per_second: u32) -> FormtrackConfig {
    let mut config = FormtrackConfig::default();
    config.session.max_frames_per_second = max_frames_per_second;
    config
}

/// Full landmark set for an upright squatter with hips well above the knees
pub fn standing_landmarks() -> Vec<PoseKeypoint> {
    let mut points: Vec<PoseKeypoint> = landmark::NAMES
        .iter()
        .map(|name| PoseKeypoint {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            visibility: 0.9,
            name: (*name).to_owned(),
        })
        .collect();
    for (index, x, y) in [
        (landmark::LEFT_SHOULDER, 0.4, 0.25),
        (landmark::RIGHT_SHOULDER, 0.6, 0.25),
        (landmark::LEFT_HIP, 0.45, 0.5),
        (landmark::RIGHT_HIP, 0.55, 0.5),
        (landmark::LEFT_KNEE, 0.41, 0.65),
        (landmark::RIGHT_KNEE, 0.59, 0.65),
        (landmark::LEFT_ANKLE, 0.4, 0.85),
        (landmark::RIGHT_ANKLE, 0.6, 0.85),
    ] {
        points[index].x = x;
        points[index].y = y;
    }
    points
}

/// Same squatter at the bottom of a deep squat
pub fn deep_squat_landmarks() -> Vec<PoseKeypoint> {
    let mut points = standing_landmarks();
    points[landmark::LEFT_HIP].y = 0.7;
    points[landmark::RIGHT_HIP].y = 0.7;
    points[landmark::LEFT_KNEE].y = 0.64;
    points[landmark::RIGHT_KNEE].y = 0.64;
    points
}

/// Returns queued results in order, repeating the last one once drained
pub struct ScriptedAnalyzer {
    script: Mutex<VecDeque<RawPoseResult>>,
    last: Mutex<Option<RawPoseResult>>,
}

impl ScriptedAnalyzer {
    pub fn new(script: Vec<RawPoseResult>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PoseAnalyzer for ScriptedAnalyzer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn analyze(&self, _frame: &Frame, _exercise: ExerciseType) -> AppResult<RawPoseResult> {
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = next {
            *last = Some(next);
        }
        last.clone()
            .ok_or_else(|| AppError::external_service(self.name(), "empty script"))
    }
}

/// Fails every call
pub struct FailingAnalyzer;

#[async_trait]
impl PoseAnalyzer for FailingAnalyzer {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn analyze(&self, _frame: &Frame, _exercise: ExerciseType) -> AppResult<RawPoseResult> {
        Err(AppError::external_service(self.name(), "backend returned 503"))
    }
}

/// Answers only after `delay`
pub struct SlowAnalyzer {
    pub delay: Duration,
}

#[async_trait]
impl PoseAnalyzer for SlowAnalyzer {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn analyze(&self, _frame: &Frame, _exercise: ExerciseType) -> AppResult<RawPoseResult> {
        tokio::time::sleep(self.delay).await;
        Ok(raw(90.0, Stage::Up, 0.95, 1))
    }
}

/// Stalls for `delay` on its first call only, then answers immediately
pub struct StallingAnalyzer {
    delay: Duration,
    calls: AtomicUsize,
}

impl StallingAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PoseAnalyzer for StallingAnalyzer {
    fn name(&self) -> &'static str {
        "stalling"
    }

    async fn analyze(&self, _frame: &Frame, _exercise: ExerciseType) -> AppResult<RawPoseResult> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(self.delay).await;
        }
        Ok(raw(85.0, Stage::Rest, 0.9, 0))
    }
}
