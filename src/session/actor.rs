// ABOUTME: Session actor task owning a tracking session behind a bounded frame channel
// ABOUTME: Bounds analyzer calls with a timeout and publishes each snapshot on a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Session Actor
//!
//! Every session runs on its own tokio task. Frames arrive over a bounded
//! mpsc channel and are processed strictly in order, so the smoother always
//! sees the state produced by the frame before. Callers observe progress
//! through a watch channel carrying the latest [`FrameSnapshot`].
//!
//! An analyzer error or a call exceeding `analysis_timeout` never fails the
//! session: a fallback frame is recorded instead.

use super::rate_limiter::FrameRateLimiter;
use super::tracking::TrackingSession;
use crate::analyzer::{Frame, PoseAnalyzer};
use crate::config::SessionConfig;
use chrono::Utc;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::{ExerciseType, FrameSnapshot};
use formtrack_intelligence::{PoseSignalProcessor, SessionSummary};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{timeout, Instant};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

enum SessionCommand {
    Analyze {
        frame: Frame,
        submitted_at: Instant,
    },
    Finish(oneshot::Sender<SessionSummary>),
}

/// Cloneable handle to a running session task
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Uuid,
    exercise: ExerciseType,
    commands: mpsc::Sender<SessionCommand>,
    latest: watch::Receiver<Option<FrameSnapshot>>,
}

impl SessionHandle {
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

    /// Queue a frame for analysis
    ///
    /// Waits while the frame queue is full. Frames submitted faster than the
    /// configured rate are accepted here and dropped by the session task;
    /// spacing is measured between submissions, so a slow analysis does not
    /// cause the frames queued behind it to be dropped.
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the session has already finished.
    pub async fn submit_frame(&self, frame: Frame) -> AppResult<()> {
        let submitted_at = Instant::now();
        self.commands
            .send(SessionCommand::Analyze {
                frame,
                submitted_at,
            })
            .await
            .map_err(|_| self.closed())
    }

    /// Latest snapshot, `None` until the first frame is processed
    #[must_use]
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest.borrow().clone()
    }

    /// Receiver notified after every processed frame
    ///
    /// The channel holds only the newest snapshot. A receiver that falls
    /// behind sees the latest frame and skips the ones in between; use
    /// `FrameSnapshot::index` to detect gaps.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<FrameSnapshot>> {
        self.latest.clone()
    }

    /// Stop the session after queued frames are processed and return its summary
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the session has already finished.
    pub async fn finish(&self) -> AppResult<SessionSummary> {
        let (reply, summary) = oneshot::channel();
        self.commands
            .send(SessionCommand::Finish(reply))
            .await
            .map_err(|_| self.closed())?;
        summary.await.map_err(|_| self.closed())
    }

    fn closed(&self) -> AppError {
        AppError::unavailable(format!("Session {} has finished", self.id)).with_session_id(self.id)
    }
}

/// Spawn a session task on the current tokio runtime
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
#[must_use]
pub fn spawn_session(
    analyzer: Arc<dyn PoseAnalyzer>,
    exercise: ExerciseType,
    processor: PoseSignalProcessor,
    config: &SessionConfig,
) -> SessionHandle {
    let session = TrackingSession::new(exercise, processor);
    let id = session.id();
    let (commands, inbox) = mpsc::channel(config.frame_queue_capacity.max(1));
    let (publisher, latest) = watch::channel(None);

    let worker = SessionWorker {
        session,
        analyzer,
        limiter: FrameRateLimiter::new(config.max_frames_per_second),
        analysis_timeout: config.analysis_timeout,
        publisher,
    };
    let span = info_span!("session", session_id = %id, exercise = %exercise);
    tokio::spawn(worker.run(inbox).instrument(span));

    SessionHandle {
        id,
        exercise,
        commands,
        latest,
    }
}

struct SessionWorker {
    session: TrackingSession,
    analyzer: Arc<dyn PoseAnalyzer>,
    limiter: FrameRateLimiter,
    analysis_timeout: Duration,
    publisher: watch::Sender<Option<FrameSnapshot>>,
}

impl SessionWorker {
    async fn run(mut self, mut inbox: mpsc::Receiver<SessionCommand>) {
        info!(analyzer = self.analyzer.name(), "Session started");

        while let Some(command) = inbox.recv().await {
            match command {
                SessionCommand::Analyze {
                    frame,
                    submitted_at,
                } => self.process(&frame, submitted_at).await,
                SessionCommand::Finish(reply) => {
                    let summary = self.session.finish(Utc::now());
                    info!(
                        frames = summary.frames_analyzed,
                        fallback_frames = summary.fallback_frames,
                        dropped_frames = self.limiter.dropped(),
                        rep_regressions = self.session.rep_regressions(),
                        total_reps = summary.total_reps,
                        grade = %summary.performance_grade,
                        "Session finished"
                    );
                    if reply.send(summary).is_err() {
                        debug!("Finish requester went away before the summary was ready");
                    }
                    return;
                }
            }
        }

        debug!("All session handles dropped; stopping without summary");
    }

    async fn process(&mut self, frame: &Frame, submitted_at: Instant) {
        if !self.limiter.try_acquire(submitted_at) {
            debug!(
                dropped = self.limiter.dropped(),
                "Dropping frame above rate limit"
            );
            return;
        }

        let exercise = self.session.exercise();
        let snapshot = match timeout(
            self.analysis_timeout,
            self.analyzer.analyze(frame, exercise),
        )
        .await
        {
            Ok(Ok(raw)) => self.session.ingest(&raw),
            Ok(Err(error)) => {
                warn!(analyzer = self.analyzer.name(), error = %error, "Pose analysis failed");
                self.session.ingest_fallback(&error.message)
            }
            Err(_) => {
                let error = AppError::timeout(
                    self.analyzer.name(),
                    self.analysis_timeout.as_millis() as u64,
                );
                warn!(error = %error, "Pose analysis timed out");
                self.session.ingest_fallback(&error.message)
            }
        };

        debug!(
            frame_index = snapshot.index,
            form_score = snapshot.state.form_score,
            stage = %snapshot.state.stage,
            displayed_rep = snapshot.displayed_rep,
            fallback = snapshot.fallback,
            "Frame processed"
        );
        self.publisher.send_replace(Some(snapshot));
    }
}
