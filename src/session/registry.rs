// ABOUTME: Concurrent registry of running tracking sessions keyed by session id
// ABOUTME: Starts session tasks with shared analyzer and thresholds, and finishes them by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use super::actor::{spawn_session, SessionHandle};
use crate::analyzer::PoseAnalyzer;
use crate::config::{FormtrackConfig, SessionConfig};
use dashmap::DashMap;
use formtrack_core::errors::{AppError, AppResult};
use formtrack_core::models::ExerciseType;
use formtrack_intelligence::{PoseSignalProcessor, SessionSummary};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Active sessions sharing one analyzer
///
/// `DashMap` shards the map so concurrent starts and lookups do not contend
/// on a single lock.
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionHandle>,
    analyzer: Arc<dyn PoseAnalyzer>,
    processor: PoseSignalProcessor,
    session_config: SessionConfig,
}

impl SessionRegistry {
    /// Create a registry, validating thresholds and limits once up front
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the smoothing thresholds or session limits
    /// are out of range.
    pub fn new(analyzer: Arc<dyn PoseAnalyzer>, config: FormtrackConfig) -> AppResult<Self> {
        config.session.validate()?;
        let processor = PoseSignalProcessor::new(config.smoothing)?;
        Ok(Self {
            sessions: DashMap::new(),
            analyzer,
            processor,
            session_config: config.session,
        })
    }

    /// Start a session task and register it
    ///
    /// Must be called within a tokio runtime.
    pub fn start(&self, exercise: ExerciseType) -> SessionHandle {
        let handle = spawn_session(
            Arc::clone(&self.analyzer),
            exercise,
            self.processor.clone(),
            &self.session_config,
        );
        self.sessions.insert(handle.id(), handle.clone());
        info!(
            session_id = %handle.id(),
            exercise = %exercise,
            active_sessions = self.sessions.len(),
            "Registered session"
        );
        handle
    }

    /// Handle for a running session
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown or finished sessions.
    pub fn get(&self, id: Uuid) -> AppResult<SessionHandle> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| session_not_found(id))
    }

    /// Number of running sessions
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Finish a session, remove it, and return its summary
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown or already finished sessions.
    pub async fn finish(&self, id: Uuid) -> AppResult<SessionSummary> {
        let (_, handle) = self
            .sessions
            .remove(&id)
            .ok_or_else(|| session_not_found(id))?;
        handle.finish().await
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Session {id}"))
        .with_session_id(id)
        .with_resource_id(id.to_string())
}
