// ABOUTME: Main library entry point for the Formtrack exercise tracking engine
// ABOUTME: Wires configuration, logging, pose analyzers, and tracking sessions together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![deny(unsafe_code)]

//! # Formtrack
//!
//! Real-time pose smoothing for camera-based exercise tracking. A pose
//! estimator classifies every frame independently; Formtrack turns that noisy
//! stream into a stable form score, a stage that only moves along the
//! repetition cycle, a rep count that never goes backwards, and an
//! end-of-session summary.
//!
//! ## Architecture
//!
//! - **analyzer**: the `PoseAnalyzer` seam to the pose backend, a landmark
//!   analyzer for on-device detection, and a deterministic synthetic analyzer
//! - **session**: per-session controller, frame rate limiter, actor task, and
//!   the registry of active sessions
//! - **config**: environment-driven configuration
//! - **logging**: tracing subscriber setup
//!
//! The algorithms themselves live in `formtrack-intelligence`; shared types
//! live in `formtrack-core`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formtrack::analyzer::{Frame, SyntheticAnalyzer};
//! use formtrack::config::FormtrackConfig;
//! use formtrack::session::SessionRegistry;
//! use formtrack_core::models::ExerciseType;
//!
//! # async fn example() -> formtrack_core::errors::AppResult<()> {
//! let config = FormtrackConfig::default();
//! let registry = SessionRegistry::new(Arc::new(SyntheticAnalyzer::new(7)), config)?;
//! let handle = registry.start(ExerciseType::Squat);
//! handle.submit_frame(Frame::empty()).await?;
//! let summary = registry.finish(handle.id()).await?;
//! println!("{} reps, grade {}", summary.total_reps, summary.performance_grade);
//! # Ok(())
//! # }
//! ```

/// Pose analyzer abstraction and implementations
pub mod analyzer;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Offline replay of recorded analyzer output
pub mod replay;

/// Tracking sessions, rate limiting, and the session actor
pub mod session;

pub use formtrack_core::errors;
pub use formtrack_core::models;
