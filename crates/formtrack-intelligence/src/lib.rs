// ABOUTME: Pose smoothing and exercise session intelligence for Formtrack
// ABOUTME: Pure computation over pose frames: form analysis, smoothing, stage filtering, summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![deny(unsafe_code)]

//! # Formtrack Intelligence
//!
//! Algorithms that score body landmarks per frame, turn the noisy per-frame
//! output of a pose estimator into a stable, displayable exercise state, and
//! summarize finished sessions.
//! Nothing here performs I/O; the session layer in the main crate owns the
//! state and drives these functions once per frame.

/// Smoothing thresholds and their validation
pub mod config;

/// Per-frame form analysis from body landmarks
pub mod form;

/// Temporal smoothing and stage filtering of raw pose frames
pub mod smoothing;

/// End-of-session summaries
pub mod summary;

pub use config::{ConfigError, SmoothingConfig};
pub use form::analyze_form;
pub use smoothing::PoseSignalProcessor;
pub use summary::{PerformanceGrade, SessionSummary};
