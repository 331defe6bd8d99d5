// ABOUTME: Tracking session layer turning analyzer output into smoothed, monotonic session state
// ABOUTME: Hosts the session controller, rep counter, frame rate limiter, actor task, and registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Sessions
//!
//! - [`TrackingSession`] owns the previous smoothed state, the rep counter,
//!   and the per-frame history of one workout.
//! - [`spawn_session`] runs a session on its own tokio task, fed through a
//!   bounded channel and bounded by the analysis timeout.
//! - [`SessionRegistry`] tracks every running session by id.

/// Session actor task and its handle
pub mod actor;
/// Frame admission rate limiting
pub mod rate_limiter;
/// Concurrent registry of active sessions
pub mod registry;
/// Monotonic rep counting
pub mod reps;
/// Single-session controller
pub mod tracking;

pub use actor::{spawn_session, SessionHandle};
pub use rate_limiter::FrameRateLimiter;
pub use registry::SessionRegistry;
pub use reps::RepCounter;
pub use tracking::TrackingSession;
