// ABOUTME: Configuration management module for tracking engine settings
// ABOUTME: Loads environment-driven smoothing thresholds and session limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! Configuration module for Formtrack
//!
//! Configuration is environment-only: every setting has a default and can be
//! overridden through a `FORMTRACK_*` variable. Smoothing thresholds are the
//! `formtrack-intelligence` `SmoothingConfig`; session limits live here.

/// Environment and session configuration
pub mod environment;

pub use environment::{Environment, FormtrackConfig, LogLevel, SessionConfig};
pub use formtrack_intelligence::config::{ConfigError, SmoothingConfig};
