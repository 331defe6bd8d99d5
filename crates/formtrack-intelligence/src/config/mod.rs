// ABOUTME: Configuration module for formtrack-intelligence crate
// ABOUTME: Re-exports smoothing configuration and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

/// Configuration validation errors
pub mod error;

/// Pose smoothing thresholds
pub mod smoothing;

pub use error::ConfigError;
pub use smoothing::SmoothingConfig;
