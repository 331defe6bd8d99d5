// ABOUTME: Core types and constants for the Formtrack exercise tracking engine
// ABOUTME: Foundation crate with error handling, pose models, stages, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

#![deny(unsafe_code)]

//! # Formtrack Core
//!
//! Foundation crate providing shared types and constants for pose-based
//! exercise tracking. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default smoothing thresholds, fallback values, grade boundaries
//! - **models**: Raw and smoothed pose data, exercise stages, exercise catalog

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`RawPoseResult`, `SmoothedPoseState`, `Stage`, `ExerciseType`)
pub mod models;
