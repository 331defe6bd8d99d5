// ABOUTME: Core data models for pose-based exercise tracking
// ABOUTME: Re-exports pose results, smoothed state, stages, and the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! # Data Models
//!
//! - `RawPoseResult`: one frame as returned by the pose backend
//! - `SmoothedPoseState`: filtered state shown to the user
//! - `Stage` / `StageLabel`: repetition phases and the transition table
//! - `ExerciseType`: supported exercises with catalog entries
//! - `landmark`: index layout of the body landmark model

mod exercise;
pub mod landmark;
mod pose;
mod stage;

pub use exercise::{Difficulty, ExerciseProfile, ExerciseType};
pub use pose::{FrameSnapshot, PoseKeypoint, RawPoseResult, SmoothedPoseState};
pub use stage::{Stage, StageLabel};
