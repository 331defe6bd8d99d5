// ABOUTME: End-of-session summary built from the per-frame snapshots of a tracking session
// ABOUTME: Computes accuracy, grade, calories, stage distribution, and next-session suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use chrono::{DateTime, Utc};
use formtrack_core::constants::summary;
use formtrack_core::models::{ExerciseType, FrameSnapshot, Stage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Letter grade for average form accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceGrade {
    /// Average accuracy of 90 or more
    A,
    /// Average accuracy of 80 or more
    B,
    /// Average accuracy of 70 or more
    C,
    /// Anything lower
    D,
}

impl PerformanceGrade {
    /// Grade an average form accuracy (0-100)
    #[must_use]
    pub fn from_accuracy(average_accuracy: f64) -> Self {
        if average_accuracy >= summary::GRADE_A_THRESHOLD {
            Self::A
        } else if average_accuracy >= summary::GRADE_B_THRESHOLD {
            Self::B
        } else if average_accuracy >= summary::GRADE_C_THRESHOLD {
            Self::C
        } else {
            Self::D
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

/// Workout session summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise performed
    pub exercise_type: ExerciseType,
    /// When tracking started
    pub started_at: DateTime<Utc>,
    /// When tracking ended
    pub ended_at: DateTime<Utc>,
    /// Tracked duration in seconds
    pub duration_seconds: f64,
    /// Final displayed rep count
    pub total_reps: u32,
    /// Frames that went through the smoother
    pub frames_analyzed: u64,
    /// Frames substituted because analysis failed
    pub fallback_frames: u64,
    /// Mean smoothed form score, two decimals
    pub average_accuracy: f64,
    /// Best smoothed form score
    pub peak_form_score: u8,
    /// Worst smoothed form score
    pub lowest_form_score: u8,
    /// Estimated calories, one decimal
    pub calories_burned: f64,
    /// Letter grade for the average accuracy
    pub performance_grade: PerformanceGrade,
    /// Areas to work on
    pub improvement_areas: Vec<String>,
    /// Suggestions for the next session
    pub next_session_recommendations: Vec<String>,
    /// Number of frames spent in each stage
    pub stage_distribution: BTreeMap<Stage, u64>,
}

impl SessionSummary {
    /// Build a summary from a session's snapshots
    ///
    /// An empty session yields zero accuracy, grade D, and zero form score bounds.
    #[must_use]
    pub fn from_snapshots(
        session_id: Uuid,
        exercise_type: ExerciseType,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        snapshots: &[FrameSnapshot],
    ) -> Self {
        let duration_seconds = (ended_at - started_at).num_milliseconds().max(0) as f64 / 1000.0;
        let total_reps = snapshots
            .iter()
            .map(|snapshot| snapshot.displayed_rep)
            .max()
            .unwrap_or(0);
        let fallback_frames = snapshots.iter().filter(|snapshot| snapshot.fallback).count() as u64;

        let average_accuracy = average_form_score(snapshots);
        let peak_form_score = snapshots
            .iter()
            .map(|snapshot| snapshot.state.form_score)
            .max()
            .unwrap_or(0);
        let lowest_form_score = snapshots
            .iter()
            .map(|snapshot| snapshot.state.form_score)
            .min()
            .unwrap_or(0);

        let mut stage_distribution = BTreeMap::new();
        for snapshot in snapshots {
            *stage_distribution.entry(snapshot.state.stage).or_insert(0) += 1;
        }

        Self {
            session_id,
            exercise_type,
            started_at,
            ended_at,
            duration_seconds,
            total_reps,
            frames_analyzed: snapshots.len() as u64,
            fallback_frames,
            average_accuracy,
            peak_form_score,
            lowest_form_score,
            calories_burned: round_to(duration_seconds * summary::CALORIES_PER_SECOND, 1),
            performance_grade: PerformanceGrade::from_accuracy(average_accuracy),
            improvement_areas: improvement_areas(average_accuracy),
            next_session_recommendations: next_session_recommendations(total_reps),
            stage_distribution,
        }
    }
}

fn average_form_score(snapshots: &[FrameSnapshot]) -> f64 {
    if snapshots.is_empty() {
        return 0.0;
    }
    let total: f64 = snapshots
        .iter()
        .map(|snapshot| f64::from(snapshot.state.form_score))
        .sum();
    round_to(total / snapshots.len() as f64, 2)
}

fn improvement_areas(average_accuracy: f64) -> Vec<String> {
    if average_accuracy < summary::IMPROVEMENT_THRESHOLD {
        vec![
            "Focus on form consistency".to_owned(),
            "Maintain steady pace".to_owned(),
        ]
    } else {
        vec!["Great form! Keep it up!".to_owned()]
    }
}

fn next_session_recommendations(total_reps: u32) -> Vec<String> {
    let target = total_reps.saturating_add(summary::NEXT_SESSION_REP_INCREMENT);
    vec![
        format!("Try increasing reps to {target}"),
        "Focus on controlled movements".to_owned(),
    ]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
