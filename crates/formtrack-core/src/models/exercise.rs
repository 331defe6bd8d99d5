// ABOUTME: Supported exercise types and their catalog entries
// ABOUTME: Each entry carries display text, difficulty, default volume, and tracked keypoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Exercises the pose backend knows how to analyze
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Bodyweight squat
    #[default]
    Squat,
    /// Push-up
    PushUp,
    /// Dumbbell hammer curl
    HammerCurl,
    /// Seated chair yoga
    ChairYoga,
    /// Guided breathing
    BreathingExercise,
}

/// Exercise difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for everyone
    Beginner,
    /// Requires some training background
    Intermediate,
    /// Requires strength and control
    Advanced,
}

/// Catalog entry describing an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseProfile {
    /// Exercise identifier
    pub exercise_type: ExerciseType,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Suggested reps per set
    pub default_reps: u32,
    /// Suggested number of sets
    pub default_sets: u32,
    /// Landmarks the analyzer relies on
    pub target_keypoints: &'static [&'static str],
    /// Step-by-step instructions
    pub instructions: &'static [&'static str],
    /// Form cues checked during analysis
    pub form_checks: &'static [&'static str],
}

const LOWER_BODY: &[&str] = &[
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
];

const UPPER_BODY: &[&str] = &[
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
];

const SQUAT: ExerciseProfile = ExerciseProfile {
    exercise_type: ExerciseType::Squat,
    name: "Squat",
    description: "A fundamental lower body exercise that targets quadriceps, hamstrings, and glutes",
    difficulty: Difficulty::Beginner,
    default_reps: 15,
    default_sets: 3,
    target_keypoints: LOWER_BODY,
    instructions: &[
        "Stand with feet shoulder-width apart",
        "Lower your body by bending knees and hips",
        "Keep your chest up and back straight",
        "Lower until thighs are parallel to ground",
        "Push through heels to return to starting position",
    ],
    form_checks: &[
        "Keep knees aligned with toes",
        "Don't let knees cave inward",
        "Maintain neutral spine",
        "Control the descent",
    ],
};

const PUSH_UP: ExerciseProfile = ExerciseProfile {
    exercise_type: ExerciseType::PushUp,
    name: "Push Up",
    description: "Upper body exercise targeting chest, shoulders, and triceps",
    difficulty: Difficulty::Beginner,
    default_reps: 10,
    default_sets: 3,
    target_keypoints: UPPER_BODY,
    instructions: &[
        "Start in plank position with hands shoulder-width apart",
        "Lower body until chest nearly touches ground",
        "Keep body in straight line from head to heels",
        "Push back up to starting position",
    ],
    form_checks: &[
        "Keep core engaged",
        "Don't let hips sag",
        "Full range of motion",
        "Control both up and down phases",
    ],
};

const HAMMER_CURL: ExerciseProfile = ExerciseProfile {
    exercise_type: ExerciseType::HammerCurl,
    name: "Hammer Curl",
    description: "Bicep exercise using neutral grip to target biceps and forearms",
    difficulty: Difficulty::Beginner,
    default_reps: 12,
    default_sets: 3,
    target_keypoints: UPPER_BODY,
    instructions: &[
        "Hold dumbbells with neutral grip (palms facing each other)",
        "Keep elbows close to your sides",
        "Curl weights up by flexing biceps",
        "Lower with control to starting position",
    ],
    form_checks: &[
        "Don't swing the weights",
        "Keep elbows stationary",
        "Control the negative",
        "Full range of motion",
    ],
};

const CHAIR_YOGA: ExerciseProfile = ExerciseProfile {
    exercise_type: ExerciseType::ChairYoga,
    name: "Chair Yoga",
    description: "Gentle yoga poses performed while seated, suitable for all mobility levels",
    difficulty: Difficulty::Beginner,
    default_reps: 8,
    default_sets: 2,
    target_keypoints: &["left_shoulder", "right_shoulder", "left_hip", "right_hip"],
    instructions: &[
        "Sit tall in chair with feet flat on floor",
        "Perform gentle stretches and poses",
        "Focus on breathing and alignment",
        "Move slowly and mindfully",
    ],
    form_checks: &[
        "Keep spine straight",
        "Breathe deeply",
        "Don't force movements",
        "Listen to your body",
    ],
};

const BREATHING_EXERCISE: ExerciseProfile = ExerciseProfile {
    exercise_type: ExerciseType::BreathingExercise,
    name: "Breathing Exercise",
    description: "Mindful breathing techniques for relaxation and stress relief",
    difficulty: Difficulty::Beginner,
    default_reps: 10,
    default_sets: 1,
    target_keypoints: &["nose", "left_shoulder", "right_shoulder"],
    instructions: &[
        "Sit or lie in comfortable position",
        "Place one hand on chest, one on belly",
        "Breathe in slowly through nose",
        "Exhale slowly through mouth",
    ],
    form_checks: &[
        "Focus on belly breathing",
        "Keep shoulders relaxed",
        "Count breaths if helpful",
        "Practice regularly",
    ],
};

impl ExerciseType {
    /// All supported exercises, in catalog order
    pub const ALL: [Self; 5] = [
        Self::Squat,
        Self::PushUp,
        Self::HammerCurl,
        Self::ChairYoga,
        Self::BreathingExercise,
    ];

    /// Catalog entry for this exercise
    #[must_use]
    pub const fn profile(self) -> &'static ExerciseProfile {
        match self {
            Self::Squat => &SQUAT,
            Self::PushUp => &PUSH_UP,
            Self::HammerCurl => &HAMMER_CURL,
            Self::ChairYoga => &CHAIR_YOGA,
            Self::BreathingExercise => &BREATHING_EXERCISE,
        }
    }

    /// Snake-case identifier used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::PushUp => "push_up",
            Self::HammerCurl => "hammer_curl",
            Self::ChairYoga => "chair_yoga",
            Self::BreathingExercise => "breathing_exercise",
        }
    }

    /// Catalog entries for every exercise
    pub fn catalog() -> impl Iterator<Item = &'static ExerciseProfile> {
        Self::ALL.into_iter().map(Self::profile)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|exercise| exercise.as_str() == normalized)
            .ok_or_else(|| {
                AppError::not_found(format!("Exercise type '{s}'")).with_resource_id(s)
            })
    }
}
