// ABOUTME: Workspace-wide constants for pose smoothing, fallback frames, and session summaries
// ABOUTME: Default thresholds are empirical values tuned on the mobile client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! Constants organized by domain.
//!
//! The smoothing defaults have no derivation beyond field tuning. They are
//! only defaults: every one of them can be overridden through
//! `SmoothingConfig` and the `FORMTRACK_*` environment variables.

/// Default pose smoothing thresholds
pub mod smoothing {
    /// Maximum score difference (exclusive) for a frame to count as stable
    pub const STABILITY_SCORE_WINDOW: f64 = 10.0;
    /// Maximum per-frame score change when updates are allowed
    pub const STABLE_STEP_LIMIT: f64 = 5.0;
    /// Maximum per-frame score change when updates are damped
    pub const DAMPED_STEP_LIMIT: f64 = 2.0;
    /// Stable frames required before full updates are allowed
    pub const MIN_STABLE_FRAMES_FOR_UPDATE: u8 = 2;
    /// Raw confidence above which full updates are allowed regardless of stability
    pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.85;
    /// Raw confidence below which stage changes are never accepted
    pub const STAGE_CONFIDENCE_THRESHOLD: f64 = 0.7;
    /// Stable frames required before warnings are replaced
    pub const WARNING_STABLE_FRAMES: u8 = 3;
    /// Saturation point of the stable frame counter
    pub const MAX_STABLE_FRAMES: u8 = 10;
    /// Lower bound of displayed confidence
    pub const CONFIDENCE_FLOOR: f64 = 0.6;
    /// Upper bound of displayed confidence
    pub const CONFIDENCE_CEILING: f64 = 0.95;
}

/// Form score bounds
pub mod form_score {
    /// Lowest valid form score
    pub const MIN: f64 = 0.0;
    /// Highest valid form score
    pub const MAX: f64 = 100.0;
}

/// Values used when the pose analyzer cannot produce a frame
pub mod fallback {
    /// Neutral form score reported while analysis is unavailable
    pub const FORM_SCORE: f64 = 70.0;
    /// Confidence low enough that no stage change is accepted
    pub const CONFIDENCE: f64 = 0.3;
}

/// Keypoint form analysis thresholds, in normalized image units
pub mod form_analysis {
    /// Starting score before deductions
    pub const BASE_SCORE: f64 = 100.0;
    /// Score for a partial detection
    pub const INCOMPLETE_SCORE: f64 = 70.0;
    /// Score for exercises without a dedicated analysis
    pub const GENERIC_SCORE: f64 = 80.0;

    /// Hip clearance above the knees at or below which a squat is in the `down` stage
    pub const SQUAT_DOWN_CLEARANCE: f64 = 0.02;
    /// Hip clearance below which depth is excellent
    pub const SQUAT_EXCELLENT_DEPTH: f64 = -0.05;
    /// Hip clearance below which depth is good and a rep is reported
    pub const SQUAT_GOOD_DEPTH: f64 = -0.02;
    /// Hip clearance above which the squat is too shallow
    pub const SQUAT_SHALLOW: f64 = 0.05;
    /// Bonus for excellent depth
    pub const SQUAT_DEPTH_BONUS: f64 = 5.0;
    /// Deduction for a shallow squat
    pub const SQUAT_SHALLOW_PENALTY: f64 = 20.0;
    /// Knee width below this fraction of ankle width means knees cave in
    pub const KNEE_VALGUS_RATIO: f64 = 0.8;
    /// Knee width above this fraction of ankle width means knees are too wide
    pub const KNEE_WIDE_RATIO: f64 = 1.3;
    /// Deduction for knees caving in
    pub const KNEE_VALGUS_PENALTY: f64 = 15.0;
    /// Deduction for knees too wide
    pub const KNEE_WIDE_PENALTY: f64 = 5.0;
    /// Horizontal shoulder-to-hip offset above which the torso leans
    pub const TORSO_LEAN_LIMIT: f64 = 0.1;
    /// Deduction for a leaning torso
    pub const TORSO_LEAN_PENALTY: f64 = 10.0;
    /// Left/right height difference above which the body is asymmetric
    pub const SYMMETRY_LIMIT: f64 = 0.05;
    /// Deduction for asymmetry
    pub const SYMMETRY_PENALTY: f64 = 8.0;
    /// Horizontal ankle-ahead-of-knee offset above which shins are too angled
    pub const SHIN_ANGLE_LIMIT: f64 = 0.05;
    /// Deduction for angled shins
    pub const SHIN_ANGLE_PENALTY: f64 = 5.0;

    /// Elbows this far above the shoulders are the push-up `up` stage
    pub const PUSH_UP_UP_OFFSET: f64 = 0.1;
    /// Elbows this far below the shoulders are the push-up `down` stage
    pub const PUSH_UP_DOWN_OFFSET: f64 = 0.05;
    /// Elbows this far below the shoulders count as full range of motion
    pub const PUSH_UP_RANGE_OFFSET: f64 = 0.1;
    /// Elbow height difference above which elbows are uneven
    pub const ELBOW_EVEN_LIMIT: f64 = 0.1;
    /// Deduction for uneven elbows
    pub const ELBOW_UNEVEN_PENALTY: f64 = 10.0;
    /// Deduction for partial range of motion
    pub const PUSH_UP_RANGE_PENALTY: f64 = 15.0;

    /// Minimum score for the "Perfect form!" headline
    pub const PERFECT_HEADLINE: f64 = 90.0;
    /// Minimum score for the "Great form!" headline
    pub const GREAT_HEADLINE: f64 = 80.0;
    /// Minimum score for the "Good form" headline
    pub const GOOD_HEADLINE: f64 = 70.0;
}

/// Session defaults
pub mod session {
    /// Maximum analyzed frames per second
    pub const MAX_FRAMES_PER_SECOND: u32 = 5;
    /// Per-frame analyzer deadline in milliseconds
    pub const ANALYSIS_TIMEOUT_MS: u64 = 2_000;
    /// Bounded frame queue capacity between the capture side and the session task
    pub const FRAME_QUEUE_CAPACITY: usize = 16;
}

/// Session summary scoring
pub mod summary {
    /// Calories burned per second of tracked exercise
    pub const CALORIES_PER_SECOND: f64 = 0.5;
    /// Minimum average accuracy for grade A
    pub const GRADE_A_THRESHOLD: f64 = 90.0;
    /// Minimum average accuracy for grade B
    pub const GRADE_B_THRESHOLD: f64 = 80.0;
    /// Minimum average accuracy for grade C
    pub const GRADE_C_THRESHOLD: f64 = 70.0;
    /// Average accuracy below which improvement areas are suggested
    pub const IMPROVEMENT_THRESHOLD: f64 = 85.0;
    /// Extra reps suggested for the next session
    pub const NEXT_SESSION_REP_INCREMENT: u32 = 2;
}

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for the tracking engine
    pub const FORMTRACK: &str = "formtrack";
}
