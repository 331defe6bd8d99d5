// ABOUTME: Repetition stage enumeration with the static stage transition table
// ABOUTME: Also models raw stage labels, which may be unrecognized strings from the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Phase of a repetition as classified per frame
///
/// Stages form a small state machine. `Rest` is the conventional starting
/// point; there is no terminal state.
///
/// ```text
/// rest -> up | down
/// up   -> down | rest
/// down -> hold | up
/// hold -> up | rest
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Not moving, before or between repetitions
    #[default]
    Rest,
    /// Concentric/raised position
    Up,
    /// Eccentric/lowered position
    Down,
    /// Static hold at the bottom of the movement
    Hold,
}

impl Stage {
    /// Every stage, in table order
    pub const ALL: [Self; 4] = [Self::Rest, Self::Up, Self::Down, Self::Hold];

    /// Stages that may directly follow this one
    #[must_use]
    pub const fn successors(self) -> &'static [Self] {
        match self {
            Self::Rest => &[Self::Up, Self::Down],
            Self::Up => &[Self::Down, Self::Rest],
            Self::Down => &[Self::Hold, Self::Up],
            Self::Hold => &[Self::Up, Self::Rest],
        }
    }

    /// Whether `next` is a listed successor of this stage
    ///
    /// Staying in the same stage is not a transition and returns `false`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Up => "up",
            Self::Down => "down",
            Self::Hold => "hold",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rest" => Ok(Self::Rest),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "hold" => Ok(Self::Hold),
            other => Err(AppError::invalid_input(format!("Unknown stage label: {other}"))),
        }
    }
}

/// Stage label exactly as reported by the pose analyzer
///
/// Analyzers for some exercises emit labels outside the four known stages
/// (e.g. `middle` for push-ups). Those are kept verbatim so they can be
/// logged, and are always rejected as a stage transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StageLabel {
    /// One of the four known stages
    Known(Stage),
    /// Any other label
    Unrecognized(String),
}

impl StageLabel {
    /// The known stage, if this label names one
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Known(stage) => Some(*stage),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether this label names exactly `stage`
    #[must_use]
    pub fn is(&self, stage: Stage) -> bool {
        self.stage() == Some(stage)
    }
}

impl From<Stage> for StageLabel {
    fn from(stage: Stage) -> Self {
        Self::Known(stage)
    }
}

impl From<String> for StageLabel {
    fn from(label: String) -> Self {
        label
            .parse::<Stage>()
            .map_or(Self::Unrecognized(label), Self::Known)
    }
}

impl From<&str> for StageLabel {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<StageLabel> for String {
    fn from(label: StageLabel) -> Self {
        match label {
            StageLabel::Known(stage) => stage.as_str().to_owned(),
            StageLabel::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(stage) => stage.fmt(f),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
