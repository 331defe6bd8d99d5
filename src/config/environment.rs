// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses FORMTRACK_* variables into smoothing thresholds and session limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

//! Environment-based configuration

use formtrack_core::constants::session;
use formtrack_intelligence::config::{ConfigError, SmoothingConfig};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output, including rejected stage transitions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Per-session limits for the session actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum analyzed frames per second; faster frames are dropped
    pub max_frames_per_second: u32,
    /// Deadline for a single analyzer call
    pub analysis_timeout: Duration,
    /// Capacity of the bounded frame queue feeding the session task
    pub frame_queue_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_frames_per_second: session::MAX_FRAMES_PER_SECOND,
            analysis_timeout: Duration::from_millis(session::ANALYSIS_TIMEOUT_MS),
            frame_queue_capacity: session::FRAME_QUEUE_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Minimum spacing between analyzed frames
    #[must_use]
    pub fn min_frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.max_frames_per_second.max(1)
    }

    /// Check limits are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for a zero rate, timeout, or queue size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_frames_per_second == 0 {
            return Err(ConfigError::InvalidRange(
                "max_frames_per_second must be at least 1",
            ));
        }
        if self.analysis_timeout.is_zero() {
            return Err(ConfigError::InvalidRange(
                "analysis_timeout must be greater than zero",
            ));
        }
        if self.frame_queue_capacity == 0 {
            return Err(ConfigError::InvalidRange(
                "frame_queue_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Complete tracking engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormtrackConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Pose smoothing thresholds
    pub smoothing: SmoothingConfig,
    /// Session actor limits
    pub session: SessionConfig,
}

impl FormtrackConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for unparsable values, `ConfigError::EnvVar`
    /// for non-unicode values, and validation errors for out-of-range or
    /// inconsistent thresholds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = SmoothingConfig::default();
        let smoothing = SmoothingConfig {
            stability_score_window: env_parse(
                "FORMTRACK_STABILITY_WINDOW",
                defaults.stability_score_window,
            )?,
            stable_step_limit: env_parse("FORMTRACK_STABLE_STEP_LIMIT", defaults.stable_step_limit)?,
            damped_step_limit: env_parse("FORMTRACK_DAMPED_STEP_LIMIT", defaults.damped_step_limit)?,
            min_stable_frames_for_update: env_parse(
                "FORMTRACK_MIN_STABLE_FRAMES",
                defaults.min_stable_frames_for_update,
            )?,
            high_confidence_threshold: env_parse(
                "FORMTRACK_HIGH_CONFIDENCE",
                defaults.high_confidence_threshold,
            )?,
            stage_confidence_threshold: env_parse(
                "FORMTRACK_STAGE_CONFIDENCE",
                defaults.stage_confidence_threshold,
            )?,
            warning_stable_frames: env_parse(
                "FORMTRACK_WARNING_STABLE_FRAMES",
                defaults.warning_stable_frames,
            )?,
            max_stable_frames: env_parse("FORMTRACK_MAX_STABLE_FRAMES", defaults.max_stable_frames)?,
            confidence_floor: env_parse("FORMTRACK_CONFIDENCE_FLOOR", defaults.confidence_floor)?,
            confidence_ceiling: env_parse(
                "FORMTRACK_CONFIDENCE_CEILING",
                defaults.confidence_ceiling,
            )?,
        };
        smoothing.validate()?;

        let session = SessionConfig {
            max_frames_per_second: env_parse("FORMTRACK_MAX_FPS", session::MAX_FRAMES_PER_SECOND)?,
            analysis_timeout: Duration::from_millis(env_parse(
                "FORMTRACK_ANALYSIS_TIMEOUT_MS",
                session::ANALYSIS_TIMEOUT_MS,
            )?),
            frame_queue_capacity: env_parse("FORMTRACK_FRAME_QUEUE", session::FRAME_QUEUE_CAPACITY)?,
        };
        session.validate()?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "FORMTRACK_ENV",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            smoothing,
            session,
        };
        config.log_summary();
        Ok(config)
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            stability_window = self.smoothing.stability_score_window,
            step_limits = ?(self.smoothing.stable_step_limit, self.smoothing.damped_step_limit),
            confidence_band = ?(self.smoothing.confidence_floor, self.smoothing.confidence_ceiling),
            max_fps = self.session.max_frames_per_second,
            analysis_timeout_ms = self.session.analysis_timeout.as_millis() as u64,
            "Loaded tracking configuration"
        );
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, keeping `default` when unset
fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{key}={raw}"))),
        Err(VarError::NotPresent) => Ok(default),
        Err(error) => Err(error.into()),
    }
}
