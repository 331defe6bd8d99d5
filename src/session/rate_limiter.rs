// ABOUTME: Frame admission limiter capping how often a session calls the pose analyzer
// ABOUTME: Frames arriving sooner than the minimum interval are dropped and counted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use std::time::Duration;
use tokio::time::Instant;

/// Minimum-interval limiter for incoming frames
///
/// Uses tokio's clock so paused-time tests control admission.
#[derive(Debug, Clone)]
pub struct FrameRateLimiter {
    min_interval: Duration,
    last_accepted: Option<Instant>,
    dropped: u64,
}

impl FrameRateLimiter {
    /// Limiter admitting at most `max_frames_per_second` frames per second
    #[must_use]
    pub fn new(max_frames_per_second: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / max_frames_per_second.max(1))
    }

    /// Limiter with an explicit minimum spacing
    #[must_use]
    pub const fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
            dropped: 0,
        }
    }

    /// Admit a frame arriving at `now`
    ///
    /// The first frame is always admitted.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let admitted = self
            .last_accepted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.min_interval);
        if admitted {
            self.last_accepted = Some(now);
        } else {
            self.dropped += 1;
        }
        admitted
    }

    /// Minimum spacing between admitted frames
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Frames rejected so far
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
}
