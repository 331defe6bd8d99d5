// ABOUTME: Monotonic repetition counter for noisy backend rep reports
// ABOUTME: Displayed count only moves forward; regressions are counted and ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use tracing::debug;

/// Rep count shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepCounter {
    displayed: u32,
    regressions: u64,
}

impl RepCounter {
    /// Counter starting at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            displayed: 0,
            regressions: 0,
        }
    }

    /// Fold in the backend's rep count and return the displayed count
    pub fn observe(&mut self, raw_rep: u32) -> u32 {
        if raw_rep < self.displayed {
            self.regressions += 1;
            debug!(
                displayed = self.displayed,
                reported = raw_rep,
                "Ignoring rep count regression"
            );
        } else {
            self.displayed = raw_rep;
        }
        self.displayed
    }

    /// Current displayed count
    #[must_use]
    pub const fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Number of reports that tried to move the count backwards
    #[must_use]
    pub const fn regressions(&self) -> u64 {
        self.regressions
    }
}
