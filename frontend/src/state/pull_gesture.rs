//! Pull-to-refresh gesture state.
//!
//! Idle → Tracking when a touch starts with the container scrolled to the
//! very top, Tracking → Refreshing when the touch is released fully pulled,
//! and back to Idle once the refresh completes. A touch that starts anywhere
//! but the top is ignored until it ends.

/// Displacement in pixels that counts as a full pull
pub const PULL_THRESHOLD_PX: f64 = 100.0;

/// Height of the indicator when fully pulled or refreshing
pub const INDICATOR_MAX_REM: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullPhase {
    Idle,
    Tracking { start_y: f64 },
    Refreshing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullGesture {
    phase: PullPhase,
    progress: f64,
}

impl Default for PullGesture {
    fn default() -> Self {
        Self {
            phase: PullPhase::Idle,
            progress: 0.0,
        }
    }
}

impl PullGesture {
    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    /// Pull progress in [0, 1]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == PullPhase::Refreshing
    }

    pub fn touch_start(&mut self, scroll_top: f64, y: f64) {
        if self.is_refreshing() {
            return;
        }

        self.progress = 0.0;
        self.phase = if scroll_top == 0.0 {
            PullPhase::Tracking { start_y: y }
        } else {
            PullPhase::Idle
        };
    }

    /// Returns true while the touch is pulling the content down, so the
    /// caller can suppress native scrolling.
    pub fn touch_move(&mut self, y: f64) -> bool {
        let PullPhase::Tracking { start_y } = self.phase else {
            return false;
        };

        let displacement = y - start_y;
        self.progress = (displacement / PULL_THRESHOLD_PX).clamp(0.0, 1.0);
        displacement > 0.0
    }

    /// Returns true exactly when this release should start a refresh
    pub fn touch_end(&mut self) -> bool {
        match self.phase {
            PullPhase::Tracking { .. } if self.progress >= 1.0 => {
                self.phase = PullPhase::Refreshing;
                self.progress = 1.0;
                true
            }
            PullPhase::Tracking { .. } => {
                self.phase = PullPhase::Idle;
                self.progress = 0.0;
                false
            }
            PullPhase::Idle | PullPhase::Refreshing => false,
        }
    }

    /// The refresh finished, successfully or not
    pub fn finish_refresh(&mut self) {
        if self.is_refreshing() {
            self.phase = PullPhase::Idle;
            self.progress = 0.0;
        }
    }

    pub fn indicator_height_rem(&self) -> f64 {
        if self.is_refreshing() {
            INDICATOR_MAX_REM
        } else {
            self.progress * INDICATOR_MAX_REM
        }
    }

    /// "Release to refresh" is shown once the pull is complete
    pub fn show_release_hint(&self) -> bool {
        matches!(self.phase, PullPhase::Tracking { .. }) && self.progress >= 1.0
    }
}
