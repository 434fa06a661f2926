//! Verification state machine.
//!
//! ```text
//! Idle --start--> Dragging --release (percent >= 100)--> Verified
//!                    |  ^
//!                    |  +--move (updates percent)
//!                    +--release (percent < 100) / cancel (Revert)--> Idle
//! Verified --move--> Verified (offset pinned to 0)
//! any --reset--> Idle
//! ```
//!
//! The controller never calls into host code. Every input returns an outcome
//! that the widget applies after the controller has committed its new state,
//! so the verified callback always observes a consistent machine and may call
//! back into the widget.

use crate::config::CancelPolicy;

/// Percent that must be held at release time to verify.
pub const VERIFY_THRESHOLD_PERCENT: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    /// Handle at rest (or sliding home), accepting gestures.
    #[default]
    Idle,
    /// Gesture in progress, not yet verified.
    Dragging,
    /// Terminal for this cycle until reset.
    Verified,
}

/// Completion percentage of `offset` over `max_offset`, rounded to an
/// integer in `[0, 100]`. An empty range is always 0%.
pub fn percent_of(offset: f32, max_offset: f32) -> u8 {
    if max_offset.is_nan() || max_offset <= 0.0 {
        return 0;
    }
    let ratio = (offset / max_offset).clamp(0.0, 1.0);
    // NaN saturates to 0.
    (ratio * 100.0).round() as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The gesture owns the handle; capture the baseline.
    Began,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    Applied { offset: f32, percent: u8 },
    /// Verified: the handle is forced back to 0.
    PinnedToZero,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Entered `Verified`; fire the callback exactly once.
    Verified,
    /// Returned to `Idle`; slide the handle home.
    Reverted,
    Ignored,
}

#[derive(Debug, Default)]
pub struct VerificationController {
    status: VerificationStatus,
    percent: u8,
    verified_cycles: u64,
}

impl VerificationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Number of transitions into `Verified` so far.
    pub fn verified_cycles(&self) -> u64 {
        self.verified_cycles
    }

    pub fn on_gesture_start(&mut self) -> StartOutcome {
        match self.status {
            VerificationStatus::Verified => StartOutcome::Ignored,
            VerificationStatus::Idle => {
                self.transition(VerificationStatus::Dragging);
                StartOutcome::Began
            }
            // Re-grab after a deferred cancel.
            VerificationStatus::Dragging => StartOutcome::Began,
        }
    }

    pub fn on_gesture_move(&mut self, offset: f32, max_offset: f32) -> MoveOutcome {
        match self.status {
            VerificationStatus::Verified => MoveOutcome::PinnedToZero,
            VerificationStatus::Idle => MoveOutcome::Ignored,
            VerificationStatus::Dragging => {
                self.percent = percent_of(offset, max_offset);
                log::trace!("drag offset {offset} ({}%)", self.percent);
                MoveOutcome::Applied {
                    offset,
                    percent: self.percent,
                }
            }
        }
    }

    /// Release decision, judged on the percent held at release time.
    pub fn on_release(&mut self) -> ReleaseOutcome {
        if self.status != VerificationStatus::Dragging {
            return ReleaseOutcome::Ignored;
        }
        if self.percent >= VERIFY_THRESHOLD_PERCENT {
            self.verified_cycles += 1;
            self.transition(VerificationStatus::Verified);
            ReleaseOutcome::Verified
        } else {
            self.revert();
            ReleaseOutcome::Reverted
        }
    }

    pub fn on_cancel(&mut self, policy: CancelPolicy) -> ReleaseOutcome {
        match (self.status, policy) {
            (VerificationStatus::Dragging, CancelPolicy::Revert) => {
                self.revert();
                ReleaseOutcome::Reverted
            }
            _ => ReleaseOutcome::Ignored,
        }
    }

    /// Re-anchors the percent on the offset a new gesture grabbed the handle
    /// at, which is non-zero when the grab interrupts a reset.
    pub fn on_baseline(&mut self, offset: f32, max_offset: f32) {
        if self.status == VerificationStatus::Dragging {
            self.percent = percent_of(offset, max_offset);
            log::trace!("drag baseline {offset} ({}%)", self.percent);
        }
    }

    /// Recomputes the percent after the track was re-measured. The status
    /// never changes here and a verified percent stays committed.
    pub fn on_track_changed(&mut self, offset: f32, max_offset: f32) {
        if self.status == VerificationStatus::Dragging {
            self.percent = percent_of(offset, max_offset);
        }
    }

    /// Forces `Idle`. Returns `false` (and does nothing) when already idle.
    pub fn reset(&mut self) -> bool {
        if self.status == VerificationStatus::Idle {
            return false;
        }
        self.revert();
        true
    }

    fn revert(&mut self) {
        self.percent = 0;
        self.transition(VerificationStatus::Idle);
    }

    fn transition(&mut self, next: VerificationStatus) {
        if self.status != next {
            log::debug!("verification status {:?} -> {:?}", self.status, next);
            self.status = next;
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
