//! Simulated submission: no validation, no network, just a timed success.

use crate::constants::SUBMIT_DELAY_MS;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting { since: Instant },
    Submitted,
}

#[derive(Clone, Debug)]
pub struct Submission {
    phase: SubmitPhase,
    delay: Duration,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new(Duration::from_millis(SUBMIT_DELAY_MS))
    }
}

impl Submission {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            delay,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    /// Hovering the submit control. Starts submitting only from `Idle` with a
    /// non-empty password; returns whether it did.
    pub fn hover(&mut self, has_password: bool, now: Instant) -> bool {
        if !has_password || self.phase != SubmitPhase::Idle {
            return false;
        }
        self.phase = SubmitPhase::Submitting { since: now };
        log::info!("[submit] submitting");
        true
    }

    /// Completes the submission once the delay has passed. Returns `true` only
    /// on the frame the transition happens.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            SubmitPhase::Submitting { since } if now.duration_since(since) >= self.delay => {
                self.phase = SubmitPhase::Submitted;
                log::info!("[submit] accepted");
                true
            }
            _ => false,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_submitting() {
            "Processing..."
        } else {
            "Hover here to submit"
        }
    }
}
