//! Feedback runner — the host-side scheduler loop.
//!
//! Drives registered feedbacks one cooperative step per tick and owns the
//! global time multiplier. Feedback cores never see the multiplier; it is
//! applied here, both to the per-tick delta and to duration queries.

use crate::api::feedback::Feedback;
use crate::core::stage::Stage;

/// Ticks feedbacks against a stage.
///
/// Scheduling is cooperative and single-threaded: within one instance, play,
/// stop and step never run concurrently, so the "at most one run per
/// feedback" invariant holds by construction without locking.
pub struct FeedbackRunner {
    /// Host-controlled global time multiplier. 1.0 = real time; 2.0 plays
    /// every feedback twice as fast, so durations observed through
    /// [`FeedbackRunner::effective_duration`] shrink to match.
    pub timescale: f32,
}

impl FeedbackRunner {
    pub fn new() -> Self {
        Self { timescale: 1.0 }
    }

    pub fn with_timescale(timescale: f32) -> Self {
        Self { timescale }
    }

    /// The duration a host observes for a feedback: the core duration scaled
    /// by the global time multiplier. The core itself never applies the
    /// multiplier.
    pub fn effective_duration(&self, feedback: &dyn Feedback) -> f32 {
        if self.timescale <= 0.0 {
            return 0.0;
        }
        feedback.duration() / self.timescale
    }

    /// Step a single feedback with the timescale applied. Returns `true`
    /// while its run is still active.
    pub fn step(&self, stage: &mut Stage, feedback: &mut dyn Feedback, dt: f32) -> bool {
        feedback.step(stage, dt * self.timescale)
    }

    /// One scheduler tick: advance every feedback by one step. Returns how
    /// many are still running afterwards.
    pub fn tick(&self, stage: &mut Stage, feedbacks: &mut [Box<dyn Feedback>], dt: f32) -> usize {
        let dt = dt * self.timescale;
        let mut active = 0;
        for feedback in feedbacks.iter_mut() {
            if feedback.step(stage, dt) {
                active += 1;
            }
        }
        active
    }
}

impl Default for FeedbackRunner {
    fn default() -> Self {
        Self::new()
    }
}
