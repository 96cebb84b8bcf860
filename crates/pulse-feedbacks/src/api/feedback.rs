use glam::Vec3;

use crate::core::stage::Stage;

/// The core contract every feedback must fulfill.
///
/// A feedback is one reusable effect (scale pop, flash, shake, ...) that a
/// sequencer invokes polymorphically through these lifecycle hooks. Feedbacks
/// never own their targets — they hold a `TargetId` and read/write through
/// the [`Stage`] passed into each call.
///
/// Ticking is cooperative: the host scheduler calls [`Feedback::step`] once
/// per frame, and the feedback performs bounded work (one interpolation, a
/// handful of axis writes) before handing control back. There is no hidden
/// suspension primitive, so the state machine can be tested by single-stepping
/// without a real scheduler.
pub trait Feedback {
    /// Capture whatever initial-state snapshot this feedback needs.
    /// Must be called once before any play; a missing target means no
    /// snapshot is taken and later plays become no-ops.
    fn initialize(&mut self, stage: &Stage);

    /// Start (or restart) the effect. A play issued while a run is in flight
    /// silently supersedes it. `intensity` is accepted by every feedback;
    /// variants that don't modulate on it ignore it.
    fn play(&mut self, stage: &mut Stage, origin: Vec3, intensity: f32);

    /// Cancel an in-flight run, leaving the target wherever the last tick
    /// put it. No-op when nothing is running.
    fn stop(&mut self, stage: &mut Stage, origin: Vec3, intensity: f32);

    /// Hard reset the target to the captured snapshot, regardless of run
    /// state.
    fn restore_initial_values(&mut self, stage: &mut Stage);

    /// Abrupt teardown hook. The host is discarding this feedback and will
    /// never tick it again; drop the run handle without going through the
    /// graceful stop path.
    fn disable(&mut self);

    /// Effective core duration in seconds: the configured fixed value, or
    /// the last speed-derived value computed at play time. The host's global
    /// time multiplier is applied by the runner, never here.
    fn duration(&self) -> f32 {
        0.0
    }

    /// Advance the active run by one cooperative tick of `dt` seconds.
    /// Returns `true` while the run is still active.
    fn step(&mut self, stage: &mut Stage, dt: f32) -> bool;

    /// Whether a run is currently between its start and its termination.
    fn is_playing(&self) -> bool {
        false
    }
}
