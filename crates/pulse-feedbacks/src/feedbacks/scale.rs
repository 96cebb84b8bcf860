// feedbacks/scale.rs
//
// Scale feedback — animates a target's 3D scale from a resolved start vector
// to a resolved end vector over a resolved duration, with independent
// per-axis enable flags and per-axis easing curves.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::feedback::Feedback;
use crate::api::types::{PlayDirection, TargetId};
use crate::core::stage::Stage;
use crate::easing::{lerp, Curve};

/// How the animation's total time is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    /// A fixed number of seconds, used as configured.
    Fixed(f32),
    /// Units per second: the duration becomes `distance(from, to) / speed`.
    /// A speed of zero or less degrades to an instant snap.
    Speed(f32),
}

/// Where the animation's start vector comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartValue {
    /// The configured start vector.
    Custom,
    /// The initial snapshot, displaced by the configured start vector.
    OffsetFromInitial,
    /// The initial snapshot verbatim.
    #[default]
    Initial,
    /// The live scale at the instant play resolves it.
    Current,
}

/// Where the animation's end vector comes from. The end is a destination the
/// animation moves toward, so there is no `Current` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndValue {
    /// The configured end vector.
    #[default]
    Custom,
    /// The initial snapshot, displaced by the configured end vector.
    OffsetFromInitial,
    /// The initial snapshot verbatim.
    Initial,
}

/// How a configured vector combines with the initial snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleMode {
    /// The configured vector is used as-is.
    #[default]
    Absolute,
    /// The configured vector is a fraction of the initial snapshot:
    /// Custom multiplies component-wise, OffsetFromInitial offsets by
    /// `initial ⊙ vector`.
    Relative,
}

/// Configuration for a [`ScaleFeedback`], supplied before any play.
/// Serde-backed so hosts can load feedback definitions from data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub timing: Timing,
    pub start_value: StartValue,
    pub start_mode: ScaleMode,
    pub start: Vec3,
    pub end_value: EndValue,
    pub end_mode: ScaleMode,
    pub end: Vec3,
    /// Per-axis enable flags. Axes left disabled are never written, whatever
    /// other systems set them to.
    pub animate_x: bool,
    pub animate_y: bool,
    pub animate_z: bool,
    /// Per-axis easing curves applied to the normalized progress.
    pub curve_x: Curve,
    pub curve_y: Curve,
    pub curve_z: Curve,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            timing: Timing::Fixed(0.2),
            start_value: StartValue::Initial,
            start_mode: ScaleMode::Absolute,
            start: Vec3::ONE,
            end_value: EndValue::Custom,
            end_mode: ScaleMode::Absolute,
            end: Vec3::ONE,
            animate_x: true,
            animate_y: true,
            animate_z: true,
            curve_x: Curve::LINEAR,
            curve_y: Curve::LINEAR,
            curve_z: Curve::LINEAR,
        }
    }
}

impl ScaleConfig {
    /// Resolve the start vector. Pure in (config, snapshot, live scale):
    /// calling it again with the same inputs yields the same vector.
    pub fn resolve_start(&self, initial: Vec3, live: Vec3) -> Vec3 {
        match (self.start_value, self.start_mode) {
            (StartValue::Custom, ScaleMode::Absolute) => self.start,
            (StartValue::Custom, ScaleMode::Relative) => self.start * initial,
            (StartValue::OffsetFromInitial, ScaleMode::Absolute) => initial + self.start,
            (StartValue::OffsetFromInitial, ScaleMode::Relative) => initial + initial * self.start,
            (StartValue::Initial, _) => initial,
            (StartValue::Current, _) => live,
        }
    }

    /// Resolve the end vector. Same cases as the start minus `Current`.
    pub fn resolve_end(&self, initial: Vec3) -> Vec3 {
        match (self.end_value, self.end_mode) {
            (EndValue::Custom, ScaleMode::Absolute) => self.end,
            (EndValue::Custom, ScaleMode::Relative) => self.end * initial,
            (EndValue::OffsetFromInitial, ScaleMode::Absolute) => initial + self.end,
            (EndValue::OffsetFromInitial, ScaleMode::Relative) => initial + initial * self.end,
            (EndValue::Initial, _) => initial,
        }
    }

    /// The nonnegative total duration for a run between `from` and `to`.
    pub fn resolved_duration(&self, from: Vec3, to: Vec3) -> f32 {
        match self.timing {
            Timing::Fixed(secs) => secs,
            Timing::Speed(speed) => {
                if speed <= 0.0 {
                    0.0
                } else {
                    from.distance(to) / speed
                }
            }
        }
    }
}

/// One in-flight interpolation run.
///
/// At most one exists per feedback instance: play replaces the previous
/// occupant, and dropping it is the cancellation — no tick belonging to a
/// superseded run can ever execute again.
#[derive(Debug, Clone, Copy)]
struct ScaleRun {
    from: Vec3,
    to: Vec3,
    duration: f32,
    /// Elapsed position inside the run. Starts at 0 playing forward, at
    /// `duration` playing in reverse, and moves by ±dt per step.
    journey: f32,
    direction: PlayDirection,
}

impl ScaleRun {
    /// Where this run must land: the end vector forward, the start vector in
    /// reverse.
    fn final_scale(&self) -> Vec3 {
        if self.direction.is_forward() {
            self.to
        } else {
            self.from
        }
    }
}

/// Animates the scale of one stage target.
///
/// Lifecycle: `initialize` captures the target's scale as the immutable
/// snapshot, `play` resolves the run and starts it, the host steps it once
/// per scheduler tick, and `stop` / `restore_initial_values` / `disable`
/// behave as the [`Feedback`] contract describes. Anomalous input (missing
/// target, non-positive speed, stop while idle) degrades to a no-op rather
/// than an error.
#[derive(Debug, Clone)]
pub struct ScaleFeedback {
    /// The stage target whose scale is animated. Absent target: every
    /// operation is a no-op.
    pub target: Option<TargetId>,
    pub config: ScaleConfig,
    /// Read once at play time; owned and set by the host sequencer.
    pub direction: PlayDirection,
    /// Captured at initialization, recomputed only by re-initializing.
    initial_scale: Option<Vec3>,
    /// The active run, if any. An arena-of-one: replacing it cancels the
    /// previous occupant.
    run: Option<ScaleRun>,
    /// Speed-mode durations are cached at play so duration queries during
    /// one play cycle all observe the same number.
    cached_duration: Option<f32>,
    playing: bool,
}

impl ScaleFeedback {
    pub fn new(target: TargetId, config: ScaleConfig) -> Self {
        Self {
            target: Some(target),
            config,
            direction: PlayDirection::Forward,
            initial_scale: None,
            run: None,
            cached_duration: None,
            playing: false,
        }
    }

    /// A feedback with no target bound yet. Stays inert until `target` is
    /// set and `initialize` runs.
    pub fn unbound(config: ScaleConfig) -> Self {
        Self {
            target: None,
            ..Self::new(TargetId(0), config)
        }
    }

    pub fn with_direction(mut self, direction: PlayDirection) -> Self {
        self.direction = direction;
        self
    }

    /// The snapshot captured at initialization, if any.
    pub fn initial_scale(&self) -> Option<Vec3> {
        self.initial_scale
    }

    /// Write `value` into the axes this feedback animates, leaving disabled
    /// axes untouched.
    fn write_enabled_axes(&self, scale: &mut Vec3, value: Vec3) {
        if self.config.animate_x {
            scale.x = value.x;
        }
        if self.config.animate_y {
            scale.y = value.y;
        }
        if self.config.animate_z {
            scale.z = value.z;
        }
    }
}

impl Feedback for ScaleFeedback {
    fn initialize(&mut self, stage: &Stage) {
        if let Some(target) = self.target.and_then(|id| stage.get(id)) {
            self.initial_scale = Some(target.scale);
        }
    }

    fn play(&mut self, stage: &mut Stage, _origin: Vec3, _intensity: f32) {
        // Cancel-then-replace, hard stop: dropping the old run is the
        // cancellation, so no stale tick from it can ever execute.
        self.run = None;
        self.playing = false;

        let Some(initial) = self.initial_scale else {
            return;
        };
        // Inactive targets are skipped the same way missing ones are.
        let Some(target) = self
            .target
            .and_then(|id| stage.get_mut(id))
            .filter(|t| t.active)
        else {
            return;
        };

        let from = self.config.resolve_start(initial, target.scale);
        let to = self.config.resolve_end(initial);
        let duration = self.config.resolved_duration(from, to);
        if matches!(self.config.timing, Timing::Speed(_)) {
            self.cached_duration = Some(duration);
        }

        let direction = self.direction;
        if duration <= 0.0 {
            // A zero-length play is a synchronous assignment, not an
            // animated cycle: the playing flag is never set, so sequencers
            // polling it don't wait on this feedback.
            let snap = if direction.is_forward() { to } else { from };
            self.write_enabled_axes(&mut target.scale, snap);
            log::debug!("scale feedback: instant snap to {snap}");
            return;
        }

        self.run = Some(ScaleRun {
            from,
            to,
            duration,
            journey: if direction.is_forward() { 0.0 } else { duration },
            direction,
        });
        self.playing = true;
        log::debug!("scale feedback: run started, {duration}s {direction:?}");
    }

    fn stop(&mut self, _stage: &mut Stage, _origin: Vec3, _intensity: f32) {
        if self.run.take().is_some() {
            log::debug!("scale feedback: run cancelled");
        }
        self.playing = false;
    }

    fn restore_initial_values(&mut self, stage: &mut Stage) {
        let Some(initial) = self.initial_scale else {
            return;
        };
        if let Some(target) = self.target.and_then(|id| stage.get_mut(id)) {
            // All axes, ignoring the per-axis enable flags. The run and the
            // playing flag are left alone.
            target.scale = initial;
        }
    }

    fn disable(&mut self) {
        // Abrupt teardown: the host will never tick this feedback again, so
        // just drop the handle instead of going through stop.
        self.run = None;
    }

    fn duration(&self) -> f32 {
        match self.config.timing {
            Timing::Fixed(secs) => secs,
            Timing::Speed(_) => self.cached_duration.unwrap_or(0.0),
        }
    }

    fn step(&mut self, stage: &mut Stage, dt: f32) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let Some(target) = self
            .target
            .and_then(|id| stage.get_mut(id))
            .filter(|t| t.active)
        else {
            // Target vanished or went inactive mid-run; abandon the loop.
            self.run = None;
            self.playing = false;
            return false;
        };

        let percent = (run.journey / run.duration).clamp(0.0, 1.0);
        let scale = &mut target.scale;
        if self.config.animate_x {
            scale.x = lerp(run.from.x, run.to.x, self.config.curve_x.evaluate(percent));
        }
        if self.config.animate_y {
            scale.y = lerp(run.from.y, run.to.y, self.config.curve_y.evaluate(percent));
        }
        if self.config.animate_z {
            scale.z = lerp(run.from.z, run.to.z, self.config.curve_z.evaluate(percent));
        }

        run.journey += if run.direction.is_forward() { dt } else { -dt };
        if run.journey >= 0.0 && run.journey <= run.duration {
            return true;
        }

        // Natural completion: pin enabled axes to the exact boundary vector,
        // erasing any float drift from the last interpolation step.
        let run = *run;
        self.write_enabled_axes(&mut target.scale, run.final_scale());
        self.run = None;
        self.playing = false;
        log::debug!("scale feedback: run completed at {}", run.final_scale());
        false
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
