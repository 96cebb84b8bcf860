/// Fixed timestep accumulator.
/// Turns variable frame deltas into a stream of fixed-size steps so feedback
/// ticks advance at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    step: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Cap on steps returned per frame, to prevent a spiral of death after
    /// a long stall.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Override the per-frame step cap.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps
    /// to run this frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.step * self.max_steps as f32);
        let steps = (self.accumulator / self.step) as u32;
        self.accumulator -= steps as f32 * self.step;
        steps
    }

    /// The fixed delta time.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Drop any accumulated time, e.g. after a pause or scene change.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
