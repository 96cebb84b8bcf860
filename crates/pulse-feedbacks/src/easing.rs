// easing.rs
//
// Pure easing math for feedback interpolation.
// No dependencies on Target/Stage — just functions of normalized time.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// A curve family. Combined with an [`EaseMode`] this identifies one easing
/// function; every family is defined by its ease-in primitive and the out /
/// in-out shapes are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveFamily {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    Quad,
    Cubic,
    Quart,
    Sine,
    /// Exponential (dramatic).
    Expo,
    /// Overshoots the endpoint, then settles. Non-monotonic.
    Back,
    /// Bouncy finish. Non-monotonic.
    Bounce,
    /// Spring oscillation around the endpoint. Non-monotonic.
    Elastic,
}

impl CurveFamily {
    /// The ease-in primitive for this family on `t` in [0, 1].
    fn ease_in(self, t: f32) -> f32 {
        match self {
            CurveFamily::Linear => t,
            CurveFamily::Quad => t * t,
            CurveFamily::Cubic => t * t * t,
            CurveFamily::Quart => t * t * t * t,
            CurveFamily::Sine => 1.0 - (t * PI / 2.0).cos(),
            CurveFamily::Expo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            CurveFamily::Back => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            CurveFamily::Bounce => 1.0 - bounce_out(1.0 - t),
            CurveFamily::Elastic => {
                const C4: f32 = (2.0 * PI) / 3.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
                }
            }
        }
    }
}

/// Which end of the run the family's shape applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EaseMode {
    /// Slow start.
    In,
    /// Slow end.
    #[default]
    Out,
    /// Slow start and end.
    InOut,
}

/// One easing curve: a family identity plus a mode, evaluable as a pure
/// function `[0, 1] -> [0, 1]`. Overshooting families (Back, Elastic) may
/// legitimately leave `[0, 1]` mid-curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub family: CurveFamily,
    pub mode: EaseMode,
}

impl Curve {
    pub const LINEAR: Curve = Curve {
        family: CurveFamily::Linear,
        mode: EaseMode::Out,
    };

    pub fn new(family: CurveFamily, mode: EaseMode) -> Self {
        Self { family, mode }
    }

    pub fn ease_in(family: CurveFamily) -> Self {
        Self::new(family, EaseMode::In)
    }

    pub fn ease_out(family: CurveFamily) -> Self {
        Self::new(family, EaseMode::Out)
    }

    pub fn ease_in_out(family: CurveFamily) -> Self {
        Self::new(family, EaseMode::InOut)
    }

    /// Evaluate the curve at normalized time `t`. Input is clamped to
    /// [0, 1]; output typically lands in [0, 1] but can overshoot for
    /// Back/Elastic.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.mode {
            EaseMode::In => self.family.ease_in(t),
            EaseMode::Out => 1.0 - self.family.ease_in(1.0 - t),
            EaseMode::InOut => {
                if t < 0.5 {
                    self.family.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - self.family.ease_in(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values. Deliberately unclamped so
/// overshooting curves can push past the endpoints.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values (unclamped).
#[inline]
pub fn lerp_vec3(a: glam::Vec3, b: glam::Vec3, t: f32) -> glam::Vec3 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, curve: Curve) -> f32 {
    lerp(a, b, curve.evaluate(t))
}

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: glam::Vec3, b: glam::Vec3, t: f32, curve: Curve) -> glam::Vec3 {
    lerp_vec3(a, b, curve.evaluate(t))
}
