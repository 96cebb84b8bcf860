use glam::{Quat, Vec3};

use crate::api::types::TargetId;

/// Fat target — one struct carrying every transform field a feedback might
/// animate, instead of an ECS component per field. Feedbacks mutate these
/// fields in place through the stage; whatever renders the stage reads them
/// back out.
#[derive(Debug, Clone)]
pub struct Target {
    /// Unique identifier.
    pub id: TargetId,
    /// String tag for finding targets by name.
    pub tag: String,
    /// Inactive targets are skipped by feedbacks: play won't start a run
    /// against one, and a run whose target goes inactive is abandoned.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Scale. Feedbacks write individual axes; axes they don't animate keep
    /// whatever value other systems last set.
    pub scale: Vec3,
}

impl Target {
    /// A new active target at the origin with unit scale.
    pub fn new(id: TargetId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}
