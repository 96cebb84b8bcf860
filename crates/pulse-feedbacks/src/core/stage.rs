use crate::api::types::TargetId;
use crate::components::target::Target;

/// Flat-Vec storage for the targets feedbacks animate. Linear scans are fine
/// at the scale this runs at (dozens of targets, not millions).
///
/// The stage owns the targets; feedbacks only hold `TargetId`s and go through
/// `get`/`get_mut` every tick. Two feedbacks animating the same target are
/// not coordinated — last writer wins.
pub struct Stage {
    targets: Vec<Target>,
}

impl Stage {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// A stage sized for a known target count.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            targets: Vec::with_capacity(capacity),
        }
    }

    /// Put a target on the stage.
    pub fn spawn(&mut self, target: Target) {
        self.targets.push(target);
    }

    /// Remove a target by ID, returning it if it was present. Order is not
    /// preserved.
    pub fn despawn(&mut self, id: TargetId) -> Option<Target> {
        let idx = self.targets.iter().position(|t| t.id == id)?;
        Some(self.targets.swap_remove(idx))
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Target> {
        self.targets.iter_mut()
    }

    /// First target carrying the given tag, if any.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.tag == tag)
    }

    /// Mutable variant of [`Stage::find_by_tag`].
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Remove every target.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawned_targets_are_reachable_by_id() {
        let mut stage = Stage::new();
        let id = TargetId(1);
        stage.spawn(Target::new(id).with_scale(Vec3::new(2.0, 3.0, 4.0)));
        assert_eq!(stage.get(id).unwrap().scale, Vec3::new(2.0, 3.0, 4.0));
        assert!(stage.get(TargetId(2)).is_none());
    }

    #[test]
    fn despawn_hands_the_target_back() {
        let mut stage = Stage::new();
        let id = TargetId(7);
        stage.spawn(Target::new(id).with_tag("crate"));
        let removed = stage.despawn(id).unwrap();
        assert_eq!(removed.tag, "crate");
        assert!(stage.is_empty());
        assert!(stage.despawn(id).is_none());
    }

    #[test]
    fn tags_resolve_to_the_first_match() {
        let mut stage = Stage::new();
        stage.spawn(Target::new(TargetId(1)).with_tag("crate"));
        stage.spawn(Target::new(TargetId(2)).with_tag("barrel"));
        stage.spawn(Target::new(TargetId(3)).with_tag("crate"));
        assert_eq!(stage.find_by_tag("crate").unwrap().id, TargetId(1));
        stage.find_by_tag_mut("barrel").unwrap().scale = Vec3::splat(2.0);
        assert_eq!(stage.get(TargetId(2)).unwrap().scale, Vec3::splat(2.0));
    }
}
