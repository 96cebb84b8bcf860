/// Unique identifier for a target on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// Playback direction for a feedback run.
///
/// Owned and set by the host sequencer; a feedback driver reads it once at
/// play time. Reversing only flips the traversal — the meaning of the
/// configured start/end values never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayDirection {
    #[default]
    Forward,
    Reverse,
}

impl PlayDirection {
    pub fn is_forward(self) -> bool {
        matches!(self, PlayDirection::Forward)
    }
}
