use crate::identity::SlotId;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// One record from the pointer source.
///
/// `position` is in screen space relative to the trigger line: x = 0 on the
/// line, y = 0 at the top of the screen.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub slot: SlotId,
    pub phase: PointerPhase,
    pub position: DVec2,
    pub timestamp_sec: f64,
}
