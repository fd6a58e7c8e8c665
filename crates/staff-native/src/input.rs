use glam::DVec2;
use staff_core::render::Viewport;
use staff_core::{PointerEvent, PointerPhase, SlotId};
use winit::event::{ElementState, MouseButton, TouchPhase};

/// Touch ids come from the platform; the mouse gets a slot no touch will use.
pub const MOUSE_SLOT: SlotId = SlotId(u64::MAX);

#[inline]
pub fn touch_phase(phase: TouchPhase) -> PointerPhase {
    match phase {
        TouchPhase::Started => PointerPhase::Down,
        TouchPhase::Moved => PointerPhase::Move,
        TouchPhase::Ended | TouchPhase::Cancelled => PointerPhase::Up,
    }
}

/// Turns winit mouse and touch input into pointer events relative to the
/// trigger line.
#[derive(Default, Clone, Copy)]
pub struct PointerMapper {
    cursor: DVec2,
    mouse_down: bool,
}

impl PointerMapper {
    pub fn cursor_moved(&mut self, px: DVec2, vp: &Viewport, now_sec: f64) -> Option<PointerEvent> {
        self.cursor = px;
        self.mouse_down
            .then(|| pointer_event(MOUSE_SLOT, PointerPhase::Move, px, vp, now_sec))
    }

    pub fn mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
        vp: &Viewport,
        now_sec: f64,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        let phase = match (state, self.mouse_down) {
            (ElementState::Pressed, false) => PointerPhase::Down,
            (ElementState::Released, true) => PointerPhase::Up,
            _ => return None,
        };
        self.mouse_down = phase == PointerPhase::Down;
        Some(pointer_event(MOUSE_SLOT, phase, self.cursor, vp, now_sec))
    }

    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        px: DVec2,
        vp: &Viewport,
        now_sec: f64,
    ) -> PointerEvent {
        pointer_event(SlotId(id), touch_phase(phase), px, vp, now_sec)
    }
}

fn pointer_event(
    slot: SlotId,
    phase: PointerPhase,
    px: DVec2,
    vp: &Viewport,
    now_sec: f64,
) -> PointerEvent {
    PointerEvent {
        slot,
        phase,
        position: DVec2::new(vp.px_to_trigger_relative(px.x), px.y),
        timestamp_sec: now_sec,
    }
}
