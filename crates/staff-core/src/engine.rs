use crate::clock::ScrollClock;
use crate::constants::*;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::identity::{IdentityAllocator, SlotId};
use crate::pitch::hit_y_to_frequency;
use crate::pointer::{PointerEvent, PointerPhase};
use crate::stroke::{SessionId, Stroke, StrokeStore};
use glam::DVec2;
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug)]
pub struct EngineParams {
    /// World units per second.
    pub scroll_speed: f64,
    pub screen_height: f64,
    pub freq_min: f64,
    pub freq_max: f64,
    pub grid_lines: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            freq_min: FREQ_MIN,
            freq_max: FREQ_MAX,
            grid_lines: DEFAULT_GRID_LINES,
        }
    }
}

impl EngineParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            return Err(ConfigError::InvalidScrollSpeed(self.scroll_speed));
        }
        validate_screen_height(self.screen_height)?;
        let (min, max) = (self.freq_min, self.freq_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(ConfigError::InvalidFrequencyRange { min, max });
        }
        Ok(())
    }
}

fn validate_screen_height(h: f64) -> Result<(), ConfigError> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScreenHeight(h))
    }
}

/// A tone request produced when a stroke crosses the trigger line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerEvent {
    pub hit_y: f64,
    pub frequency_hz: f64,
    pub duration_sec: f64,
}

/// Tone output. Calls are fire-and-forget and may overlap; implementations
/// handle their own failures.
pub trait AudioPlayer {
    fn play(&self, frequency_hz: f64, duration_sec: f64);
}

impl<F: Fn(f64, f64)> AudioPlayer for F {
    fn play(&self, frequency_hz: f64, duration_sec: f64) {
        self(frequency_hz, duration_sec)
    }
}

/// Owns the scroll clock and both stroke stores.
///
/// A stroke lives in `active` while its touch is down and is moved to
/// `committed` on touch-up; which store holds it is its drawing state.
pub struct Engine {
    params: EngineParams,
    clock: ScrollClock,
    active: StrokeStore,
    committed: StrokeStore,
    identities: IdentityAllocator,
}

impl Engine {
    pub fn new(params: EngineParams, now_sec: f64) -> Result<Self, ConfigError> {
        params.validate()?;
        let clock = ScrollClock::new(now_sec, params.scroll_speed);
        Ok(Self {
            params,
            clock,
            active: StrokeStore::new(),
            committed: StrokeStore::new(),
            identities: IdentityAllocator::new(),
        })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn set_screen_height(&mut self, screen_height: f64) -> Result<(), ConfigError> {
        validate_screen_height(screen_height)?;
        self.params.screen_height = screen_height;
        Ok(())
    }

    pub fn handle_pointer(&mut self, ev: &PointerEvent) {
        self.on_pointer_event(ev.slot, ev.phase, ev.position);
    }

    /// Feeds one pointer sample. `position` is relative to the trigger line.
    pub fn on_pointer_event(&mut self, slot: SlotId, phase: PointerPhase, position: DVec2) {
        let point = Point::new(position.x + self.clock.offset(), position.y);
        match phase {
            PointerPhase::Down => {
                let mut id = self.identities.resolve(slot);
                if self.active.contains(id) {
                    // The platform lost the previous touch-up.
                    log::warn!("[stroke] {id} still active on touch-down; committing it");
                    self.commit(id);
                    id = self.identities.rotate(slot);
                }
                log::debug!("[stroke] begin {id} slot={}", slot.0);
                self.active.append_point(id, point);
            }
            PointerPhase::Move => {
                let id = self.identities.resolve(slot);
                self.active.append_point(id, point);
            }
            PointerPhase::Up => {
                let id = self.identities.resolve(slot);
                self.active.append_point(id, point);
                self.commit(id);
                self.identities.rotate(slot);
            }
        }
    }

    fn commit(&mut self, id: SessionId) {
        match self.active.remove(id) {
            Some(stroke) => {
                log::debug!("[stroke] commit {id} points={}", stroke.len());
                self.committed.insert(id, stroke);
            }
            None => {
                debug_assert!(false, "commit of unknown session {id}");
                log::warn!("[stroke] commit of unknown session {id}; skipped");
            }
        }
    }

    /// Advances the scroll, evicts strokes that have left the screen and
    /// collects this frame's trigger-line crossings into `out_events`.
    pub fn tick(&mut self, now_sec: f64, out_events: &mut Vec<TriggerEvent>) {
        let dt = self.clock.tick(now_sec);
        let offset = self.clock.offset();

        let evicted = self.committed.evict_older_than(offset);
        if evicted > 0 {
            log::debug!(
                "[evict] removed {evicted} strokes at offset {offset:.1}, {} left",
                self.committed.len()
            );
        }

        // Several strokes crossing at the same y in one frame make one tone.
        let mut hits: SmallVec<[f64; 8]> = SmallVec::new();
        for stroke in self.active.strokes_mut().chain(self.committed.strokes_mut()) {
            stroke.sweep_crossings(offset, |y| {
                if !hits.contains(&y) {
                    hits.push(y);
                }
            });
        }

        let p = &self.params;
        out_events.extend(hits.into_iter().map(|hit_y| TriggerEvent {
            hit_y,
            frequency_hz: hit_y_to_frequency(hit_y, p.screen_height, p.freq_min, p.freq_max),
            duration_sec: dt,
        }));
    }

    /// Runs [`Engine::tick`] and hands every trigger to `player`.
    pub fn tick_with_player(&mut self, now_sec: f64, player: &dyn AudioPlayer) -> usize {
        let mut events = Vec::new();
        self.tick(now_sec, &mut events);
        for ev in &events {
            log::trace!("[trigger] y={:.1} f={:.1}Hz", ev.hit_y, ev.frequency_hz);
            player.play(ev.frequency_hz, ev.duration_sec);
        }
        events.len()
    }

    pub fn offset(&self) -> f64 {
        self.clock.offset()
    }

    pub fn clock(&self) -> &ScrollClock {
        &self.clock
    }

    pub fn active(&self) -> &StrokeStore {
        &self.active
    }

    pub fn committed(&self) -> &StrokeStore {
        &self.committed
    }

    /// Every stroke on the surface, in-progress first.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.active.strokes().chain(self.committed.strokes())
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    /// Session currently bound to `slot`, if the slot has been seen.
    pub fn session_for(&self, slot: SlotId) -> Option<SessionId> {
        self.identities.current(slot)
    }
}

/// Engine behind a mutex, for hosts that deliver pointer events and frame
/// ticks on different threads. A poisoned lock is taken over rather than
/// propagated.
#[derive(Clone)]
pub struct SharedEngine(Arc<Mutex<Engine>>);

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self(Arc::new(Mutex::new(engine)))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn handle_pointer(&self, ev: &PointerEvent) {
        self.with(|e| e.handle_pointer(ev));
    }

    pub fn tick_with_player(&self, now_sec: f64, player: &dyn AudioPlayer) -> usize {
        self.with(|e| e.tick_with_player(now_sec, player))
    }
}
