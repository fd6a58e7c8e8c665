/// Scroll offset driven by elapsed wall time.
///
/// The offset only ever grows: timestamps that go backwards advance it by zero.
#[derive(Clone, Debug)]
pub struct ScrollClock {
    offset: f64,
    last_tick: f64,
    speed: f64,
}

impl ScrollClock {
    pub fn new(now_sec: f64, speed: f64) -> Self {
        Self {
            offset: 0.0,
            last_tick: now_sec,
            speed,
        }
    }

    /// Advances the offset to `now_sec` and returns the elapsed seconds.
    pub fn tick(&mut self, now_sec: f64) -> f64 {
        if !now_sec.is_finite() {
            log::warn!("[clock] ignoring non-finite timestamp {now_sec}");
            return 0.0;
        }
        let dt = (now_sec - self.last_tick).max(0.0);
        if now_sec < self.last_tick {
            log::trace!("[clock] timestamp went back by {:.4}s", self.last_tick - now_sec);
        }
        self.offset += dt * self.speed;
        self.last_tick = now_sec;
        dt
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}
