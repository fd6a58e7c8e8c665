// Shared tuning constants used by the engine and the native frontend.

// Scrolling
pub const DEFAULT_SCROLL_SPEED: f64 = 120.0; // world units (pixels) per second
pub const DEFAULT_SCREEN_HEIGHT: f64 = 720.0;

// Pitch range: piano A0..C8
pub const FREQ_MIN: f64 = 27.5;
pub const FREQ_MAX: f64 = 4186.0;

// Tone shaping for the audio collaborator
pub const TONE_FADE_OUT_SEC: f64 = 0.25; // appended after the frame duration
pub const TONE_ATTACK_SEC: f64 = 0.005;
pub const TONE_AMPLITUDE: f32 = 0.2;

// Staff grid
pub const DEFAULT_GRID_LINES: usize = 11;
// Trigger line position as a fraction of width. At the left edge, a committed
// stroke is evicted on the frame its right end leaves the window.
pub const TRIGGER_LINE_FRACTION: f32 = 0.0;

// Palette (linear RGBA)
pub const STROKE_COLOR: [f32; 4] = [0.85, 0.88, 0.95, 1.0];
pub const STROKE_COLOR_ACTIVE: [f32; 4] = [1.0, 0.85, 0.35, 1.0];
pub const STROKE_COLOR_TRIGGERED: [f32; 4] = [0.35, 0.75, 1.0, 1.0];
pub const GRID_COLOR: [f32; 4] = [0.25, 0.27, 0.32, 1.0];
pub const TRIGGER_LINE_COLOR: [f32; 4] = [0.9, 0.3, 0.3, 1.0];
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
