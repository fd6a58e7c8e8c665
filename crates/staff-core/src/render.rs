//! Line-list geometry for renderers.
//!
//! Nothing here touches a GPU. Frontends upload the vertices as-is and draw
//! them with [`STROKES_WGSL`](crate::STROKES_WGSL).

use crate::constants::{GRID_COLOR, TRIGGER_LINE_COLOR};
use crate::stroke::Stroke;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Normalized device coordinates.
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Drawable area in pixels, with the trigger line at `trigger_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub trigger_x: f32,
}

impl Viewport {
    /// Pixel position (y down) to normalized device coordinates (y up).
    #[inline]
    pub fn px_to_ndc(&self, x: f32, y: f32) -> [f32; 2] {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        [x / w * 2.0 - 1.0, 1.0 - y / h * 2.0]
    }

    /// Window pixel x to the trigger-relative x the engine expects.
    #[inline]
    pub fn px_to_trigger_relative(&self, x: f64) -> f64 {
        x - self.trigger_x as f64
    }

    #[inline]
    fn world_to_px(&self, x: f64, offset: f64) -> f32 {
        (x - offset) as f32 + self.trigger_x
    }
}

/// Evenly spaced horizontal staff lines, top to bottom, excluding the edges.
pub fn staff_line_ys(height: f32, count: usize) -> Vec<f32> {
    let step = height / (count + 1) as f32;
    (1..=count).map(|i| step * i as f32).collect()
}

/// Staff lines plus the vertical trigger line.
pub fn grid_vertices(viewport: &Viewport, line_count: usize, out: &mut Vec<LineVertex>) {
    for y in staff_line_ys(viewport.height, line_count) {
        push_line(out, viewport, [0.0, y], [viewport.width, y], GRID_COLOR);
    }
    let tx = viewport.trigger_x;
    push_line(out, viewport, [tx, 0.0], [tx, viewport.height], TRIGGER_LINE_COLOR);
}

/// One line segment per consecutive point pair. Segments that already fired
/// use `triggered_color`. Strokes entirely outside the viewport are skipped;
/// one ending exactly on the left edge counts as outside.
pub fn stroke_vertices<'a>(
    strokes: impl IntoIterator<Item = &'a Stroke>,
    offset: f64,
    viewport: &Viewport,
    color: [f32; 4],
    triggered_color: [f32; 4],
    out: &mut Vec<LineVertex>,
) {
    for stroke in strokes {
        let left = viewport.world_to_px(stroke.min_x(), offset);
        let right = viewport.world_to_px(stroke.max_x(), offset);
        if right <= 0.0 || left > viewport.width {
            continue;
        }
        for pair in stroke.points().windows(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            let a = [viewport.world_to_px(p1.x, offset), p1.y as f32];
            let b = [viewport.world_to_px(p2.x, offset), p2.y as f32];
            let c = if p1.triggered { triggered_color } else { color };
            push_line(out, viewport, a, b, c);
        }
    }
}

fn push_line(out: &mut Vec<LineVertex>, vp: &Viewport, a: [f32; 2], b: [f32; 2], color: [f32; 4]) {
    out.push(LineVertex {
        pos: vp.px_to_ndc(a[0], a[1]),
        color,
    });
    out.push(LineVertex {
        pos: vp.px_to_ndc(b[0], b[1]),
        color,
    });
}
