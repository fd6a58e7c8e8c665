//! Trigger-line crossing test.
//!
//! Points live in world space. Subtracting the scroll offset gives the
//! screen-space x, where the trigger line sits at 0.

/// One sampled stroke point in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Set once the segment starting at this point has crossed the trigger line.
    pub triggered: bool,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            triggered: false,
        }
    }

    #[inline]
    pub fn screen_x(&self, offset: f64) -> f64 {
        self.x - offset
    }
}

/// Returns the y at which the segment `p1 -> p2` crosses the trigger line
/// for the given scroll offset, or `None` when it does not.
///
/// Endpoints lying exactly on the line count as a crossing. A segment with
/// no horizontal extent in screen space never crosses, even when it lies on
/// the line.
#[inline]
pub fn hit_test(p1: &Point, p2: &Point, offset: f64) -> Option<f64> {
    let sx1 = p1.screen_x(offset);
    let sx2 = p2.screen_x(offset);
    let crosses = (sx1 <= 0.0 && sx2 >= 0.0) || (sx1 >= 0.0 && sx2 <= 0.0);
    if !crosses || sx1 == sx2 {
        return None;
    }
    let t = -sx1 / (sx2 - sx1);
    Some(p1.y + t * (p2.y - p1.y))
}
