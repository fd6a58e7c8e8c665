use crate::error::StrokeError;
use crate::geometry::{hit_test, Point};
use fnv::FnvHashMap;
use std::fmt;

/// Identifier of one logical touch, from touch-down to touch-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Append-only run of points for one touch, with its cached horizontal extent.
///
/// A stroke always holds at least one point.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Point>,
    min_x: f64,
    max_x: f64,
}

impl Stroke {
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
            min_x: first.x,
            max_x: first.x,
        }
    }

    pub fn from_points(points: Vec<Point>) -> Result<Self, StrokeError> {
        let (first, rest) = points.split_first().ok_or(StrokeError::Empty)?;
        let mut stroke = Stroke::new(*first);
        stroke.points.reserve(rest.len());
        for p in rest {
            stroke.push(*p);
        }
        Ok(stroke)
    }

    pub fn push(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a stroke holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn last(&self) -> &Point {
        // non-empty by construction
        &self.points[self.points.len() - 1]
    }

    /// Runs the trigger-line test over every segment that has not fired yet,
    /// marking each crossing segment so it fires only once.
    pub fn sweep_crossings(&mut self, offset: f64, mut on_hit: impl FnMut(f64)) {
        if offset < self.min_x || offset > self.max_x {
            return;
        }
        for i in 1..self.points.len() {
            let p2 = self.points[i];
            let p1 = &mut self.points[i - 1];
            if p1.triggered {
                continue;
            }
            if let Some(y) = hit_test(p1, &p2, offset) {
                p1.triggered = true;
                on_hit(y);
            }
        }
    }
}

/// Strokes keyed by session.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: FnvHashMap<SessionId, Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the session's stroke, starting a new one if there is none.
    pub fn append_point(&mut self, id: SessionId, point: Point) {
        match self.strokes.get_mut(&id) {
            Some(stroke) => stroke.push(point),
            None => {
                self.strokes.insert(id, Stroke::new(point));
            }
        }
    }

    /// Takes ownership of a stroke moved out of another store.
    /// Returns the stroke previously stored under `id`, which should never exist.
    pub fn insert(&mut self, id: SessionId, stroke: Stroke) -> Option<Stroke> {
        let previous = self.strokes.insert(id, stroke);
        debug_assert!(previous.is_none(), "session {id} inserted twice");
        previous
    }

    pub fn remove(&mut self, id: SessionId) -> Option<Stroke> {
        self.strokes.remove(&id)
    }

    /// Drops every stroke whose rightmost point is at or left of `offset`.
    /// Returns how many were dropped.
    pub fn evict_older_than(&mut self, offset: f64) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|_, s| s.max_x() > offset);
        before - self.strokes.len()
    }

    pub fn get(&self, id: SessionId) -> Option<&Stroke> {
        self.strokes.get(&id)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.strokes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &Stroke)> {
        self.strokes.iter().map(|(id, s)| (*id, s))
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.values()
    }

    pub(crate) fn strokes_mut(&mut self) -> impl Iterator<Item = &mut Stroke> {
        self.strokes.values_mut()
    }
}
