// Host-side tests for strokes and stroke stores.

use staff_core::{Point, SessionId, Stroke, StrokeError, StrokeStore};

fn stroke_spanning(min_x: f64, max_x: f64) -> Stroke {
    Stroke::from_points(vec![Point::new(min_x, 0.0), Point::new(max_x, 0.0)]).unwrap()
}

#[test]
fn empty_stroke_is_rejected() {
    assert_eq!(Stroke::from_points(Vec::new()).unwrap_err(), StrokeError::Empty);
}

#[test]
fn extent_tracks_every_append() {
    let mut s = Stroke::new(Point::new(10.0, 0.0));
    assert_eq!((s.min_x(), s.max_x()), (10.0, 10.0));
    s.push(Point::new(25.0, 1.0));
    s.push(Point::new(-5.0, 2.0));
    s.push(Point::new(3.0, 3.0));
    assert_eq!((s.min_x(), s.max_x()), (-5.0, 25.0));
    assert_eq!(s.len(), 4);
    assert_eq!(s.last().y, 3.0);
    let xs: Vec<f64> = s.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![10.0, 25.0, -5.0, 3.0]);
}

#[test]
fn append_point_creates_then_extends() {
    let mut store = StrokeStore::new();
    let id = SessionId(7);
    store.append_point(id, Point::new(1.0, 1.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).map(Stroke::len), Some(1));
    store.append_point(id, Point::new(2.0, 1.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).map(Stroke::len), Some(2));
}

#[test]
fn remove_hands_over_ownership() {
    let mut active = StrokeStore::new();
    let mut committed = StrokeStore::new();
    let id = SessionId(1);
    active.append_point(id, Point::new(0.0, 0.0));
    active.append_point(id, Point::new(5.0, 0.0));

    let stroke = active.remove(id).expect("present");
    assert!(committed.insert(id, stroke).is_none());
    assert!(!active.contains(id));
    assert_eq!(committed.get(id).map(Stroke::len), Some(2));
    assert!(active.remove(id).is_none());
}

#[test]
fn eviction_drops_strokes_at_or_left_of_offset() {
    let mut store = StrokeStore::new();
    store.insert(SessionId(0), stroke_spanning(-10.0, 40.0));
    store.insert(SessionId(1), stroke_spanning(0.0, 50.0));
    store.insert(SessionId(2), stroke_spanning(10.0, 50.000_001));
    store.insert(SessionId(3), stroke_spanning(60.0, 90.0));

    let removed = store.evict_older_than(50.0);
    assert_eq!(removed, 2);
    assert!(!store.contains(SessionId(0)));
    assert!(!store.contains(SessionId(1)));
    assert!(store.contains(SessionId(2)));
    assert!(store.contains(SessionId(3)));

    let kept = store.get(SessionId(3)).unwrap();
    assert_eq!((kept.min_x(), kept.max_x(), kept.len()), (60.0, 90.0, 2));
}

#[test]
fn eviction_holds_for_any_offset() {
    for offset in [-100.0, -1.0, 0.0, 12.5, 49.0, 50.0, 75.0, 1000.0] {
        let mut store = StrokeStore::new();
        for (i, max_x) in [-50.0, 0.0, 25.0, 50.0, 100.0].iter().enumerate() {
            store.insert(SessionId(i as u64), stroke_spanning(max_x - 10.0, *max_x));
        }
        store.evict_older_than(offset);
        for (_, s) in store.iter() {
            assert!(s.max_x() > offset, "offset {offset} kept max_x {}", s.max_x());
        }
        let expected = [-50.0, 0.0, 25.0, 50.0, 100.0]
            .iter()
            .filter(|m| **m > offset)
            .count();
        assert_eq!(store.len(), expected, "offset {offset}");
    }
}

#[test]
fn sweep_fires_each_segment_once() {
    let mut s = Stroke::from_points(vec![
        Point::new(0.0, 10.0),
        Point::new(20.0, 30.0),
        Point::new(40.0, 30.0),
    ])
    .unwrap();

    let mut hits = Vec::new();
    s.sweep_crossings(10.0, |y| hits.push(y));
    assert_eq!(hits, vec![20.0]);
    assert!(s.points()[0].triggered);
    assert!(!s.points()[1].triggered);

    hits.clear();
    s.sweep_crossings(15.0, |y| hits.push(y));
    assert!(hits.is_empty(), "first segment already fired");

    s.sweep_crossings(30.0, |y| hits.push(y));
    assert_eq!(hits, vec![30.0]);
    assert!(s.points()[1].triggered);
}

#[test]
fn sweep_skips_strokes_away_from_the_line() {
    let mut s = stroke_spanning(100.0, 200.0);
    let mut hits = 0;
    s.sweep_crossings(50.0, |_| hits += 1);
    s.sweep_crossings(250.0, |_| hits += 1);
    assert_eq!(hits, 0);
    assert!(s.points().iter().all(|p| !p.triggered));
}

#[test]
fn strokes_are_never_empty() {
    let s = Stroke::new(Point::new(0.0, 0.0));
    assert!(!s.is_empty());
    assert_eq!(s.len(), 1);
}
