// Host-side tests for the trigger-line crossing test.

use staff_core::{hit_test, Point};

#[test]
fn crossing_interpolates_y_at_the_line() {
    let p1 = Point::new(-10.0, 100.0);
    let p2 = Point::new(30.0, 200.0);
    let y = hit_test(&p1, &p2, 0.0).expect("segment spans the line");
    // t = 10 / 40
    assert!((y - 125.0).abs() < 1e-9, "got {y}");
}

#[test]
fn crossing_uses_scroll_offset() {
    let p1 = Point::new(100.0, 50.0);
    let p2 = Point::new(140.0, 90.0);
    assert!(hit_test(&p1, &p2, 0.0).is_none());
    let y = hit_test(&p1, &p2, 120.0).expect("offset places the line mid-segment");
    assert!((y - 70.0).abs() < 1e-9, "got {y}");
}

#[test]
fn swapped_points_give_same_y() {
    let cases = [
        (Point::new(-3.0, 10.0), Point::new(7.0, -40.0), 0.0),
        (Point::new(12.5, 300.0), Point::new(40.0, 120.0), 20.0),
        (Point::new(0.0, 5.0), Point::new(9.0, 15.0), 0.0),
    ];
    for (a, b, offset) in cases {
        let fwd = hit_test(&a, &b, offset).expect("forward crossing");
        let back = hit_test(&b, &a, offset).expect("reverse crossing");
        assert!((fwd - back).abs() < 1e-9, "{fwd} vs {back}");
    }
}

#[test]
fn no_crossing_when_both_on_one_side() {
    let right = (Point::new(1.0, 0.0), Point::new(20.0, 10.0));
    let left = (Point::new(-20.0, 0.0), Point::new(-1.0, 10.0));
    assert!(hit_test(&right.0, &right.1, 0.0).is_none());
    assert!(hit_test(&left.0, &left.1, 0.0).is_none());
}

#[test]
fn zero_width_segment_never_crosses() {
    // on the line
    let a = Point::new(50.0, 10.0);
    let b = Point::new(50.0, 90.0);
    assert!(hit_test(&a, &b, 50.0).is_none());
    // off the line on either side
    assert!(hit_test(&a, &b, 0.0).is_none());
    assert!(hit_test(&a, &b, 80.0).is_none());
}

#[test]
fn endpoint_on_the_line_counts() {
    let a = Point::new(0.0, 42.0);
    let b = Point::new(25.0, 80.0);
    assert_eq!(hit_test(&a, &b, 0.0), Some(42.0));
    let y = hit_test(&b, &a, 0.0).expect("endpoint touching the line");
    assert!((y - 42.0).abs() < 1e-9);
}
