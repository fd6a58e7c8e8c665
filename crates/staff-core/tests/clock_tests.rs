// Host-side tests for the scroll clock.

use staff_core::ScrollClock;

#[test]
fn offset_advances_by_elapsed_times_speed() {
    let mut clock = ScrollClock::new(10.0, 100.0);
    assert_eq!(clock.offset(), 0.0);
    let dt = clock.tick(10.5);
    assert!((dt - 0.5).abs() < 1e-12);
    assert!((clock.offset() - 50.0).abs() < 1e-9);
    assert_eq!(clock.last_tick(), 10.5);
    assert_eq!(clock.speed(), 100.0);
}

#[test]
fn backwards_timestamps_never_rewind() {
    let mut clock = ScrollClock::new(0.0, 60.0);
    let stamps = [0.1, 0.3, 0.2, 0.2, 0.05, 0.6, 0.4, 1.0];
    let mut prev = clock.offset();
    for t in stamps {
        let dt = clock.tick(t);
        assert!(dt >= 0.0, "dt {dt} at {t}");
        assert!(clock.offset() >= prev, "offset went back at {t}");
        prev = clock.offset();
    }
}

#[test]
fn backwards_step_reports_zero_elapsed() {
    let mut clock = ScrollClock::new(5.0, 10.0);
    clock.tick(6.0);
    let before = clock.offset();
    assert_eq!(clock.tick(4.0), 0.0);
    assert_eq!(clock.offset(), before);
    // later ticks measure from the earlier timestamp
    let dt = clock.tick(4.5);
    assert!((dt - 0.5).abs() < 1e-12);
}

#[test]
fn non_finite_timestamp_is_ignored() {
    let mut clock = ScrollClock::new(0.0, 10.0);
    clock.tick(1.0);
    assert_eq!(clock.tick(f64::NAN), 0.0);
    assert_eq!(clock.tick(f64::INFINITY), 0.0);
    assert_eq!(clock.last_tick(), 1.0);
    assert!((clock.tick(2.0) - 1.0).abs() < 1e-12);
    assert!((clock.offset() - 20.0).abs() < 1e-9);
}
