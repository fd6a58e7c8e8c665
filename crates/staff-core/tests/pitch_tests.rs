// Host-side tests for vertical position to frequency mapping.

use staff_core::{hit_y_to_frequency, value_to_frequency, value_to_frequency_in, FREQ_MAX, FREQ_MIN};

#[test]
fn endpoints_are_exact() {
    assert_eq!(value_to_frequency(0.0), 27.5);
    assert_eq!(value_to_frequency(1.0), 4186.0);
}

#[test]
fn equal_steps_give_equal_ratios() {
    let f0 = value_to_frequency(0.2);
    let f1 = value_to_frequency(0.4);
    let f2 = value_to_frequency(0.6);
    assert!((f1 / f0 - f2 / f1).abs() < 1e-9);
    let mid = value_to_frequency(0.5);
    assert!((mid - (FREQ_MIN * FREQ_MAX).sqrt()).abs() < 1e-6);
}

#[test]
fn higher_on_screen_is_higher_pitch() {
    let h = 1000.0;
    let mut prev = hit_y_to_frequency(0.0, h, FREQ_MIN, FREQ_MAX);
    for step in 1..=1000 {
        let f = hit_y_to_frequency(step as f64, h, FREQ_MIN, FREQ_MAX);
        assert!(f < prev, "not decreasing at y={step}");
        prev = f;
    }
}

#[test]
fn screen_edges_map_to_range_ends() {
    let h = 720.0;
    assert_eq!(hit_y_to_frequency(0.0, h, FREQ_MIN, FREQ_MAX), FREQ_MAX);
    assert_eq!(hit_y_to_frequency(h, h, FREQ_MIN, FREQ_MAX), FREQ_MIN);
    // off-screen hits are pinned
    assert_eq!(hit_y_to_frequency(-50.0, h, FREQ_MIN, FREQ_MAX), FREQ_MAX);
    assert_eq!(hit_y_to_frequency(h + 50.0, h, FREQ_MIN, FREQ_MAX), FREQ_MIN);
}

#[test]
fn custom_range_is_respected() {
    let f = value_to_frequency_in(0.5, 110.0, 440.0);
    assert!((f - 220.0).abs() < 1e-9);
}
