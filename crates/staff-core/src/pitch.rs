//! Vertical position to frequency. Equal vertical spacing gives equal pitch ratios.

/// Exponential interpolation between `freq_min` (value 0) and `freq_max` (value 1).
///
/// Written as a weighted geometric mean so both endpoints come out exact.
#[inline]
pub fn value_to_frequency_in(value: f64, freq_min: f64, freq_max: f64) -> f64 {
    freq_min.powf(1.0 - value) * freq_max.powf(value)
}

/// [`value_to_frequency_in`] over the piano range A0..C8.
#[inline]
pub fn value_to_frequency(value: f64) -> f64 {
    value_to_frequency_in(value, crate::FREQ_MIN, crate::FREQ_MAX)
}

/// Maps a screen y (0 at the top) to a frequency. Higher on screen is higher
/// pitch; positions outside the screen are pinned to the range ends.
#[inline]
pub fn hit_y_to_frequency(hit_y: f64, screen_height: f64, freq_min: f64, freq_max: f64) -> f64 {
    let normalized = ((screen_height - hit_y) / screen_height).clamp(0.0, 1.0);
    value_to_frequency_in(normalized, freq_min, freq_max)
}
