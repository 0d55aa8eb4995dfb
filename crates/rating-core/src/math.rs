//! Decimal rounding helpers.

/// Round `value` to `places` decimal places, halves away from zero.
pub fn round_to_ndp(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Floor `value` to `places` decimal places.
pub fn floor_to_ndp(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).floor() / scale
}
