//! Numeric constants and angle conversions.

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Positive infinity.
pub const INF: f64 = f64::INFINITY;

/// Negative infinity.
pub const NEG_INF: f64 = f64::NEG_INFINITY;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rad2deg(rad: f64) -> f64 {
    180.0 * rad / PI
}
